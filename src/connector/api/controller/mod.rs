pub mod analyze_controller;
pub mod chat_controller;

pub use analyze_controller::{AnalyzeController, UNSUPPORTED_FILE, UPLOAD_HINT};
pub use chat_controller::ChatController;
