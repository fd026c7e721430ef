mod analysis_prompt;
mod completion;
mod display;
mod language;
mod message;
mod uploaded_file;

pub use analysis_prompt::*;
pub use completion::*;
pub use display::*;
pub use language::*;
pub use message::*;
pub use uploaded_file::*;
