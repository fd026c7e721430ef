mod analyze_code;
mod chat;

pub use analyze_code::*;
pub use chat::*;
