//! # Domain Layer
//!
//! Conversation and prompt models, language detection, and the error type.
//! This layer is independent of HTTP and terminal concerns.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
