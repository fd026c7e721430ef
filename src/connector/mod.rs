//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions over HTTP (OpenRouter or any compatible endpoint)
//! - Mock completions for offline runs and tests
//! - Terminal front-end (controllers, router, presenter, interactive session)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
