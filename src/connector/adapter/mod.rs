mod completion_config;
mod http_completion_client;
mod mock_completion_client;

pub use completion_config::*;
pub use http_completion_client::*;
pub use mock_completion_client::*;
