use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AnalyzeCodeUseCase, ChatUseCase, CompletionClient};
use crate::connector::adapter::{CompletionConfig, HttpCompletionClient, MockCompletionClient};

#[derive(Debug, Default)]
pub struct ContainerConfig {
    /// Answer from [`MockCompletionClient`] instead of the network.
    pub mock: bool,
    /// Overrides `LLAMA_MODEL` / the default model.
    pub model: Option<String>,
    /// Overrides `LLAMA_API_URL` / the default endpoint.
    pub endpoint: Option<String>,
}

pub struct Container {
    client: Arc<dyn CompletionClient>,
}

impl Container {
    /// Builds the completion client once. A missing API key fails here, before
    /// any request can be attempted.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client: Arc<dyn CompletionClient> = if config.mock {
            debug!("Using mock completion client");
            Arc::new(MockCompletionClient::new())
        } else {
            let mut completion_config = CompletionConfig::from_env()?;
            if let Some(model) = config.model {
                completion_config = completion_config.with_model(model);
            }
            if let Some(endpoint) = config.endpoint {
                completion_config = completion_config.with_endpoint(endpoint);
            }
            debug!("Using completion endpoint {:?}", completion_config);
            Arc::new(HttpCompletionClient::new(completion_config)?)
        };

        Ok(Self { client })
    }

    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(self.client.clone())
    }

    pub fn analyze_use_case(&self) -> AnalyzeCodeUseCase {
        AnalyzeCodeUseCase::new(self.client.clone())
    }
}
