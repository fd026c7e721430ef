use crate::domain::DomainError;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3-70b-instruct";

pub const API_KEY_VAR: &str = "LLAMA_API_KEY";
/// Older deployments keep the key under this name in their `.env`.
pub const LEGACY_API_KEY_VAR: &str = "llama_key";
pub const ENDPOINT_VAR: &str = "LLAMA_API_URL";
pub const MODEL_VAR: &str = "LLAMA_MODEL";

/// Read-only settings for [`super::HttpCompletionClient`], built once at startup.
#[derive(Clone)]
pub struct CompletionConfig {
    endpoint: String,
    api_key: String,
    model: String,
}

impl CompletionConfig {
    /// Fails when the key is empty so that no unauthenticated request is ever sent.
    pub fn new(api_key: impl Into<String>) -> Result<Self, DomainError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DomainError::config("API key is empty"));
        }
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Construct from the process environment:
    ///
    /// | Variable        | Default                                          |
    /// |-----------------|--------------------------------------------------|
    /// | `LLAMA_API_KEY` | required (falls back to `llama_key`)             |
    /// | `LLAMA_API_URL` | `https://openrouter.ai/api/v1/chat/completions`  |
    /// | `LLAMA_MODEL`   | `meta-llama/llama-3-70b-instruct`                |
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .or_else(|| lookup(LEGACY_API_KEY_VAR))
            .ok_or_else(|| {
                DomainError::config(format!(
                    "{API_KEY_VAR} is not set (add it to the environment or a .env file)"
                ))
            })?;

        let mut config = Self::new(api_key)?;
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}
