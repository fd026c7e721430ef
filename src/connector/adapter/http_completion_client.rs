use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::connector::adapter::CompletionConfig;
use crate::domain::{CompletionRequest, CompletionResponse, Conversation, DomainError};

/// HTTP client for an OpenAI-compatible chat-completions endpoint
/// (OpenRouter by default).
///
/// The bearer token and JSON content type are installed once as default
/// headers. No timeout, retry or streaming: each call waits for the server
/// or for a connection-level failure.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, DomainError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|e| DomainError::config(format!("API key is not a valid header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            model: config.model().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        conversation: &Conversation,
        temperature: f32,
    ) -> Result<String, DomainError> {
        if conversation.is_empty() {
            return Err(DomainError::invalid_input("conversation has no messages"));
        }

        let request = CompletionRequest {
            model: &self.model,
            messages: conversation.messages(),
            temperature,
        };

        debug!(
            "POST {} model={} messages={} temperature={}",
            self.endpoint,
            self.model,
            conversation.len(),
            temperature
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(error_chain(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                DomainError::transport(format!("failed to read response body: {}", error_chain(&e)))
            })?;

        if status != StatusCode::OK {
            warn!("Completion endpoint returned {status}: {body}");
            return Err(DomainError::remote(status.as_u16(), body));
        }

        debug!("Completion response: {body}");

        CompletionResponse::from_body(&body)?.into_first_content()
    }
}

/// Joins an error with all of its sources, so the root cause
/// ("Connection refused", DNS or TLS failures) reaches the user.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(err), |e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
