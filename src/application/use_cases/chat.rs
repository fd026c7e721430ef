use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CompletionClient;
use crate::domain::{Conversation, DomainError};

pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Forwards one user message to the model and returns the reply.
pub struct ChatUseCase {
    client: Arc<dyn CompletionClient>,
}

impl ChatUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns `Ok(None)` without contacting the model when `user_text` is empty.
    pub async fn execute(&self, user_text: &str) -> Result<Option<String>, DomainError> {
        if user_text.is_empty() {
            debug!("Empty chat input, nothing sent");
            return Ok(None);
        }

        info!("Sending chat message ({} chars)", user_text.chars().count());

        let conversation = Conversation::system_and_user(CHAT_SYSTEM_PROMPT, user_text);
        let reply = self.client.complete(&conversation, CHAT_TEMPERATURE).await?;

        Ok(Some(reply))
    }
}
