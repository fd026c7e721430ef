use async_trait::async_trait;

use crate::domain::{Conversation, DomainError};

/// Sends a conversation to a chat-completions model and returns the
/// assistant's text.
///
/// Implementors own transport, authentication and wire format. The flows only
/// see the conversation going in and the text (or a [`DomainError`]) coming out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One request, no retry. `temperature` is forwarded as-is.
    async fn complete(
        &self,
        conversation: &Conversation,
        temperature: f32,
    ) -> Result<String, DomainError>;
}
