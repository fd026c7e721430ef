use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{Conversation, DomainError};

/// One call seen by [`MockCompletionClient`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub conversation: Conversation,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
enum MockReply {
    /// Repeats the last user message back.
    Echo,
    Text(String),
    Remote { status: u16, body: String },
    Transport(String),
}

/// Offline [`CompletionClient`]: answers from a script and records every call.
pub struct MockCompletionClient {
    reply: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    pub fn failing_with(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Remote {
            status,
            body: body.into(),
        })
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Transport(reason.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        conversation: &Conversation,
        temperature: f32,
    ) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                conversation: conversation.clone(),
                temperature,
            });
        }

        debug!(
            "Mock completion for {} messages at temperature {}",
            conversation.len(),
            temperature
        );

        match &self.reply {
            MockReply::Echo => Ok(conversation
                .last_user_message()
                .map(|m| m.content().to_string())
                .unwrap_or_default()),
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Remote { status, body } => Err(DomainError::remote(*status, body.clone())),
            MockReply::Transport(reason) => Err(DomainError::transport(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_repeats_user_message() {
        let client = MockCompletionClient::new();
        let conversation = Conversation::system_and_user("sys", "ping");

        assert_eq!(client.complete(&conversation, 0.7).await.unwrap(), "ping");
    }

    #[tokio::test]
    async fn records_every_call() {
        let client = MockCompletionClient::replying("pong");
        let conversation = Conversation::system_and_user("sys", "ping");

        client.complete(&conversation, 0.7).await.unwrap();
        client.complete(&conversation, 0.3).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].temperature, 0.3);
        assert_eq!(calls[0].conversation, conversation);
    }

    #[tokio::test]
    async fn scripted_failures() {
        let conversation = Conversation::system_and_user("sys", "ping");

        let remote = MockCompletionClient::failing_with(503, "overloaded");
        let err = remote.complete(&conversation, 0.7).await.unwrap_err();
        assert_eq!(err.to_string(), "Error 503: overloaded");

        let offline = MockCompletionClient::unreachable("connection refused");
        assert!(offline
            .complete(&conversation, 0.7)
            .await
            .unwrap_err()
            .is_transport());
    }
}
