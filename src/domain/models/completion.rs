use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Message};

/// Chat-completions request body: `{"model", "messages", "temperature"}`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
}

/// Only `choices[0].message.content` is consumed; every other field the
/// endpoint returns is ignored.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl CompletionResponse {
    pub fn from_body(body: &str) -> Result<Self, DomainError> {
        serde_json::from_str(body)
            .map_err(|e| DomainError::parse(format!("unexpected completion response: {e}")))
    }

    pub fn into_first_content(self) -> Result<String, DomainError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainError::parse("completion response contained no choices"))
    }
}
