use crate::domain::DomainError;

/// What a flow hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayResult {
    /// Assistant text, to be rendered with markdown semantics.
    Markdown(String),
    /// A user-visible failure message.
    Error(String),
    /// Guidance shown when there is nothing to do yet.
    Info(String),
    /// The trigger had no input; nothing was sent.
    Skipped,
}

impl DisplayResult {
    pub fn text(&self) -> &str {
        match self {
            DisplayResult::Markdown(text)
            | DisplayResult::Error(text)
            | DisplayResult::Info(text) => text,
            DisplayResult::Skipped => "",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayResult::Error(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DisplayResult::Skipped)
    }
}

impl From<DomainError> for DisplayResult {
    fn from(err: DomainError) -> Self {
        DisplayResult::Error(err.to_string())
    }
}

impl From<Result<String, DomainError>> for DisplayResult {
    fn from(result: Result<String, DomainError>) -> Self {
        match result {
            Ok(text) => DisplayResult::Markdown(text),
            Err(e) => e.into(),
        }
    }
}
