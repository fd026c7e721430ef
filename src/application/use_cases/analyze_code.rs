use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::CompletionClient;
use crate::domain::{AnalysisPrompt, Conversation, DomainError, Language, UploadedFile};

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a professional software reviewer.";
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Decoded upload waiting to be analyzed.
///
/// `content` starts as the file text and may be replaced before
/// [`AnalyzeCodeUseCase::execute`]; the replacement is what gets analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisDraft {
    filename: String,
    language: Language,
    content: String,
}

impl AnalysisDraft {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }
}

/// Asks the model for a complexity review of one source file.
pub struct AnalyzeCodeUseCase {
    client: Arc<dyn CompletionClient>,
}

impl AnalyzeCodeUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Decodes the upload and detects its language. Never contacts the model.
    pub fn prepare(&self, file: &UploadedFile) -> Result<AnalysisDraft, DomainError> {
        let content = file.decode()?;
        let language = file.language();

        if !language.is_supported() {
            warn!("Rejected upload with unsupported extension: {}", file.name());
            return Err(DomainError::unsupported_input(file.name()));
        }

        debug!(
            "Prepared {} ({}, {} chars)",
            file.name(),
            language,
            content.chars().count()
        );

        Ok(AnalysisDraft {
            filename: file.name().to_string(),
            language,
            content,
        })
    }

    pub async fn execute(&self, draft: &AnalysisDraft) -> Result<String, DomainError> {
        info!("Analyzing {} as {}", draft.filename(), draft.language());

        let prompt = AnalysisPrompt::build(draft.language(), draft.content());
        let conversation =
            Conversation::system_and_user(ANALYSIS_SYSTEM_PROMPT, prompt.into_string());

        self.client
            .complete(&conversation, ANALYSIS_TEMPERATURE)
            .await
    }

    pub async fn analyze(&self, file: &UploadedFile) -> Result<String, DomainError> {
        let draft = self.prepare(file)?;
        self.execute(&draft).await
    }
}
