use std::path::Path;

use tracing::warn;

use crate::application::AnalysisDraft;
use crate::{DisplayResult, DomainError, UploadedFile};

use super::super::Container;

pub const UPLOAD_HINT: &str = "Please upload a .py, .java, or .cpp file for analysis.";
pub const UNSUPPORTED_FILE: &str = "Unsupported file type.";

pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Full analysis cycle. `edited` replaces the decoded file text when given.
    pub async fn analyze(&self, file: Option<UploadedFile>, edited: Option<String>) -> DisplayResult {
        let mut draft = match self.prepare(file) {
            Ok(draft) => draft,
            Err(display) => return display,
        };

        if let Some(content) = edited {
            draft.set_content(content);
        }

        self.execute(&draft).await
    }

    /// Reads `path` from disk and prepares it. `None` yields the upload hint.
    pub async fn load(&self, path: Option<&Path>) -> Result<AnalysisDraft, DisplayResult> {
        let file = match path {
            Some(path) => match UploadedFile::from_path(path).await {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!("Could not read {}: {e}", path.display());
                    return Err(e.into());
                }
            },
            None => None,
        };

        self.prepare(file)
    }

    /// Reads replacement text for a draft. Bytes are decoded with the same
    /// strict UTF-8 rule as uploads.
    pub async fn load_edited(&self, path: &Path) -> Result<String, DisplayResult> {
        let decoded = UploadedFile::from_path(path)
            .await
            .and_then(|file| file.decode());

        decoded.map_err(|e| {
            warn!("Could not read edited content from {}: {e}", path.display());
            e.into()
        })
    }

    /// Decoding and language checks. No request is made on any error path.
    pub fn prepare(&self, file: Option<UploadedFile>) -> Result<AnalysisDraft, DisplayResult> {
        let Some(file) = file else {
            return Err(DisplayResult::Info(UPLOAD_HINT.to_string()));
        };

        self.container
            .analyze_use_case()
            .prepare(&file)
            .map_err(|e| match e {
                DomainError::UnsupportedInput(_) => DisplayResult::Error(UNSUPPORTED_FILE.to_string()),
                other => other.into(),
            })
    }

    pub async fn execute(&self, draft: &AnalysisDraft) -> DisplayResult {
        let result = self.container.analyze_use_case().execute(draft).await;

        if let Err(e) = &result {
            warn!("Analysis of {} failed: {e}", draft.filename());
        }

        result.into()
    }
}
