use tracing::warn;

use crate::DisplayResult;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Every failure becomes [`DisplayResult::Error`]; nothing propagates.
    pub async fn chat(&self, user_text: &str) -> DisplayResult {
        let use_case = self.container.chat_use_case();

        match use_case.execute(user_text).await {
            Ok(Some(reply)) => DisplayResult::Markdown(reply),
            Ok(None) => DisplayResult::Skipped,
            Err(e) => {
                warn!("Chat failed: {e}");
                e.into()
            }
        }
    }
}
