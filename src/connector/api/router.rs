use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{Commands, DisplayResult};

use super::container::Container;
use super::controller::{AnalyzeController, ChatController};
use super::presenter::Presenter;
use super::session::Session;

pub const CHAT_HEADING: &str = "AI Response:";
pub const ANALYSIS_HEADING: &str = "Code Analysis Result:";

const CHAT_SPINNER: &str = "Waiting for LLaMA 3 response...";
const ANALYSIS_SPINNER: &str = "Analyzing code with LLaMA 3...";

/// Runs one command at a time and renders its result.
pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    analyze_controller: AnalyzeController<'a>,
    presenter: &'a Presenter,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container, presenter: &'a Presenter) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            analyze_controller: AnalyzeController::new(container),
            presenter,
        }
    }

    pub async fn route(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Chat { message } => self.chat(&message.join(" ")).await,
            Commands::Analyze {
                file,
                edited,
                show_content,
            } => {
                self.analyze(file.as_deref(), edited.as_deref(), show_content)
                    .await
            }
            Commands::Interactive => Session::new(self).run().await,
        }
    }

    pub async fn chat(&self, message: &str) -> Result<()> {
        let result = if message.is_empty() {
            DisplayResult::Skipped
        } else {
            let spinner = self.presenter.spinner(CHAT_SPINNER);
            let result = self.chat_controller.chat(message).await;
            spinner.finish_and_clear();
            result
        };

        self.presenter.render(&result, CHAT_HEADING)?;
        Ok(())
    }

    pub async fn analyze(
        &self,
        file: Option<&Path>,
        edited: Option<&Path>,
        show_content: bool,
    ) -> Result<()> {
        let mut draft = match self.analyze_controller.load(file).await {
            Ok(draft) => draft,
            Err(display) => {
                self.presenter.render(&display, ANALYSIS_HEADING)?;
                return Ok(());
            }
        };

        if let Some(path) = edited {
            match self.analyze_controller.load_edited(path).await {
                Ok(content) => draft.set_content(content),
                Err(display) => {
                    self.presenter.render(&display, ANALYSIS_HEADING)?;
                    return Ok(());
                }
            }
        }

        if show_content {
            let title = format!("File Content ({}, {})", draft.filename(), draft.language());
            self.presenter
                .write_source(&mut std::io::stdout().lock(), &title, draft.content())?;
        }

        let spinner = self.presenter.spinner(ANALYSIS_SPINNER);
        let result = self.analyze_controller.execute(&draft).await;
        spinner.finish_and_clear();

        self.presenter.render(&result, ANALYSIS_HEADING)?;
        Ok(())
    }

    pub fn presenter(&self) -> &Presenter {
        self.presenter
    }
}

/// Expands a leading `~/` so interactive paths behave like shell paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return PathBuf::from(home);
            }
            return PathBuf::from(home).join(&path[2..]);
        }
    }
    PathBuf::from(path)
}
