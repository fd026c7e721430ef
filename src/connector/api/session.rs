use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::DisplayResult;

use super::router::{expand_tilde, Router, CHAT_HEADING};

const HELP: &str = "\
Type a message to chat with the model.
  :analyze <file>   review a .py, .java, .cpp, .cc or .cxx file
  :help             show this help
  :quit             leave the session";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Chat(String),
    Analyze(Option<String>),
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" | ":exit" => return SessionCommand::Quit,
            ":help" | ":h" => return SessionCommand::Help,
            _ => {}
        }

        if let Some(rest) = trimmed.strip_prefix(":analyze") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                let path = rest.trim();
                return SessionCommand::Analyze((!path.is_empty()).then(|| path.to_string()));
            }
        }

        SessionCommand::Chat(line.to_string())
    }
}

/// Sequential read-eval loop over stdin. Each line is a fresh flow; nothing
/// carries over between turns.
pub struct Session<'r, 'a> {
    router: &'r Router<'a>,
}

impl<'r, 'a> Session<'r, 'a> {
    pub fn new(router: &'r Router<'a>) -> Self {
        Self { router }
    }

    pub async fn run(&self) -> Result<()> {
        let presenter = self.router.presenter();
        presenter.render(&DisplayResult::Info(HELP.to_string()), CHAT_HEADING)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match SessionCommand::parse(&line) {
                SessionCommand::Quit => break,
                SessionCommand::Help => {
                    presenter.render(&DisplayResult::Info(HELP.to_string()), CHAT_HEADING)?;
                }
                SessionCommand::Analyze(path) => {
                    let path = path.map(|p| expand_tilde(&p));
                    self.router.analyze(path.as_deref(), None, false).await?;
                }
                SessionCommand::Chat(message) => self.router.chat(&message).await?,
            }
        }

        debug!("Interactive session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_control_commands() {
        assert_eq!(SessionCommand::parse(":quit"), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse("  :q "), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(":help"), SessionCommand::Help);
    }

    #[test]
    fn parses_analyze_with_and_without_path() {
        assert_eq!(
            SessionCommand::parse(":analyze src/app.py"),
            SessionCommand::Analyze(Some("src/app.py".to_string()))
        );
        assert_eq!(SessionCommand::parse(":analyze"), SessionCommand::Analyze(None));
        assert_eq!(SessionCommand::parse(":analyze   "), SessionCommand::Analyze(None));
    }

    #[test]
    fn anything_else_is_chat_verbatim() {
        assert_eq!(
            SessionCommand::parse(":analyzer is a word"),
            SessionCommand::Chat(":analyzer is a word".to_string())
        );
        assert_eq!(
            SessionCommand::parse("  hello  "),
            SessionCommand::Chat("  hello  ".to_string())
        );
        assert_eq!(SessionCommand::parse(""), SessionCommand::Chat(String::new()));
    }
}
