use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crossterm::style::{style, Stylize};
use indicatif::{ProgressBar, ProgressStyle};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

use crate::DisplayResult;

const THEME_NAME: &str = "base16-ocean.dark";
const RESET: &str = "\x1b[0m";

/// Terminal rendering for [`DisplayResult`]s.
///
/// Markdown text is written as-is; fenced code blocks are syntax highlighted
/// when color is enabled. With color disabled the body comes out byte-for-byte.
pub struct Presenter {
    syntaxes: SyntaxSet,
    theme: Option<Theme>,
    color: bool,
}

impl Presenter {
    /// Color follows whether stdout is a terminal.
    pub fn new() -> Self {
        Self::with_color(io::stdout().is_terminal())
    }

    pub fn plain() -> Self {
        Self::with_color(false)
    }

    fn with_color(color: bool) -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(THEME_NAME)
            .or_else(|| themes.themes.into_values().next());

        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
            color,
        }
    }

    pub fn render(&self, result: &DisplayResult, heading: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, result, heading)?;
        out.flush()
    }

    pub fn render_to<W: Write>(
        &self,
        out: &mut W,
        result: &DisplayResult,
        heading: &str,
    ) -> io::Result<()> {
        match result {
            DisplayResult::Markdown(text) => {
                let heading = format!("✅ {heading}");
                if self.color {
                    writeln!(out, "{}", style(heading).green().bold())?;
                } else {
                    writeln!(out, "{heading}")?;
                }
                self.write_markdown(out, text)?;
                if !text.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            DisplayResult::Error(text) => {
                let line = format!("❌ {text}");
                if self.color {
                    writeln!(out, "{}", style(line).red())?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
            DisplayResult::Info(text) => {
                if self.color {
                    writeln!(out, "{}", style(text).blue())?;
                } else {
                    writeln!(out, "{text}")?;
                }
            }
            DisplayResult::Skipped => {}
        }
        Ok(())
    }

    /// Prints a labelled block of source text (the decoded upload).
    pub fn write_source<W: Write>(&self, out: &mut W, title: &str, source: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", style(title).bold())?;
        } else {
            writeln!(out, "{title}")?;
        }
        out.write_all(source.as_bytes())?;
        if !source.ends_with('\n') {
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn write_markdown<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let theme = match (&self.theme, self.color) {
            (Some(theme), true) => theme,
            _ => return out.write_all(text.as_bytes()),
        };

        let mut highlighter: Option<HighlightLines<'_>> = None;

        for line in LinesWithEndings::from(text) {
            if let Some(fence) = line.trim_start().strip_prefix("```") {
                out.write_all(line.as_bytes())?;
                highlighter = match highlighter {
                    Some(_) => None,
                    None => {
                        let syntax = self
                            .syntaxes
                            .find_syntax_by_token(fence.trim())
                            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
                        Some(HighlightLines::new(syntax, theme))
                    }
                };
                continue;
            }

            match highlighter.as_mut() {
                Some(h) => {
                    let ranges = h
                        .highlight_line(line, &self.syntaxes)
                        .map_err(|e| io::Error::other(e.to_string()))?;
                    write!(out, "{}{RESET}", as_24_bit_terminal_escaped(&ranges[..], false))?;
                }
                None => out.write_all(line.as_bytes())?,
            }
        }

        Ok(())
    }

    /// In-progress indicator on stderr; call `finish_and_clear` when done.
    pub fn spinner(&self, message: &'static str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
