//! Terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{PageCacheError, Result};

use super::{should_use_colors, OutputMode, PageCacheTheme, Prompt, UserInterface};

/// Check if running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the UI for the current process.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, interactive))
}

/// Terminal UI writing to stdout, with errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PageCacheTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// Prompts are only shown when `interactive` is set and stdin/stdout
    /// are attached to a terminal.
    pub fn new(mode: OutputMode, interactive: bool) -> Self {
        let theme = if should_use_colors() {
            PageCacheTheme::new()
        } else {
            PageCacheTheme::plain()
        };
        let out = Term::stdout();

        Self {
            interactive: interactive && out.is_term(),
            out,
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        if !self.interactive {
            return Ok(prompt.default);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(&prompt.question)
            .default(prompt.default)
            .interact_on(&self.out)
            .map_err(|e| PageCacheError::Io(e.into()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
