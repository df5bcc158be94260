//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DesignerTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Results go to stdout; warnings and errors go to stderr so JSON output
/// stays parseable.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DesignerTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DesignerTheme::new()
        } else {
            DesignerTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: DesignerTheme) -> Self {
        Self {
            out: Term::stdout(),
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

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn theme(&self) -> &DesignerTheme {
        &self.theme
    }
}
