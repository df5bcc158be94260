//! Styling for terminal output.

use console::Style;

/// Tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✓",
            Tone::Warning => "⚠",
            Tone::Error => "✗",
        }
    }
}

/// Styles used by the `designer` binary.
///
/// A plain theme has every style set to the identity, so formatted text is
/// safe to compare in tests.
#[derive(Debug, Clone)]
pub struct DesignerTheme {
    /// Successful status lines.
    pub success: Style,
    /// Warnings, e.g. cached loader failures.
    pub warning: Style,
    /// Errors.
    pub error: Style,
    /// Secondary detail such as parameter values.
    pub dim: Style,
    /// Page names in the tree.
    pub highlight: Style,
    /// Folder segments in the tree.
    pub folder: Style,
    /// Labels in key-value listings.
    pub key: Style,
}

impl Default for DesignerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerTheme {
    /// The colored theme.
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self::with_colors(false)
    }

    /// Build the theme, optionally without any styling.
    pub fn with_colors(colors: bool) -> Self {
        let style = |styled: fn(Style) -> Style| {
            if colors {
                styled(Style::new())
            } else {
                Style::new()
            }
        };
        Self {
            success: style(|s| s.green()),
            warning: style(|s| s.color256(208)),
            error: style(|s| s.red().bold()),
            dim: style(|s| s.dim()),
            highlight: style(|s| s.bold()),
            folder: style(|s| s.cyan()),
            key: style(|s| s.bold()),
        }
    }

    fn tone(&self, tone: Tone) -> &Style {
        match tone {
            Tone::Success => &self.success,
            Tone::Warning => &self.warning,
            Tone::Error => &self.error,
        }
    }

    /// Icon and message in the tone's style.
    pub fn format_status(&self, tone: Tone, msg: &str) -> String {
        self.tone(tone)
            .apply_to(format!("{} {}", tone.icon(), msg))
            .to_string()
    }

    /// Success line.
    pub fn format_success(&self, msg: &str) -> String {
        self.format_status(Tone::Success, msg)
    }

    /// Warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        self.format_status(Tone::Warning, msg)
    }

    /// Error line.
    pub fn format_error(&self, msg: &str) -> String {
        self.format_status(Tone::Error, msg)
    }

    /// Banner above a preview.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.folder.apply_to("◇"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
