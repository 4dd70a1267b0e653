//! Visual theme and styling.

use console::Style;

/// The status-line theme.
///
/// Status lines keep the emoji vocabulary of the tool's lineage: a green
/// check for current, a yellow warning for outdated or missing, a red cross
/// for check failures, and indented blue hint lines carrying remediation
/// commands.
#[derive(Debug, Clone)]
pub struct UptodateTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/progress lines (blue bold).
    pub info: Style,
    /// Style for hint lines (blue).
    pub hint: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
}

impl Default for UptodateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl UptodateTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue().bold(),
            hint: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format a success line (✅ + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✅  {}", msg)))
    }

    /// Format a warning line (⚠️ + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠️  {}", msg)))
    }

    /// Format an error line (❌ + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("❌  {}", msg)))
    }

    /// Format an indented hint line (blue).
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("   {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
