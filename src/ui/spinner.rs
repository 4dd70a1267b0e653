//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::UptodateTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations (index refreshes,
/// release lookups).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.blue} {msg}")
                .expect("spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet modes).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn finish_with(&mut self, line: String) {
        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .expect("spinner template is valid"),
        );
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = UptodateTheme::new();
        self.finish_with(theme.format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        let theme = UptodateTheme::new();
        self.finish_with(theme.format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = UptodateTheme::new();
        self.finish_with(theme.format_error(msg));
    }
}

/// Spinner that prints its milestones as plain lines (CI, quiet modes).
pub struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✅  {}", msg);
    }

    fn finish_warning(&mut self, msg: &str) {
        println!("⚠️  {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("❌  {}", msg);
    }
}
