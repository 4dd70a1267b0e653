//! Non-interactive UI for CI/headless environments.
//!
//! Confirmations resolve to their default (no) without blocking, so a CI
//! run reports outdated Homebrew packages but never mutates anything.

use crate::error::Result;

use super::{LineSpinner, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✅  {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠️  {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("❌  {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_hints() {
            println!("   {}", msg);
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(%question, default, "non-interactive confirm resolved to default");
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default_without_blocking() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.confirm("Do you want to update all packages?", false).unwrap());
        assert!(ui.confirm("Do you want to update all packages?", true).unwrap());
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn reports_its_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn spinner_is_line_based() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("Checking...");
        spinner.finish_success("Done");
    }
}
