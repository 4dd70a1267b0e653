//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use uptodate::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Your Rust version (1.80.0) is the latest.");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::{LineSpinner, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, UptodateTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Status-line methods map onto
/// the fixed templates of the reporter; `confirm` is the single yes/no
/// question the Homebrew updater asks.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message (e.g. the outdated-package listing).
    fn message(&mut self, msg: &str);

    /// Display a success status line.
    fn success(&mut self, msg: &str);

    /// Display a warning status line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Display an indented hint line (remediation commands, advisories).
    fn hint(&mut self, msg: &str);

    /// Ask a yes/no question; answering is a single keystroke.
    ///
    /// Only an answer of exactly `y` (case-insensitive) means yes; any other
    /// input means no. Non-interactive implementations resolve to `default`
    /// without blocking.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Finish, replacing the spinner with a success line.
    fn finish_success(&mut self, msg: &str);

    /// Finish, replacing the spinner with a warning line.
    fn finish_warning(&mut self, msg: &str);

    /// Finish, replacing the spinner with an error line.
    fn finish_error(&mut self, msg: &str);
}
