//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with canned responses keyed by
//! the rendered command string, and records every invocation so tests can
//! assert that absent tools trigger no further subprocess work.
//!
//! # Example
//!
//! ```
//! use uptodate::exec::mock::MockRunner;
//! use uptodate::exec::CommandRunner;
//!
//! let mut runner = MockRunner::new();
//! runner.respond("node -v", "v20.1.0");
//! runner.respond_not_found("fnm --version");
//!
//! assert_eq!(runner.run("node", &["-v"]).unwrap().as_deref(), Some("v20.1.0"));
//! assert!(runner.run("fnm", &["--version"]).unwrap().is_none());
//! assert_eq!(runner.calls(), vec!["node -v", "fnm --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{CheckError, Result};

use super::{render_command, CommandRunner};

/// Canned response for a single command.
#[derive(Debug, Clone)]
enum CannedResponse {
    /// Command succeeds with this (pre-trimmed) stdout.
    Output(String),
    /// Executable cannot be located.
    NotFound,
    /// Command runs but exits with this code.
    Fails(Option<i32>),
}

/// Mock command runner with canned responses and a call log.
///
/// Commands without a configured response behave as "not found", which is
/// the safe default for tests: an unexpected invocation shows up in the
/// call log rather than silently succeeding.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, CannedResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a new mock runner with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure `command` to succeed with `stdout`.
    pub fn respond(&mut self, command: &str, stdout: &str) {
        self.responses.insert(
            command.to_string(),
            CannedResponse::Output(stdout.trim().to_string()),
        );
    }

    /// Configure `command` to report its executable as missing.
    pub fn respond_not_found(&mut self, command: &str) {
        self.responses
            .insert(command.to_string(), CannedResponse::NotFound);
    }

    /// Configure `command` to exit unsuccessfully with `code`.
    pub fn respond_failure(&mut self, command: &str, code: Option<i32>) {
        self.responses
            .insert(command.to_string(), CannedResponse::Fails(code));
    }

    /// Every command run so far, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command was run.
    pub fn was_run(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        let command = render_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        match self.responses.get(&command) {
            Some(CannedResponse::Output(stdout)) => Ok(Some(stdout.clone())),
            Some(CannedResponse::Fails(code)) => Err(CheckError::CommandFailed {
                command,
                code: *code,
            }),
            Some(CannedResponse::NotFound) | None => Ok(None),
        }
    }
}
