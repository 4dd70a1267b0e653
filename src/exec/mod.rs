//! External command execution.
//!
//! Every version probe and every Homebrew operation goes through the
//! [`CommandRunner`] trait so the check and update logic can be exercised
//! against a fake in tests. The real implementation, [`SystemRunner`],
//! spawns programs directly by name with an argument vector, no shell in
//! between, with stdout and stderr captured, never inherited.
//!
//! "Executable not found" is a distinguished, non-fatal outcome (`Ok(None)`):
//! callers treat it as "tool not installed", not as a fault.

pub mod mock;

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::error::{CheckError, Result};

/// Port for running external commands and capturing their output.
pub trait CommandRunner {
    /// Run `program` with `args`, returning trimmed stdout.
    ///
    /// Returns `Ok(None)` when the executable cannot be located. A non-zero
    /// exit status or any other spawn failure is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>>;
}

/// The real command runner, spawning OS processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        tracing::debug!(command = %render_command(program, args), "running command");

        let output = match Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CheckError::Io(e)),
        };

        if !output.status.success() {
            return Err(CheckError::CommandFailed {
                command: render_command(program, args),
                code: output.status.code(),
            });
        }

        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }
}

/// Render a program and its arguments as a single display string.
pub fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Check whether we are running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
