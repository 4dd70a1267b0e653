//! Error types for uptodate operations.
//!
//! This module defines [`CheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors
//! - A failure in one tool's check is reported and never aborts the others

use thiserror::Error;

/// Core error type for uptodate operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An external command ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A version command produced output we could not parse.
    #[error("Could not parse version from `{command}` output: {message}")]
    MalformedVersionOutput { command: String, message: String },

    /// The release endpoint answered, but not with something usable.
    #[error("Release lookup for {repo} failed: {message}")]
    ReleaseLookup { repo: String, message: String },

    /// The release body was valid JSON but carried no tag name.
    #[error("No tag_name in latest release of {repo}")]
    MissingTagName { repo: String },

    /// A tool name passed to --only/--skip that isn't tracked.
    #[error("Unknown tool: {name} (expected one of: node, deno, rust, brew)")]
    UnknownTool { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error wrapper.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for uptodate operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = CheckError::CommandFailed {
            command: "brew update".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew update"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn malformed_output_displays_command_and_message() {
        let err = CheckError::MalformedVersionOutput {
            command: "rustc --version".into(),
            message: "expected a second field".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rustc --version"));
        assert!(msg.contains("second field"));
    }

    #[test]
    fn release_lookup_displays_repo() {
        let err = CheckError::ReleaseLookup {
            repo: "denoland/deno".into(),
            message: "HTTP 503".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("denoland/deno"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn missing_tag_name_displays_repo() {
        let err = CheckError::MissingTagName {
            repo: "rust-lang/rust".into(),
        };
        assert!(err.to_string().contains("rust-lang/rust"));
    }

    #[test]
    fn unknown_tool_names_the_offender() {
        let err = CheckError::UnknownTool {
            name: "python".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python"));
        assert!(msg.contains("brew"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckError = io_err.into();
        assert!(matches!(err, CheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CheckError::UnknownTool { name: "go".into() })
        }
        assert!(returns_error().is_err());
    }
}
