//! uptodate - Check that local developer toolchains are at their latest versions.
//!
//! uptodate probes the locally installed Node.js, Deno, and Rust toolchains,
//! compares each against the newest published release, prints a colored
//! status line per tool, and offers to upgrade outdated Homebrew packages.
//!
//! # Modules
//!
//! - [`checks`] - Tool registry, version checker, and status reporting
//! - [`cli`] - Command-line interface and dispatch
//! - [`error`] - Error types and result aliases
//! - [`exec`] - External command execution behind the `CommandRunner` port
//! - [`release`] - GitHub latest-release lookups behind the `ReleaseSource` port
//! - [`ui`] - Terminal output, theming, spinners, and the confirmation read
//! - [`updates`] - The interactive Homebrew update flow
//!
//! # Example
//!
//! ```
//! use uptodate::checks::version::{is_current, normalize};
//!
//! assert_eq!(normalize("v20.1.0"), "20.1.0");
//! assert!(is_current("v20.1.0", "20.1.0"));
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod exec;
pub mod release;
pub mod ui;
pub mod updates;

pub use error::{CheckError, Result};
