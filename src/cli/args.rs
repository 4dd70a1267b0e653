//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running without a
//! subcommand checks everything.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// uptodate - Check that local developer toolchains are at their latest versions.
#[derive(Debug, Parser)]
#[command(name = "uptodate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output (includes command-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (no spinners, no remediation hints)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; the Homebrew upgrade question resolves to "no"
    #[arg(long, global = true, env = "UPTODATE_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check tracked toolchains (default if no command specified)
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Check only these tools (comma-separated: node, deno, rust, brew)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these tools (comma-separated: node, deno, rust, brew)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
