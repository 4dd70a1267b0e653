//! Tool version checking.
//!
//! `ToolChecker` evaluates a [`ToolDef`] against the command-runner and
//! release-source ports. The protocol is the same for every tool:
//!
//! 1. probe the installed version; an absent executable short-circuits the
//!    whole check (no further subprocess work, no network),
//! 2. verify the helper prerequisite (Node.js needs fnm to list releases),
//! 3. obtain the latest version from the tool's source,
//! 4. normalize both tokens and compare for exact equality.
//!
//! Errors are returned to the orchestrator, which reports them per tool;
//! a failing check never disturbs its siblings.

use crate::error::{CheckError, Result};
use crate::exec::{render_command, CommandRunner};
use crate::release::ReleaseSource;

use super::registry::{InstalledProbe, LatestSource, ToolDef};
use super::status::CheckStatus;
use super::version;

/// Checks tools against the newest known releases.
pub struct ToolChecker<'a> {
    runner: &'a dyn CommandRunner,
    releases: &'a dyn ReleaseSource,
}

impl<'a> ToolChecker<'a> {
    /// Create a new checker over the given ports.
    pub fn new(runner: &'a dyn CommandRunner, releases: &'a dyn ReleaseSource) -> Self {
        Self { runner, releases }
    }

    /// Check a single tool.
    pub fn check(&self, tool: &ToolDef) -> Result<CheckStatus> {
        let (program, args) = tool.version_command;
        let Some(raw) = self.runner.run(program, args)? else {
            tracing::debug!(tool = tool.name, "executable not found");
            return Ok(CheckStatus::NotInstalled);
        };

        let installed = parse_installed(tool, &raw)?;

        if let Some(manager) = tool.manager {
            let (mgr_program, mgr_args) = manager.version_command;
            if self.runner.run(mgr_program, mgr_args)?.is_none() {
                return Ok(CheckStatus::ManagerMissing { manager });
            }
        }

        let latest = self.latest_version(tool)?;
        tracing::debug!(tool = tool.name, %installed, %latest, "comparing versions");

        let installed = version::normalize(installed.trim()).to_string();
        let latest = version::normalize(latest.trim()).to_string();

        if version::is_current(&installed, &latest) {
            Ok(CheckStatus::UpToDate { installed })
        } else {
            Ok(CheckStatus::Outdated { installed, latest })
        }
    }

    fn latest_version(&self, tool: &ToolDef) -> Result<String> {
        match tool.latest {
            LatestSource::Listing { program, args } => {
                let command = render_command(program, args);
                let listing =
                    self.runner
                        .run(program, args)?
                        .ok_or_else(|| CheckError::CommandFailed {
                            command: command.clone(),
                            code: None,
                        })?;
                version::last_listing_entry(&listing)
                    .map(str::to_string)
                    .ok_or_else(|| CheckError::MalformedVersionOutput {
                        command,
                        message: "listing contained no entries".to_string(),
                    })
            }
            LatestSource::GithubRelease { repo } => self.releases.latest_tag(repo),
        }
    }
}

/// Parse the installed version out of a version command's output.
fn parse_installed(tool: &ToolDef, raw: &str) -> Result<String> {
    let (program, args) = tool.version_command;
    let token = match tool.probe {
        InstalledProbe::Stdout => Some(raw.trim()),
        InstalledProbe::Field(index) => version::field(raw, index),
        InstalledProbe::SemVer => version::extract_semver(raw),
    };

    token
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CheckError::MalformedVersionOutput {
            command: render_command(program, args),
            message: format!("no version token in {:?}", raw),
        })
}
