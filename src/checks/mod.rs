//! Toolchain version checks.
//!
//! This module holds the declarative tool registry, the generic checker
//! that evaluates it, and the sequential orchestrator. Checks run in a
//! fixed order for deterministic output; each check is an isolation
//! boundary, so one tool failing (network down, weird output) never
//! prevents the remaining checks from running and reporting.

pub mod checker;
pub mod registry;
pub mod report;
pub mod status;
pub mod version;

pub use checker::ToolChecker;
pub use registry::{InstalledProbe, LatestSource, ManagerDef, ToolDef};
pub use status::CheckStatus;

use crate::exec::CommandRunner;
use crate::release::ReleaseSource;
use crate::ui::UserInterface;

/// Run the given checks sequentially, reporting each outcome.
///
/// Errors are reported per tool and swallowed; sibling checks always run.
pub fn run_checks(
    tools: &[&ToolDef],
    runner: &dyn CommandRunner,
    releases: &dyn ReleaseSource,
    ui: &mut dyn UserInterface,
) {
    let checker = ToolChecker::new(runner, releases);
    for tool in tools {
        match checker.check(tool) {
            Ok(status) => report::render(ui, tool, &status),
            Err(err) => ui.error(&report::check_failed_line(tool, &err)),
        }
    }
}
