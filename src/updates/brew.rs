//! Homebrew update checking and interactive upgrading.
//!
//! The one mutating flow in the tool. The states are strictly linear:
//! not installed, checking, up to date, prompting, then either upgrading
//! (upgrade + cleanup, in that order) or skipped. A single non-`y` answer
//! means no; there is no retry on malformed input.

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::ui::UserInterface;

/// Terminal state of the Homebrew flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Homebrew is not on the system; nothing to do.
    NotInstalled,
    /// Every installed package is already current.
    UpToDate,
    /// The user confirmed and upgrade + cleanup both ran.
    Updated,
    /// Outdated packages were listed but the user declined.
    Skipped,
}

/// Check for outdated Homebrew packages and offer to upgrade them.
///
/// Mutation only happens after an explicit `y`; every other path leaves
/// the system untouched.
pub fn check_and_update(
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<UpdateOutcome> {
    if runner.run("brew", &["--version"])?.is_none() {
        ui.warning("Homebrew is not installed.");
        return Ok(UpdateOutcome::NotInstalled);
    }

    let mut spinner = ui.start_spinner("🔍  Checking for Homebrew updates...");

    // Refresh the package index, then ask what is outdated.
    let refreshed = runner.run("brew", &["update"]);
    if let Err(err) = refreshed {
        spinner.finish_error("Could not refresh the Homebrew package index.");
        return Err(err);
    }

    let outdated = match runner.run("brew", &["outdated"]) {
        Ok(listing) => listing.unwrap_or_default(),
        Err(err) => {
            spinner.finish_error("Could not list outdated Homebrew packages.");
            return Err(err);
        }
    };

    if outdated.is_empty() {
        spinner.finish_success("Homebrew and all packages are up to date.");
        return Ok(UpdateOutcome::UpToDate);
    }

    spinner.finish_warning("The following packages have updates available:");
    ui.message(&outdated);

    if !ui.confirm("Do you want to update all packages?", false)? {
        ui.message("🚀  Skipping update.");
        return Ok(UpdateOutcome::Skipped);
    }

    ui.message("⬆️  Updating Homebrew and packages...");
    runner.run("brew", &["upgrade"])?;
    ui.message("🧹  Cleaning up old versions...");
    runner.run("brew", &["cleanup"])?;
    ui.success("Update complete!");

    Ok(UpdateOutcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use crate::exec::mock::MockRunner;
    use crate::ui::mock::MockUI;

    fn installed_runner() -> MockRunner {
        let mut runner = MockRunner::new();
        runner.respond("brew --version", "Homebrew 4.3.10");
        runner.respond("brew update", "Already up-to-date.");
        runner
    }

    #[test]
    fn missing_brew_is_advisory_only() {
        let mut runner = MockRunner::new();
        runner.respond_not_found("brew --version");
        let mut ui = MockUI::new();

        let outcome = check_and_update(&runner, &mut ui).unwrap();

        assert_eq!(outcome, UpdateOutcome::NotInstalled);
        assert!(ui.has_warning("Homebrew is not installed."));
        assert_eq!(runner.calls(), vec!["brew --version"]);
    }

    #[test]
    fn empty_outdated_listing_is_up_to_date() {
        let mut runner = installed_runner();
        runner.respond("brew outdated", "");
        let mut ui = MockUI::new();

        let outcome = check_and_update(&runner, &mut ui).unwrap();

        assert_eq!(outcome, UpdateOutcome::UpToDate);
        assert!(!runner.was_run("brew upgrade"));
        assert!(!runner.was_run("brew cleanup"));
    }

    #[test]
    fn confirmed_update_runs_upgrade_then_cleanup() {
        let mut runner = installed_runner();
        runner.respond("brew outdated", "wget 1.24.5 < 1.25.0\njq 1.6 < 1.7.1");
        runner.respond("brew upgrade", "");
        runner.respond("brew cleanup", "");
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let outcome = check_and_update(&runner, &mut ui).unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        let calls = runner.calls();
        let upgrade = calls.iter().position(|c| c == "brew upgrade").unwrap();
        let cleanup = calls.iter().position(|c| c == "brew cleanup").unwrap();
        assert!(upgrade < cleanup, "upgrade must run before cleanup");
        assert!(ui.has_success("Update complete!"));
    }

    #[test]
    fn declined_update_mutates_nothing() {
        let mut runner = installed_runner();
        runner.respond("brew outdated", "wget 1.24.5 < 1.25.0");
        let mut ui = MockUI::new();
        ui.queue_confirm(false);

        let outcome = check_and_update(&runner, &mut ui).unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
        assert!(!runner.was_run("brew upgrade"));
        assert!(!runner.was_run("brew cleanup"));
        assert!(ui.has_message("Skipping update."));
    }

    #[test]
    fn default_answer_declines_in_non_interactive_runs() {
        // With no queued answer the mock falls back to the default (no),
        // the same resolution NonInteractiveUI applies in CI.
        let mut runner = installed_runner();
        runner.respond("brew outdated", "wget 1.24.5 < 1.25.0");
        let mut ui = MockUI::new();

        let outcome = check_and_update(&runner, &mut ui).unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
        assert!(!runner.was_run("brew upgrade"));
    }

    #[test]
    fn outdated_listing_is_shown_verbatim() {
        let mut runner = installed_runner();
        runner.respond("brew outdated", "wget 1.24.5 < 1.25.0");
        let mut ui = MockUI::new();
        ui.queue_confirm(false);

        check_and_update(&runner, &mut ui).unwrap();

        assert!(ui.has_message("wget 1.24.5 < 1.25.0"));
    }

    #[test]
    fn failed_index_refresh_propagates() {
        let mut runner = MockRunner::new();
        runner.respond("brew --version", "Homebrew 4.3.10");
        runner.respond_failure("brew update", Some(1));
        let mut ui = MockUI::new();

        let err = check_and_update(&runner, &mut ui).unwrap_err();

        assert!(matches!(err, CheckError::CommandFailed { .. }));
        assert!(!runner.was_run("brew outdated"));
    }

    #[test]
    fn failed_outdated_listing_propagates() {
        let mut runner = installed_runner();
        runner.respond_failure("brew outdated", Some(1));
        let mut ui = MockUI::new();

        let err = check_and_update(&runner, &mut ui).unwrap_err();

        assert!(matches!(err, CheckError::CommandFailed { .. }));
        assert!(!runner.was_run("brew upgrade"));
    }
}
