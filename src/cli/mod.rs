//! Command-line interface and dispatch.
//!
//! Dispatch runs the selected checks in the fixed order node → deno →
//! rust → brew. The Homebrew stage runs last and, like every check, has
//! its errors caught and reported rather than aborting the run.

mod args;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs};

use clap::CommandFactory;

use crate::checks::{self, registry, ToolDef};
use crate::error::{CheckError, Result};
use crate::exec::SystemRunner;
use crate::release::GithubReleases;
use crate::ui::UserInterface;
use crate::updates;

/// Selection name for the Homebrew stage, which lives outside the
/// check registry because it mutates.
const BREW: &str = "brew";

/// The work selected for one run.
#[derive(Debug)]
struct Selection {
    tools: Vec<&'static ToolDef>,
    include_brew: bool,
}

/// Resolve --only/--skip into a concrete selection.
///
/// Unknown names are errors; the fixed reporting order is preserved
/// regardless of how the flags were spelled.
fn select(check: &CheckArgs) -> Result<Selection> {
    for name in check.only.iter().chain(check.skip.iter()) {
        if name != BREW && registry::find(name).is_none() {
            return Err(CheckError::UnknownTool { name: name.clone() });
        }
    }

    let wanted = |name: &str| {
        (check.only.is_empty() || check.only.iter().any(|n| n == name))
            && !check.skip.iter().any(|n| n == name)
    };

    Ok(Selection {
        tools: registry::tools()
            .iter()
            .filter(|tool| wanted(tool.name))
            .collect(),
        include_brew: wanted(BREW),
    })
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
    match &cli.command {
        Some(Commands::Completions(completions)) => {
            clap_complete::generate(
                completions.shell,
                &mut Cli::command(),
                "uptodate",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Some(Commands::Check(check)) => run_check(check, ui),
        None => run_check(&CheckArgs::default(), ui),
    }
}

/// Run the version checks and, when selected, the Homebrew update flow.
fn run_check(check: &CheckArgs, ui: &mut dyn UserInterface) -> Result<()> {
    let selection = select(check)?;
    let runner = SystemRunner::new();
    let releases = GithubReleases::new();

    checks::run_checks(&selection.tools, &runner, &releases, ui);

    if selection.include_brew {
        if let Err(err) = updates::check_and_update(&runner, ui) {
            ui.error(&format!("Error updating Homebrew: {}", err));
        }
    }

    Ok(())
}
