//! Status line formatting.
//!
//! Pure functions producing the fixed message templates, plus the small
//! bridge that maps a [`CheckStatus`] onto UI calls. Keeping the templates
//! free of I/O keeps them trivially assertable.

use crate::error::CheckError;
use crate::ui::UserInterface;

use super::registry::ToolDef;
use super::status::CheckStatus;

/// The up-to-date line.
pub fn success_line(tool: &ToolDef, installed: &str) -> String {
    match tool.latest_label {
        Some(label) => format!(
            "Your {} version ({}) is the latest {}.",
            tool.display_name, installed, label
        ),
        None => format!(
            "Your {} version ({}) is the latest.",
            tool.display_name, installed
        ),
    }
}

/// The outdated line.
pub fn outdated_line(tool: &ToolDef, installed: &str, latest: &str) -> String {
    match tool.latest_label {
        Some(label) => format!(
            "Your {} version ({}) is not the latest {} ({}).",
            tool.display_name, installed, label, latest
        ),
        None => format!(
            "Your {} version ({}) is not the latest ({}).",
            tool.display_name, installed, latest
        ),
    }
}

/// The remediation hint accompanying an outdated line.
pub fn remediation_line(tool: &ToolDef) -> String {
    format!("Run '{}' to update.", tool.remediation)
}

/// The not-installed notice.
pub fn not_installed_line(tool: &ToolDef) -> String {
    format!("{} is not installed.", tool.display_name)
}

/// The error line for a check that could not complete.
pub fn check_failed_line(tool: &ToolDef, error: &CheckError) -> String {
    format!("Error checking {} version: {}", tool.display_name, error)
}

/// Render a check status onto the UI.
pub fn render(ui: &mut dyn UserInterface, tool: &ToolDef, status: &CheckStatus) {
    match status {
        CheckStatus::UpToDate { installed } => {
            ui.success(&success_line(tool, installed));
        }
        CheckStatus::Outdated { installed, latest } => {
            ui.warning(&outdated_line(tool, installed, latest));
            ui.hint(&remediation_line(tool));
        }
        CheckStatus::NotInstalled => {
            ui.warning(&not_installed_line(tool));
        }
        CheckStatus::ManagerMissing { manager } => {
            ui.warning(&format!(
                "'{}' ({}) is not installed.",
                manager.name, manager.display_name
            ));
            for line in manager.advisory {
                ui.hint(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::registry;
    use crate::ui::mock::MockUI;

    fn node() -> &'static ToolDef {
        registry::find("node").unwrap()
    }

    fn deno() -> &'static ToolDef {
        registry::find("deno").unwrap()
    }

    fn rust() -> &'static ToolDef {
        registry::find("rust").unwrap()
    }

    #[test]
    fn node_success_line_mentions_lts() {
        assert_eq!(
            success_line(node(), "20.1.0"),
            "Your Node.js version (20.1.0) is the latest LTS version."
        );
    }

    #[test]
    fn deno_success_line_is_unqualified() {
        assert_eq!(
            success_line(deno(), "2.1.4"),
            "Your Deno version (2.1.4) is the latest."
        );
    }

    #[test]
    fn node_outdated_line_names_both_versions() {
        assert_eq!(
            outdated_line(node(), "18.12.0", "20.1.0"),
            "Your Node.js version (18.12.0) is not the latest LTS version (20.1.0)."
        );
    }

    #[test]
    fn rust_outdated_line_names_both_versions() {
        assert_eq!(
            outdated_line(rust(), "1.79.0", "1.80.0"),
            "Your Rust version (1.79.0) is not the latest (1.80.0)."
        );
    }

    #[test]
    fn remediation_lines_quote_the_command() {
        assert_eq!(
            remediation_line(node()),
            "Run 'fnm install --lts && fnm default lts-latest' to update."
        );
        assert_eq!(remediation_line(deno()), "Run 'deno upgrade' to update.");
        assert_eq!(remediation_line(rust()), "Run 'rustup update' to update.");
    }

    #[test]
    fn not_installed_line_uses_display_name() {
        assert_eq!(not_installed_line(node()), "Node.js is not installed.");
    }

    #[test]
    fn check_failed_line_names_tool_and_error() {
        let err = CheckError::MissingTagName {
            repo: "denoland/deno".into(),
        };
        let line = check_failed_line(deno(), &err);
        assert!(line.starts_with("Error checking Deno version:"));
        assert!(line.contains("denoland/deno"));
    }

    #[test]
    fn render_up_to_date_emits_one_success_no_hint() {
        let mut ui = MockUI::new();
        render(
            &mut ui,
            node(),
            &CheckStatus::UpToDate {
                installed: "20.1.0".to_string(),
            },
        );
        assert_eq!(ui.successes().len(), 1);
        assert!(ui.successes()[0].contains("20.1.0"));
        assert!(ui.hints().is_empty());
        assert!(!ui.successes()[0].contains("Run '"));
    }

    #[test]
    fn render_outdated_emits_warning_and_remediation() {
        let mut ui = MockUI::new();
        render(
            &mut ui,
            rust(),
            &CheckStatus::Outdated {
                installed: "1.79.0".to_string(),
                latest: "1.80.0".to_string(),
            },
        );
        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(ui.hints(), &["Run 'rustup update' to update."]);
    }

    #[test]
    fn render_manager_missing_emits_advisory_hints() {
        let mut ui = MockUI::new();
        render(
            &mut ui,
            node(),
            &CheckStatus::ManagerMissing {
                manager: &registry::FNM,
            },
        );
        assert_eq!(
            ui.warnings(),
            &["'fnm' (Fast Node Manager) is not installed."]
        );
        assert_eq!(ui.hints().len(), 2);
        assert!(ui.hints()[1].contains("github.com/Schniz/fnm"));
    }
}
