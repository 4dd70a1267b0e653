//! Check outcome types.
//!
//! Each tool check produces a `CheckStatus` describing where the installed
//! version stands relative to the newest release. Statuses carry normalized
//! version tokens (leading `v` already stripped) ready for display.

use super::registry::ManagerDef;

/// The result of checking a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Installed version matches the newest release.
    UpToDate {
        /// Normalized installed version.
        installed: String,
    },

    /// Installed version differs from the newest release.
    Outdated {
        /// Normalized installed version.
        installed: String,
        /// Normalized latest version.
        latest: String,
    },

    /// The tool's executable is not on the system.
    NotInstalled,

    /// The tool is installed but its helper (e.g. fnm for Node.js) is not,
    /// so the latest version cannot be determined. Advisory, not an error.
    ManagerMissing {
        /// The absent helper.
        manager: &'static ManagerDef,
    },
}

impl CheckStatus {
    /// Whether the tool is installed and on the newest release.
    pub fn is_current(&self) -> bool {
        matches!(self, CheckStatus::UpToDate { .. })
    }

    /// Whether the status calls for user action.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, CheckStatus::UpToDate { .. })
    }
}
