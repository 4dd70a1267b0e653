//! Version string normalization, comparison, and extraction.
//!
//! There is deliberately no semantic-version ordering here. The question
//! each check answers is "are you on the single newest release", so
//! normalized strings are compared for exact equality only. The comparison
//! lives behind [`is_current`] so an ordered comparison could replace it
//! later without touching call sites.

use regex::Regex;
use std::sync::OnceLock;

/// Strip at most one leading literal `v` from a version token.
pub fn normalize(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Whether the installed version is the latest known one.
///
/// Exact string equality of normalized, trimmed tokens. A locally-newer
/// build (e.g. a pre-release) therefore reads as "not latest".
pub fn is_current(installed: &str, latest: &str) -> bool {
    normalize(installed.trim()) == normalize(latest.trim())
}

/// The `index`th whitespace-delimited field of `output`.
pub fn field(output: &str, index: usize) -> Option<&str> {
    output.split_whitespace().nth(index)
}

/// The version token of the last entry in an ordered listing.
///
/// Listings like `fnm list-remote --lts` print one release per line,
/// oldest first, with the version as the first field. Empty lines are
/// ignored; the last surviving line's first field is the newest entry.
pub fn last_listing_entry(listing: &str) -> Option<&str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .and_then(|line| line.split_whitespace().next())
}

/// The first `x.y.z` token found in free-form command output.
pub fn extract_semver(output: &str) -> Option<&str> {
    static SEMVER: OnceLock<Regex> = OnceLock::new();
    let re = SEMVER.get_or_init(|| {
        Regex::new(r"\d+\.\d+\.\d+").expect("semver pattern is valid")
    });
    re.find(output).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_v() {
        assert_eq!(normalize("v1.2.3"), "1.2.3");
        assert_eq!(normalize("1.2.3"), "1.2.3");
    }

    #[test]
    fn normalize_is_idempotent() {
        assert_eq!(normalize(normalize("v1.2.3")), "1.2.3");
    }

    #[test]
    fn normalize_strips_at_most_one_v() {
        assert_eq!(normalize("vv1.2.3"), "v1.2.3");
    }

    #[test]
    fn normalize_only_touches_the_prefix() {
        assert_eq!(normalize("1.2.3-dev"), "1.2.3-dev");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_current_matches_across_prefixes() {
        assert!(is_current("v20.1.0", "20.1.0"));
        assert!(is_current("20.1.0", "v20.1.0"));
        assert!(is_current("v20.1.0", "v20.1.0"));
    }

    #[test]
    fn is_current_rejects_different_versions() {
        assert!(!is_current("v20.0.0", "20.1.0"));
        // No ordering: a newer local version still reads as not current.
        assert!(!is_current("21.0.0", "20.1.0"));
    }

    #[test]
    fn is_current_trims_whitespace() {
        assert!(is_current(" v1.80.0\n", "1.80.0"));
    }

    #[test]
    fn field_picks_whitespace_delimited_token() {
        assert_eq!(field("rustc 1.80.0 (abc123 2024-07-21)", 1), Some("1.80.0"));
        assert_eq!(field("rustc", 1), None);
    }

    #[test]
    fn last_listing_entry_takes_last_nonempty_line_first_field() {
        let listing = "v18.0.0 lts\nv20.0.0 latest\nv20.1.0 lts";
        assert_eq!(last_listing_entry(listing), Some("v20.1.0"));
    }

    #[test]
    fn last_listing_entry_skips_trailing_blank_lines() {
        let listing = "v18.0.0 lts\nv20.1.0 lts\n\n";
        assert_eq!(last_listing_entry(listing), Some("v20.1.0"));
    }

    #[test]
    fn last_listing_entry_empty_listing_is_none() {
        assert_eq!(last_listing_entry(""), None);
        assert_eq!(last_listing_entry("\n \n"), None);
    }

    #[test]
    fn listing_entry_then_normalize_matches_expected_token() {
        let listing = "v18.0.0 lts\nv20.0.0 latest\nv20.1.0 lts";
        let entry = last_listing_entry(listing).unwrap();
        assert_eq!(normalize(entry), "20.1.0");
    }

    #[test]
    fn extract_semver_finds_first_token() {
        let output = "deno 2.1.4 (stable, release, aarch64-apple-darwin)\nv8 13.0.245.12";
        assert_eq!(extract_semver(output), Some("2.1.4"));
    }

    #[test]
    fn extract_semver_none_without_version() {
        assert_eq!(extract_semver("no version here"), None);
    }
}
