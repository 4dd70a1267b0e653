//! Latest-release lookups against the GitHub API.
//!
//! Deno and Rust publish their releases on GitHub, so "what is the latest
//! version" is a single unauthenticated GET against the well-known
//! `releases/latest` endpoint, reading the `tag_name` field from the JSON
//! body. The [`ReleaseSource`] trait is the seam that lets checks run
//! against a fake in tests; [`GithubReleases`] is the real client.

pub mod mock;

use serde::Deserialize;
use std::time::Duration;

use crate::error::{CheckError, Result};

/// Default GitHub API base URL.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// HTTP timeout for release lookups.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Port for discovering the latest released version of a repository.
pub trait ReleaseSource {
    /// The tag name of the latest release of `owner/repo`, as published.
    ///
    /// Tags are returned verbatim (a leading `v` is common); normalization
    /// is the caller's concern.
    fn latest_tag(&self, repo: &str) -> Result<String>;
}

/// Latest-release response body, reduced to the field we read.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tag_name: String,
}

/// GitHub release client over blocking HTTP.
pub struct GithubReleases {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Default for GithubReleases {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubReleases {
    /// Create a client against the public GitHub API.
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(concat!("uptodate/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ReleaseSource for GithubReleases {
    fn latest_tag(&self, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repo);
        tracing::debug!(%url, "fetching latest release");

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(CheckError::ReleaseLookup {
                repo: repo.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text()?;
        let release: LatestRelease =
            serde_json::from_str(&body).map_err(|e| CheckError::ReleaseLookup {
                repo: repo.to_string(),
                message: format!("malformed response body: {}", e),
            })?;

        if release.tag_name.is_empty() {
            return Err(CheckError::MissingTagName {
                repo: repo.to_string(),
            });
        }

        Ok(release.tag_name)
    }
}
