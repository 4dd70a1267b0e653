//! Mock release source for testing.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{CheckError, Result};

use super::ReleaseSource;

/// Mock release source with canned tags and a lookup log.
///
/// Repositories without a canned tag produce a `ReleaseLookup` error, so a
/// test that expects no network activity can simply leave the mock empty
/// and assert `lookups()` stayed that way.
#[derive(Debug, Default)]
pub struct MockReleases {
    tags: HashMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl MockReleases {
    /// Create a mock with no canned tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the latest tag for a repository.
    pub fn set_tag(&mut self, repo: &str, tag: &str) {
        self.tags.insert(repo.to_string(), tag.to_string());
    }

    /// Every repository looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl ReleaseSource for MockReleases {
    fn latest_tag(&self, repo: &str) -> Result<String> {
        self.lookups.borrow_mut().push(repo.to_string());
        self.tags
            .get(repo)
            .cloned()
            .ok_or_else(|| CheckError::ReleaseLookup {
                repo: repo.to_string(),
                message: "no canned tag configured".to_string(),
            })
    }
}
