//! Releases and release sets.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{ChangeCategory, ChangeEntry};

/// An ordered list of releases, newest first by convention.
pub type ReleaseSet = Vec<Release>;

/// One versioned set of changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Free-form version label (not necessarily semver).
    pub version: String,

    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default = "today")]
    pub date: String,

    /// Changes in authoring order.
    #[serde(default)]
    pub changes: Vec<ChangeEntry>,
}

impl Release {
    /// Creates an empty release.
    #[must_use]
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            changes: Vec::new(),
        }
    }

    /// Appends a change.
    #[must_use]
    pub fn with_change(mut self, category: ChangeCategory, description: impl Into<String>) -> Self {
        self.changes.push(ChangeEntry::new(category, description));
        self
    }

    /// Returns true if the release holds no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Returns today's UTC date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Buckets a release's changes by category.
///
/// Buckets come back in taxonomy order, keep authoring order inside each
/// bucket, and empty buckets are omitted.
#[must_use]
pub fn group_by_category(release: &Release) -> Vec<(ChangeCategory, Vec<&ChangeEntry>)> {
    ChangeCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let entries: Vec<&ChangeEntry> = release
                .changes
                .iter()
                .filter(|entry| entry.category == category)
                .collect();
            (!entries.is_empty()).then_some((category, entries))
        })
        .collect()
}

/// Drops blank entries, then releases left with no changes.
///
/// Renderers expect their input to have gone through this.
#[must_use]
pub fn prune_for_export(releases: &[Release]) -> ReleaseSet {
    releases
        .iter()
        .filter_map(|release| {
            let changes: Vec<ChangeEntry> = release
                .changes
                .iter()
                .filter(|entry| !entry.is_blank())
                .cloned()
                .collect();

            (!changes.is_empty()).then(|| Release {
                version: release.version.clone(),
                date: release.date.clone(),
                changes,
            })
        })
        .collect()
}
