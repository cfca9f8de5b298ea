//! Snapshot comparison.

use std::collections::HashSet;

use changecraft_model::{ChangeCategory, Release, Snapshot};
use serde::Serialize;
use tracing::debug;

/// A change present on only one side of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    /// Version of the release holding the change.
    pub release: String,
    /// Category of the change.
    pub category: ChangeCategory,
    /// Change description.
    pub change: String,
}

/// A version label that appears to have been relabeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRename {
    /// Always `"Version"`.
    pub release: &'static str,
    /// Version label in the older snapshot.
    pub old_version: String,
    /// Version label in the newer snapshot.
    pub new_version: String,
}

impl VersionRename {
    /// Creates a rename from `old_version` to `new_version`.
    #[must_use]
    pub fn new(old_version: impl Into<String>, new_version: impl Into<String>) -> Self {
        Self {
            release: "Version",
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }
}

/// Result of comparing two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// Changes only in the newer snapshot.
    pub added: Vec<ChangeLine>,
    /// Changes only in the older snapshot.
    pub removed: Vec<ChangeLine>,
    /// Inferred version renames.
    pub modified: Vec<VersionRename>,
}

impl DiffReport {
    /// Returns true if nothing differs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// Infers version renames between two release sets.
pub trait RenameDetector: Send + Sync {
    /// Returns the renames found going from `older` to `newer`.
    fn detect(&self, older: &[Release], newer: &[Release]) -> Vec<VersionRename>;
}

/// Treats versions that appear on only one side as renamed when both sides
/// hold the same number of distinct versions.
///
/// Newer-only versions are paired with older-only versions in source order,
/// and each older version is used at most once. This can misfire when an
/// unrelated release is dropped and another added in the same step.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalityRenameDetector;

impl RenameDetector for CardinalityRenameDetector {
    fn detect(&self, older: &[Release], newer: &[Release]) -> Vec<VersionRename> {
        let older_versions = distinct_versions(older);
        let newer_versions = distinct_versions(newer);

        if older_versions.is_empty() || older_versions.len() != newer_versions.len() {
            return Vec::new();
        }

        let mut older_only = older_versions
            .iter()
            .filter(|v| !newer_versions.contains(v));

        newer_versions
            .iter()
            .filter(|v| !older_versions.contains(v))
            .map_while(|new| {
                older_only
                    .next()
                    .map(|old| VersionRename::new(*old, *new))
            })
            .collect()
    }
}

/// Distinct version labels in first-seen order.
fn distinct_versions(releases: &[Release]) -> Vec<&str> {
    let mut seen = HashSet::new();
    releases
        .iter()
        .map(|r| r.version.as_str())
        .filter(|v| seen.insert(*v))
        .collect()
}

type ChangeKey<'a> = (&'a str, ChangeCategory, &'a str);

/// Distinct `(version, category, description)` keys in source order,
/// skipping blank descriptions.
fn change_keys(releases: &[Release]) -> Vec<ChangeKey<'_>> {
    let mut seen = HashSet::new();
    releases
        .iter()
        .flat_map(|release| {
            release
                .changes
                .iter()
                .filter(|entry| !entry.is_blank())
                .map(move |entry| {
                    (
                        release.version.as_str(),
                        entry.category,
                        entry.description.as_str(),
                    )
                })
        })
        .filter(|key| seen.insert(*key))
        .collect()
}

fn missing_from(keys: &[ChangeKey<'_>], other: &HashSet<ChangeKey<'_>>) -> Vec<ChangeLine> {
    keys.iter()
        .filter(|key| !other.contains(*key))
        .map(|&(release, category, change)| ChangeLine {
            release: release.to_string(),
            category,
            change: change.to_string(),
        })
        .collect()
}

/// Compares two snapshots that the caller has already put in
/// chronological order.
pub struct SnapshotDiffer {
    renames: Box<dyn RenameDetector>,
}

impl SnapshotDiffer {
    /// Creates a differ using [`CardinalityRenameDetector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            renames: Box::new(CardinalityRenameDetector),
        }
    }

    /// Replaces the rename detector.
    #[must_use]
    pub fn with_rename_detector(mut self, detector: Box<dyn RenameDetector>) -> Self {
        self.renames = detector;
        self
    }

    /// Diffs `older` against `newer`.
    pub fn diff(&self, older: &Snapshot, newer: &Snapshot) -> DiffReport {
        self.diff_releases(&older.releases, &newer.releases)
    }

    /// Diffs two release sets directly.
    pub fn diff_releases(&self, older: &[Release], newer: &[Release]) -> DiffReport {
        let older_keys = change_keys(older);
        let newer_keys = change_keys(newer);
        let older_set: HashSet<_> = older_keys.iter().copied().collect();
        let newer_set: HashSet<_> = newer_keys.iter().copied().collect();

        let report = DiffReport {
            added: missing_from(&newer_keys, &older_set),
            removed: missing_from(&older_keys, &newer_set),
            modified: self.renames.detect(older, newer),
        };

        debug!(
            added = report.added.len(),
            removed = report.removed.len(),
            modified = report.modified.len(),
            "diffed release sets"
        );
        report
    }
}

impl Default for SnapshotDiffer {
    fn default() -> Self {
        Self::new()
    }
}
