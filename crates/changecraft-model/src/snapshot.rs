//! Point-in-time copies of a release set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Release, ReleaseSet};

/// A named, timestamped copy of a release set.
///
/// The releases are owned by the snapshot, so later edits to the live set
/// never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Unique snapshot id.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// The captured releases.
    pub releases: ReleaseSet,

    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Captures a deep copy of `releases` under `name`, stamped now.
    #[must_use]
    pub fn capture(name: impl Into<String>, releases: &[Release]) -> Self {
        Self::capture_at(name, releases, Utc::now())
    }

    /// Captures a deep copy of `releases` with an explicit timestamp.
    #[must_use]
    pub fn capture_at(
        name: impl Into<String>,
        releases: &[Release],
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            releases: releases.to_vec(),
            created_at,
        }
    }

    /// Total number of change entries across all releases.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.releases.iter().map(|r| r.changes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChangeCategory;

    #[test]
    fn test_capture_is_independent() {
        let mut live = vec![Release::new("1.0.0", "2024-01-01").with_change(ChangeCategory::Added, "x")];
        let snapshot = Snapshot::capture("before", &live);

        live[0].version = "9.9.9".to_string();
        live[0].changes.clear();

        assert_eq!(snapshot.releases[0].version, "1.0.0");
        assert_eq!(snapshot.change_count(), 1);
    }

    #[test]
    fn test_unique_ids() {
        let a = Snapshot::capture("a", &[]);
        let b = Snapshot::capture("a", &[]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_shape() {
        let created_at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let snapshot = Snapshot::capture_at("v1", &[], created_at);
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["name"], "v1");
        assert_eq!(value["createdAt"], "2024-03-01T12:00:00Z");
        assert!(value["releases"].as_array().unwrap().is_empty());
        assert!(value.get("created_at").is_none());
    }
}
