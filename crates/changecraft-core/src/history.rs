//! Bounded snapshot history.

use std::fs;
use std::path::Path;

use changecraft_model::Snapshot;
use tracing::{debug, info};

use crate::{CoreError, CoreResult};

/// Newest-first list of snapshots, capped at `limit` entries.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    limit: usize,
    snapshots: Vec<Snapshot>,
}

impl SnapshotHistory {
    /// Creates an empty history. A zero limit is treated as one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            snapshots: Vec::new(),
        }
    }

    /// Loads the history file at `path`.
    ///
    /// A missing file yields an empty history. Entries beyond `limit` are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>, limit: usize) -> CoreResult<Self> {
        let path = path.as_ref();
        let mut history = Self::new(limit);

        if !path.exists() {
            debug!(?path, "no history file yet");
            return Ok(history);
        }

        let content = fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        history.snapshots = serde_json::from_str(&content)?;
        history.snapshots.truncate(history.limit);

        debug!(?path, snapshots = history.len(), "loaded history");
        Ok(history)
    }

    /// Writes the history to `path` as JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(&self.snapshots)?;
        crate::write_output(path, &json)
    }

    /// Adds `snapshot` as the newest entry and returns how many old
    /// snapshots were evicted.
    pub fn push(&mut self, snapshot: Snapshot) -> usize {
        info!(id = %snapshot.id, name = %snapshot.name, "recording snapshot");
        self.snapshots.insert(0, snapshot);

        let evicted = self.snapshots.len().saturating_sub(self.limit);
        self.snapshots.truncate(self.limit);
        if evicted > 0 {
            debug!(evicted, limit = self.limit, "evicted old snapshots");
        }
        evicted
    }

    /// Finds a snapshot by id, falling back to the newest with that name.
    pub fn find(&self, key: &str) -> Option<&Snapshot> {
        self.snapshots
            .iter()
            .find(|s| s.id == key)
            .or_else(|| self.snapshots.iter().find(|s| s.name == key))
    }

    /// Like [`find`](Self::find), but fails for unknown keys.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SnapshotNotFound`] if nothing matches.
    pub fn get(&self, key: &str) -> CoreResult<&Snapshot> {
        self.find(key)
            .ok_or_else(|| CoreError::SnapshotNotFound(key.to_string()))
    }

    /// Snapshots, newest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no snapshot is stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of snapshots kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Orders two snapshots as `(older, newer)` by creation time.
    pub fn chronological<'a>(a: &'a Snapshot, b: &'a Snapshot) -> (&'a Snapshot, &'a Snapshot) {
        if b.created_at < a.created_at {
            (b, a)
        } else {
            (a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changecraft_model::{ChangeCategory, Release};
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn snapshot_at(name: &str, minutes: i64) -> Snapshot {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Snapshot::capture_at(name, &[], base + Duration::minutes(minutes))
    }

    #[test]
    fn test_push_newest_first() {
        let mut history = SnapshotHistory::new(10);
        history.push(snapshot_at("first", 0));
        history.push(snapshot_at("second", 1));

        let names: Vec<&str> = history.snapshots().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert_eq!(history.snapshots()[0].name, "second");
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = SnapshotHistory::new(2);
        assert_eq!(history.push(snapshot_at("a", 0)), 0);
        assert_eq!(history.push(snapshot_at("b", 1)), 0);
        assert_eq!(history.push(snapshot_at("c", 2)), 1);

        assert_eq!(history.len(), 2);
        assert!(history.find("a").is_none());
        assert!(history.find("c").is_some());
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let mut history = SnapshotHistory::new(0);
        history.push(snapshot_at("a", 0));
        history.push(snapshot_at("b", 1));
        assert_eq!(history.limit(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_find_by_id_then_name() {
        let mut history = SnapshotHistory::new(10);
        let old = snapshot_at("release", 0);
        let old_id = old.id.clone();
        history.push(old);
        history.push(snapshot_at("release", 1));

        assert_eq!(history.find(&old_id).unwrap().id, old_id);
        let by_name = history.find("release").unwrap();
        assert_ne!(by_name.id, old_id);
        assert!(matches!(
            history.get("missing"),
            Err(CoreError::SnapshotNotFound(key)) if key == "missing"
        ));
    }

    #[test]
    fn test_chronological() {
        let older = snapshot_at("older", 0);
        let newer = snapshot_at("newer", 5);

        let (a, b) = SnapshotHistory::chronological(&newer, &older);
        assert_eq!((a.name.as_str(), b.name.as_str()), ("older", "newer"));

        let (a, b) = SnapshotHistory::chronological(&older, &newer);
        assert_eq!((a.name.as_str(), b.name.as_str()), ("older", "newer"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let history = SnapshotHistory::load(temp_dir.path().join("history.json"), 10).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".changecraft/history.json");

        let releases =
            vec![Release::new("1.0.0", "2024-01-01").with_change(ChangeCategory::Added, "x")];
        let mut history = SnapshotHistory::new(10);
        history.push(Snapshot::capture("v1", &releases));
        history.push(snapshot_at("v0", 0));
        history.save(&path).unwrap();

        let loaded = SnapshotHistory::load(&path, 1).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.snapshots()[0].name, "v0");

        let loaded = SnapshotHistory::load(&path, 10).unwrap();
        assert_eq!(loaded.find("v1").unwrap().releases, releases);
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{").unwrap();

        assert!(matches!(
            SnapshotHistory::load(&path, 10),
            Err(CoreError::Json(_))
        ));
    }
}
