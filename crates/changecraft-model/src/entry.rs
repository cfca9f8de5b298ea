//! Change entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ChangeCategory;

/// Opaque identifier of a change entry.
///
/// Ids are never reused; they only let callers address an entry without
/// relying on its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One described change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Unique id, generated when missing from imported data.
    #[serde(default)]
    pub id: EntryId,

    /// The change category.
    #[serde(rename = "type")]
    pub category: ChangeCategory,

    /// Free-form description. May be empty while editing.
    #[serde(default)]
    pub description: String,
}

impl ChangeEntry {
    /// Creates an entry with a freshly generated id.
    #[must_use]
    pub fn new(category: ChangeCategory, description: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            category,
            description: description.into(),
        }
    }

    /// Replaces the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns true if the description is blank once trimmed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}
