//! The JSON document shape.

use serde::{Deserialize, Serialize};

use crate::ReleaseSet;

/// A release set wrapped as `{ "releases": [...] }`.
///
/// Deserialization also accepts a bare array of releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentShape")]
pub struct ChangelogDocument {
    /// The releases, in caller-defined order.
    pub releases: ReleaseSet,
}

impl ChangelogDocument {
    /// Wraps a release set.
    #[must_use]
    pub fn new(releases: ReleaseSet) -> Self {
        Self { releases }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Wrapped { releases: ReleaseSet },
    Bare(ReleaseSet),
}

impl From<DocumentShape> for ChangelogDocument {
    fn from(shape: DocumentShape) -> Self {
        match shape {
            DocumentShape::Wrapped { releases } | DocumentShape::Bare(releases) => {
                Self { releases }
            }
        }
    }
}
