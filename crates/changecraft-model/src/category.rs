//! The fixed change taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category a change belongs to.
///
/// The variant order is the display order used by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    /// New functionality.
    Added,
    /// Changes to existing functionality.
    Changed,
    /// Bug fixes.
    Fixed,
    /// Removed functionality.
    Removed,
    /// Security fixes.
    Security,
    /// Functionality scheduled for removal.
    Deprecated,
}

impl ChangeCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Fixed,
        Self::Removed,
        Self::Security,
        Self::Deprecated,
    ];

    /// Returns the wire tag (e.g. `"added"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Removed => "removed",
            Self::Security => "security",
            Self::Deprecated => "deprecated",
        }
    }

    /// Returns the section heading label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
            Self::Security => "Security",
            Self::Deprecated => "Deprecated",
        }
    }

    /// Returns the symbol shown next to the label in visual output.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Added => "✨",
            Self::Changed => "🔄",
            Self::Fixed => "🐛",
            Self::Removed => "🗑️",
            Self::Security => "🔒",
            Self::Deprecated => "⚠️",
        }
    }

    /// Returns the CSS color used for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Added => "#22c55e",
            Self::Changed => "#3b82f6",
            Self::Fixed => "#eab308",
            Self::Removed => "#ef4444",
            Self::Security => "#a855f7",
            Self::Deprecated => "#f97316",
        }
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
