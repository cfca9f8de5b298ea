//! Changelog data model for Changecraft.
//!
//! This crate provides the types every other Changecraft crate works with:
//! - [`ChangeCategory`]: The fixed six-category change taxonomy
//! - [`ChangeEntry`]: One described change inside a release
//! - [`Release`]: A versioned, dated list of changes
//! - [`Snapshot`]: A named point-in-time copy of a release set
//! - [`ChangelogDocument`]: The JSON wire shape of a release set

mod category;
mod document;
mod entry;
mod release;
mod snapshot;

pub use category::ChangeCategory;
pub use document::ChangelogDocument;
pub use entry::{ChangeEntry, EntryId};
pub use release::{Release, ReleaseSet, group_by_category, prune_for_export, today};
pub use snapshot::Snapshot;
