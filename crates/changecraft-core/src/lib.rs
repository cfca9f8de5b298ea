//! Core library for Changecraft.
//!
//! This crate wires the parser and renderers together and provides the
//! snapshot differ and the bounded snapshot history.

mod diff;
mod document;
mod error;
mod history;
mod pipeline;

pub use diff::{
    CardinalityRenameDetector, ChangeLine, DiffReport, RenameDetector, SnapshotDiffer,
    VersionRename,
};
pub use document::{decode_document, load_document, write_output};
pub use error::{CoreError, CoreResult};
pub use history::SnapshotHistory;
pub use pipeline::Pipeline;
