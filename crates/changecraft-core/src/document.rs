//! Reading and writing changelog documents.

use std::fs;
use std::path::Path;

use changecraft_model::{ChangelogDocument, ReleaseSet};
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Decodes a JSON document into releases.
///
/// Accepts `{ "releases": [...] }` or a bare array. Missing ids are
/// generated and missing dates default to today.
///
/// # Errors
///
/// Returns [`CoreError::Json`] if the text is not a valid document.
pub fn decode_document(json: &str) -> CoreResult<ReleaseSet> {
    let document: ChangelogDocument = serde_json::from_str(json)?;
    Ok(document.releases)
}

/// Reads and decodes the JSON document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_document(path: impl AsRef<Path>) -> CoreResult<ReleaseSet> {
    let path = path.as_ref();
    debug!(?path, "loading changelog document");

    let content = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_document(&content)
}

/// Writes rendered output to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`CoreError::Write`] if the directories or file cannot be written.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> CoreResult<()> {
    let path = path.as_ref();
    let to_write_error = |source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, content).map_err(to_write_error)?;

    debug!(?path, bytes = content.len(), "wrote output");
    Ok(())
}
