//! Changelog renderer trait.

use changecraft_model::Release;

use super::Plugin;

/// Renders releases into a distributable text format.
///
/// Input is expected to have been through
/// [`prune_for_export`](changecraft_model::prune_for_export); renderers do
/// not re-validate it. Rendering is total and deterministic.
pub trait ChangelogRenderer: Plugin {
    /// Renders a full document for `releases`.
    fn render(&self, releases: &[Release]) -> String;

    /// Returns the file extension for the output (e.g. "md").
    fn extension(&self) -> &'static str {
        "md"
    }
}
