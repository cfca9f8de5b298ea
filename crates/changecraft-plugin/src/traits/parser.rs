//! Changelog parser trait.

use changecraft_model::ReleaseSet;

use super::Plugin;

/// Recovers structured releases from changelog text.
pub trait ChangelogParser: Plugin {
    /// Parses `text` into releases, in document order.
    ///
    /// Parsing is best-effort and never fails: unrecognized input is
    /// skipped rather than reported.
    fn parse(&self, text: &str) -> ReleaseSet;
}
