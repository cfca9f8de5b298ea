//! Markdown renderer plugin.

use std::fmt::Write;

use changecraft_model::{Release, group_by_category};
use changecraft_plugin::{ChangelogRenderer, Plugin};
use tracing::debug;

/// Document title line.
pub const TITLE: &str = "# Changelog";

/// Line printed under the title.
pub const SUBTITLE: &str = "All notable changes to this project will be documented in this file.";

/// Markdown renderer.
///
/// Renders releases in the [Keep a Changelog](https://keepachangelog.com/) layout.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders one release block, ending with a blank line per section.
    fn render_release(output: &mut String, release: &Release) {
        _ = writeln!(output, "## [{}] - {}\n", release.version, release.date);

        for (category, entries) in group_by_category(release) {
            _ = writeln!(output, "### {}\n", category.label());

            for entry in entries {
                _ = writeln!(output, "- {}", entry.description);
            }

            output.push('\n');
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders releases as a Keep a Changelog Markdown document"
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    fn render(&self, releases: &[Release]) -> String {
        let mut output = String::new();
        _ = writeln!(output, "{TITLE}\n\n{SUBTITLE}\n");

        for release in releases {
            Self::render_release(&mut output, release);
        }

        debug!(
            releases = releases.len(),
            output_len = output.len(),
            "rendered markdown"
        );
        output
    }
}
