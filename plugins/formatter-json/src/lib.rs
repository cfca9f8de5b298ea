//! JSON renderer plugin.
//!
//! The only renderer whose output decodes back into the data model
//! (as a [`ChangelogDocument`](changecraft_model::ChangelogDocument)).

use changecraft_model::Release;
use changecraft_plugin::{ChangelogRenderer, Plugin};
use serde::Serialize;
use tracing::{debug, error};

/// Borrowed view of the document so rendering never clones the releases.
#[derive(Serialize)]
struct DocumentRef<'a> {
    releases: &'a [Release],
}

/// JSON renderer producing `{ "releases": [...] }` with 2-space indentation.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders releases as a JSON document"
    }
}

impl ChangelogRenderer for JsonRenderer {
    fn render(&self, releases: &[Release]) -> String {
        let output = match serde_json::to_string_pretty(&DocumentRef { releases }) {
            Ok(output) => output,
            Err(err) => {
                // Plain structs with string keys always serialize.
                error!(%err, "failed to serialize releases");
                String::from("{\n  \"releases\": []\n}")
            }
        };

        debug!(
            releases = releases.len(),
            output_len = output.len(),
            "rendered json"
        );
        output
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changecraft_model::{ChangeCategory, ChangeEntry, ChangelogDocument};

    #[test]
    fn test_plugin_metadata() {
        let renderer = JsonRenderer::new();
        assert_eq!(renderer.name(), "json");
        assert_eq!(renderer.extension(), "json");
    }

    #[test]
    fn test_empty_release_set() {
        let output = JsonRenderer::new().render(&[]);
        assert_eq!(output, "{\n  \"releases\": []\n}");
    }

    #[test]
    fn test_key_order_and_indentation() {
        let mut release = Release::new("1.0.0", "2024-01-01");
        release
            .changes
            .push(ChangeEntry::new(ChangeCategory::Fixed, "Crash on start").with_id("e1"));

        let output = JsonRenderer::new().render(&[release]);

        insta::assert_snapshot!(output, @r#"
        {
          "releases": [
            {
              "version": "1.0.0",
              "date": "2024-01-01",
              "changes": [
                {
                  "id": "e1",
                  "type": "fixed",
                  "description": "Crash on start"
                }
              ]
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_round_trip() {
        let releases = vec![
            Release::new("2.0.0", "2024-04-01")
                .with_change(ChangeCategory::Removed, "Drop legacy API")
                .with_change(ChangeCategory::Added, "Quote \"escapes\" and ünïcode"),
            Release::new("1.0.0-beta", "2024-01-15")
                .with_change(ChangeCategory::Deprecated, "Old config keys"),
        ];

        let output = JsonRenderer::new().render(&releases);
        let decoded: ChangelogDocument = serde_json::from_str(&output).unwrap();

        assert_eq!(decoded.releases, releases);
    }

    #[test]
    fn test_preserves_authoring_order() {
        let release = Release::new("1.0.0", "2024-01-01")
            .with_change(ChangeCategory::Fixed, "first")
            .with_change(ChangeCategory::Added, "second");

        let output = JsonRenderer::new().render(&[release]);
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
    }
}
