//! Plugin pipeline execution.

use changecraft_model::{Release, ReleaseSet, prune_for_export};
use changecraft_plugin::{ChangelogParser, ChangelogRenderer, PluginError, PluginResult};
use tracing::{debug, info};

/// Orchestrates the parser and the registered renderers.
pub struct Pipeline {
    parser: Box<dyn ChangelogParser>,
    renderers: Vec<Box<dyn ChangelogRenderer>>,
}

impl Pipeline {
    /// Creates a pipeline with the given parser and no renderers.
    #[must_use]
    pub fn new(parser: Box<dyn ChangelogParser>) -> Self {
        Self {
            parser,
            renderers: Vec::new(),
        }
    }

    /// Registers a renderer. Lookups return the first renderer registered
    /// under a name.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn ChangelogRenderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    /// Parses changelog text into releases.
    pub fn parse(&self, text: &str) -> ReleaseSet {
        let releases = self.parser.parse(text);
        info!(
            parser = self.parser.name(),
            releases = releases.len(),
            "parsed changelog text"
        );
        releases
    }

    /// Looks up a renderer by name.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::RendererNotFound`] for unknown names.
    pub fn renderer(&self, name: &str) -> PluginResult<&dyn ChangelogRenderer> {
        self.renderers
            .iter()
            .find(|r| r.name() == name)
            .map(Box::as_ref)
            .ok_or_else(|| PluginError::RendererNotFound(name.to_string()))
    }

    /// Drops blank entries and empty releases, then renders with `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if no renderer is registered under `format`.
    pub fn export(&self, format: &str, releases: &[Release]) -> PluginResult<String> {
        let renderer = self.renderer(format)?;
        let pruned = prune_for_export(releases);
        debug!(
            format,
            input = releases.len(),
            exported = pruned.len(),
            "pruned releases for export"
        );

        let output = renderer.render(&pruned);
        info!(format, bytes = output.len(), "exported changelog");
        Ok(output)
    }
}
