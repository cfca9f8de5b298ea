//! Plugin system for Changecraft.
//!
//! This crate provides the extension points of the transformation engine:
//! - [`Plugin`]: Base trait for all plugins
//! - [`ChangelogParser`]: Recovers releases from free-form text
//! - [`ChangelogRenderer`]: Renders releases to a distributable format

mod error;
mod traits;

pub use error::{PluginError, PluginResult};
pub use traits::Plugin;
pub use traits::parser::ChangelogParser;
pub use traits::renderer::ChangelogRenderer;
