//! Configuration management for Changecraft.
//!
//! This crate handles loading and validating the `changecraft.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE, find_and_load_config_from, load_config,
    load_config_or_default_from,
};
pub use schema::{Config, DocumentConfig, ExportConfig, ExportFormat, HistoryConfig};
