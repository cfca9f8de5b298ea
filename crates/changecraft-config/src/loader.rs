//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "changecraft.toml";

/// Commented configuration written by `changecraft init`.
///
/// Every value matches the built-in defaults.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Changecraft configuration

[document]
# Structured release document read by export, snapshot and diff
path = "changelog.json"

[export]
# markdown | json | html
format = "markdown"
# Write to a file instead of stdout
# output = "CHANGELOG.md"

[history]
path = ".changecraft/history.json"
# Oldest snapshots are dropped beyond this many
limit = 10
"#;

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}

/// Like [`find_and_load_config_from`], but falls back to defaults when no
/// configuration file exists.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be loaded.
pub fn load_config_or_default_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_and_load_config_from(start_dir) {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        other => other,
    }
}
