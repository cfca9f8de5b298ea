//! Configuration schema.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Structured changelog document configuration.
    #[serde(default)]
    pub document: DocumentConfig,

    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,

    /// Snapshot history configuration.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Checks values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history.limit == 0 {
            return Err(ConfigError::Invalid(
                "history.limit must be at least 1".to_string(),
            ));
        }
        if self.document.path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "document.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the structured release set lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Path of the JSON document.
    #[serde(default = "default_document_path")]
    pub path: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
        }
    }
}

fn default_document_path() -> String {
    "changelog.json".to_string()
}

/// Output formats supported by `export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Keep a Changelog Markdown.
    #[default]
    Markdown,
    /// `{ "releases": [...] }` JSON.
    Json,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    /// Returns the renderer name for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            other => Err(format!(
                "unknown export format '{other}' (expected markdown, json or html)"
            )),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Default output format.
    #[serde(default)]
    pub format: ExportFormat,

    /// Output file path; stdout when unset.
    #[serde(default)]
    pub output: Option<String>,
}

/// Snapshot history configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Path of the JSON history file.
    #[serde(default = "default_history_path")]
    pub path: String,

    /// Maximum number of snapshots kept; oldest are evicted first.
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            limit: default_history_limit(),
        }
    }
}

fn default_history_path() -> String {
    ".changecraft/history.json".to_string()
}

fn default_history_limit() -> usize {
    10
}
