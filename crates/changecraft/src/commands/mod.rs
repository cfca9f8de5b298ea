//! CLI commands.

pub mod diff;
pub mod export;
pub mod history;
pub mod init;
pub mod parse;
pub mod snapshot;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use changecraft_config::{Config, load_config_or_default_from};
use changecraft_core::{Pipeline, SnapshotHistory, load_document, write_output};
use changecraft_formatter_html::HtmlRenderer;
use changecraft_formatter_json::JsonRenderer;
use changecraft_formatter_markdown::MarkdownRenderer;
use changecraft_model::ReleaseSet;
use changecraft_parser_text::TextParser;

/// Loads `changecraft.toml` from the current directory or its parents.
fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("failed to read current directory")?;
    load_config_or_default_from(current_dir).context("failed to load configuration")
}

/// Builds the pipeline with the built-in parser and renderers.
fn build_pipeline() -> Pipeline {
    Pipeline::new(Box::new(TextParser::new()))
        .with_renderer(Box::new(MarkdownRenderer::new()))
        .with_renderer(Box::new(JsonRenderer::new()))
        .with_renderer(Box::new(HtmlRenderer::new()))
}

/// Resolves the document path from `--input` or the configuration.
fn document_path(input: Option<&Path>, config: &Config) -> PathBuf {
    input.map_or_else(|| PathBuf::from(&config.document.path), Path::to_path_buf)
}

fn read_document(input: Option<&Path>, config: &Config) -> Result<ReleaseSet> {
    let path = document_path(input, config);
    load_document(&path).with_context(|| format!("failed to load document {}", path.display()))
}

fn open_history(config: &Config) -> Result<SnapshotHistory> {
    SnapshotHistory::load(&config.history.path, config.history.limit)
        .with_context(|| format!("failed to load history {}", config.history.path))
}

/// Writes `content` to `output`, or stdout when unset, ending with a newline.
fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }

    match output {
        Some(path) => write_output(path, &content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("failed to write to stdout")
        }
    }
}
