//! Export command.

use std::path::PathBuf;

use anyhow::Result;
use changecraft_config::ExportFormat;
use clap::Args;
use tracing::info;

use super::{build_pipeline, emit, load_config, read_document};

/// Arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// JSON document to export (default: from configuration)
    #[arg(short, long, env = "CHANGECRAFT_DOCUMENT")]
    pub input: Option<PathBuf>,

    /// Output format: markdown, json or html (default: from configuration)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file (default: from configuration, else stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the export command.
pub fn run(args: &ExportArgs) -> Result<()> {
    let config = load_config()?;
    let releases = read_document(args.input.as_deref(), &config)?;

    let format = args.format.unwrap_or(config.export.format);
    let output = args
        .output
        .clone()
        .or_else(|| config.export.output.as_ref().map(PathBuf::from));

    let rendered = build_pipeline().export(format.as_str(), &releases)?;
    emit(output.as_deref(), &rendered)?;

    if let Some(path) = &output {
        info!(%format, path = %path.display(), "changelog exported");
    }
    Ok(())
}
