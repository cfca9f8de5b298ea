//! Parse command.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use super::{build_pipeline, emit};

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Changelog text file, or `-` for stdin
    pub file: PathBuf,

    /// Output file for the JSON document (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Runs the parse command.
pub fn run(args: &ParseArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    let pipeline = build_pipeline();

    let releases = pipeline.parse(&text);
    if releases.is_empty() {
        warn!("no releases recognised in input");
    }

    let json = pipeline.export("json", &releases)?;
    emit(args.output.as_deref(), &json)
}
