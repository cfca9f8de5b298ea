//! Initialize command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use changecraft_config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use clap::Args;
use tracing::info;

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    info!(path = CONFIG_FILE_NAME, "wrote configuration");
    println!("Created {CONFIG_FILE_NAME}");

    Ok(())
}
