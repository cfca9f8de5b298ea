//! Snapshot command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use changecraft_model::Snapshot;
use clap::Args;

use super::{load_config, open_history, read_document};

/// Arguments for the snapshot command.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot name
    pub name: String,

    /// JSON document to capture (default: from configuration)
    #[arg(short, long, env = "CHANGECRAFT_DOCUMENT")]
    pub input: Option<PathBuf>,
}

/// Runs the snapshot command.
pub fn run(args: &SnapshotArgs) -> Result<()> {
    let config = load_config()?;
    let releases = read_document(args.input.as_deref(), &config)?;
    let mut history = open_history(&config)?;

    let snapshot = Snapshot::capture(&args.name, &releases);
    let summary = format!(
        "Saved snapshot '{}' ({}, {} release(s), {} change(s))",
        snapshot.name,
        snapshot.id,
        snapshot.releases.len(),
        snapshot.change_count()
    );

    let evicted = history.push(snapshot);
    history
        .save(&config.history.path)
        .with_context(|| format!("failed to save history {}", config.history.path))?;

    println!("{summary}");
    if evicted > 0 {
        println!(
            "Dropped {evicted} old snapshot(s) (limit {})",
            history.limit()
        );
    }
    Ok(())
}
