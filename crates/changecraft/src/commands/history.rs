//! History command.

use anyhow::Result;
use clap::Args;

use super::{load_config, open_history};

/// Arguments for the history command.
#[derive(Debug, Args)]
pub struct HistoryArgs {}

/// Runs the history command.
pub fn run(_args: &HistoryArgs) -> Result<()> {
    let config = load_config()?;
    let history = open_history(&config)?;

    if history.is_empty() {
        println!("No snapshots recorded.");
        return Ok(());
    }

    for snapshot in history.snapshots() {
        println!(
            "{}  {}  {}  {} release(s)",
            snapshot.id,
            snapshot.created_at.format("%Y-%m-%d %H:%M:%S"),
            snapshot.name,
            snapshot.releases.len()
        );
    }
    Ok(())
}
