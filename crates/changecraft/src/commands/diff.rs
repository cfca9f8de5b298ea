//! Diff command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use changecraft_core::{DiffReport, SnapshotDiffer, SnapshotHistory};
use changecraft_model::Snapshot;
use clap::Args;
use tracing::info;

use super::{load_config, open_history, read_document};

/// Name given to the live document when it stands in for a snapshot.
const WORKING_COPY: &str = "working copy";

/// Arguments for the diff command.
#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot id or name
    pub from: String,

    /// Second snapshot id or name (default: the current document)
    pub to: Option<String>,

    /// JSON document used when TO is omitted (default: from configuration)
    #[arg(short, long, env = "CHANGECRAFT_DOCUMENT")]
    pub input: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

fn print_report(report: &DiffReport) {
    if report.is_empty() {
        println!("No differences.");
        return;
    }

    for line in &report.added {
        println!("+ [{}] {}: {}", line.release, line.category, line.change);
    }
    for line in &report.removed {
        println!("- [{}] {}: {}", line.release, line.category, line.change);
    }
    for rename in &report.modified {
        println!("~ version {} -> {}", rename.old_version, rename.new_version);
    }
}

/// Runs the diff command.
pub fn run(args: &DiffArgs) -> Result<()> {
    let config = load_config()?;
    let history = open_history(&config)?;

    let from = history.get(&args.from)?;
    let live;
    let to = if let Some(key) = &args.to {
        history.get(key)?
    } else {
        let releases = read_document(args.input.as_deref(), &config)?;
        live = Snapshot::capture(WORKING_COPY, &releases);
        &live
    };

    let (older, newer) = SnapshotHistory::chronological(from, to);
    info!(older = %older.name, newer = %newer.name, "comparing snapshots");

    let report = SnapshotDiffer::new().diff(older, newer);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(())
}
