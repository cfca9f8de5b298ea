//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Parse, render and diff project changelogs.
#[derive(Debug, Parser)]
#[command(name = "changecraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default changecraft.toml
    Init(commands::init::InitArgs),

    /// Parse free-form changelog text into a JSON document
    Parse(commands::parse::ParseArgs),

    /// Render the JSON document as Markdown, JSON or HTML
    Export(commands::export::ExportArgs),

    /// Save the current document as a named snapshot
    Snapshot(commands::snapshot::SnapshotArgs),

    /// List stored snapshots
    History(commands::history::HistoryArgs),

    /// Compare two snapshots, or a snapshot with the current document
    Diff(commands::diff::DiffArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(&args),
            Commands::Parse(args) => commands::parse::run(&args),
            Commands::Export(args) => commands::export::run(&args),
            Commands::Snapshot(args) => commands::snapshot::run(&args),
            Commands::History(args) => commands::history::run(&args),
            Commands::Diff(args) => commands::diff::run(&args),
        }
    }
}
