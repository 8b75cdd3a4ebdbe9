//! Trellis — in-memory project board CLI.
//!
//! # Usage
//!
//! ```text
//! trellis board [--templates <dir>]
//! trellis demo [--json]
//! ```

mod commands;
mod session;
mod views;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{board::BoardArgs, demo::DemoArgs};
use trellis_core::ProjectStatus;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Track projects on an in-memory kanban board",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive board session on stdin/stdout.
    Board(BoardArgs),

    /// Seed a board with sample projects and print the result.
    Demo(DemoArgs),
}

// ---------------------------------------------------------------------------
// Shared status argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so session commands can parse [`ProjectStatus`] from input.
#[derive(Debug, Clone, Default)]
pub struct StatusArg(pub ProjectStatus);

impl FromStr for StatusArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self(ProjectStatus::Active)),
            "finished" => Ok(Self(ProjectStatus::Finished)),
            other => Err(format!(
                "unknown status '{other}'; expected: active, finished"
            )),
        }
    }
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<StatusArg> for ProjectStatus {
    fn from(s: StatusArg) -> Self {
        s.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Board(args) => args.run(),
        Commands::Demo(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
