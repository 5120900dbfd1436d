//! CLI argument parsing for the mtvrp-worker binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::defaults::DEFAULT_EXPORT_FILE;

#[derive(Parser)]
#[command(name = "mtvrp-worker", about = "MTVRP route optimization worker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP API and NATS handlers (default if no subcommand given)
    Serve,
    /// Optimize a workspace file and print or save the result
    Optimize {
        /// Workspace JSON with locations, vehicles and config
        #[arg(long, short)]
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write the NYC sample workspace
    SampleData {
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}
