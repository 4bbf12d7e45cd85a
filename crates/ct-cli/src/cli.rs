//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ct_core::ResolveOrder;

/// Countdown timer input tool.
///
/// Turns text such as "5 minutes" or "5pm" into timer input records and
/// describes stored records.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve timer text and print its record as JSON.
    Parse {
        /// The text to resolve (e.g. "5", "1h 30m", "tomorrow 9am").
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Which reading wins for ambiguous text: "time" or "duration".
        #[arg(long)]
        prefer: Option<ResolveOrder>,

        /// Title for the timer.
        #[arg(long)]
        title: Option<String>,
    },

    /// Describe a timer input record read from stdin.
    Describe,
}
