use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Query availability windows declared in JSON or YAML.
///
/// Loads a period declaration and reports, for a given instant, which
/// windows are open and when their occurrences start and end.
#[derive(Parser, Debug)]
#[command(name = "timewindow", version, about = "Query availability windows")]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/timewindow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate every declared period at an instant
    Check {
        /// Declaration file (.json, .yml or .yaml)
        #[arg(long, short, env = "TIMEWINDOW_PERIODS")]
        file: Option<PathBuf>,

        /// Instant to evaluate, "YYYY-MM-DD HH:MM:SS" local time (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a declaration without evaluating it
    Validate {
        /// Declaration file (.json, .yml or .yaml)
        #[arg(long, short, env = "TIMEWINDOW_PERIODS")]
        file: Option<PathBuf>,
    },
}
