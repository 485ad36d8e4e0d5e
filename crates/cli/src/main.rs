mod cli;
mod config;
mod report;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{debug, info};

use timewindow_periods::{Clock, FixedClock, PeriodSet, SystemClock, TimestampEdge};

use crate::cli::{CliArgs, Command};
use crate::config::{CliConfig, OutputFormat};
use crate::report::CheckReport;

fn main() -> Result<()> {
    // .env may provide TIMEWINDOW_PERIODS and RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let config = CliConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;

    match args.command {
        Command::Check { file, at, json } => {
            let path = config.resolve_periods_file(file.as_deref());
            let set = PeriodSet::load(&path)
                .with_context(|| format!("failed to load periods: {}", path.display()))?;

            let clock: Box<dyn Clock> = match at.as_deref() {
                Some(s) => Box::new(FixedClock(parse_instant(s)?)),
                None => Box::new(SystemClock),
            };
            let now = clock.now();
            debug!(%now, periods = set.len(), "evaluating periods");

            let report = CheckReport::evaluate(&set, now);
            match config.resolve_output(json) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{report}"),
            }
        }
        Command::Validate { file } => {
            let path = config.resolve_periods_file(file.as_deref());
            let set = PeriodSet::load(&path)
                .with_context(|| format!("invalid declaration: {}", path.display()))?;

            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for period in &set {
                *counts.entry(period.kind().to_string()).or_default() += 1;
            }
            info!(path = %path.display(), periods = set.len(), "declaration is valid");

            println!("{}: {} period(s)", path.display(), set.len());
            for (kind, count) in counts {
                println!("  {kind:<8} {count}");
            }
        }
    }

    Ok(())
}

/// Parse a `--at` value in the declaration timestamp format.
fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    TimestampEdge::parse(s)
        .map(|edge| edge.timestamp)
        .with_context(|| format!("invalid --at instant: {s}"))
}
