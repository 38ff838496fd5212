//! Aurora decision command-line tool.
//!
//! Reads a forecast request from a JSON file, computes the decision and
//! prints it as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! aurora-decide --input forecast.json
//! aurora-decide --input forecast.json --now 2026-02-10T20:00:00Z --pretty
//! aurora-decide --input forecast.json --config aurora.toml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use aurora_rust::algorithms::MasterStatus;
use aurora_rust::io::ForecastLoader;
use aurora_rust::providers::{Clock, FixedClock, LocalForecastProvider, SystemClock};
use aurora_rust::services::DecisionService;
use aurora_rust::EngineConfig;

#[derive(Parser)]
#[command(
    name = "aurora-decide",
    about = "Deterministic aurora go/no-go decision for a forecast request"
)]
struct Args {
    /// Forecast request (JSON)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Reference instant (RFC 3339); defaults to the current time
    #[arg(long)]
    now: Option<String>,

    /// Engine configuration (TOML); defaults to aurora.toml if present
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::from_default_location()
            .context("Failed to load aurora.toml")?
            .unwrap_or_default()),
    }
}

fn reference_instant(now: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match now {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid --now value: {}", raw))?
            .with_timezone(&Utc)),
        None => Ok(SystemClock.now()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let now = reference_instant(args.now.as_deref())?;
    info!("Deciding for {} as of {}", config.location.name, now);

    let loaded = ForecastLoader::load_validated(&args.input)?;
    if !loaded.validation.warnings.is_empty() {
        warn!(
            "{} validation warnings in {}",
            loaded.validation.warnings.len(),
            args.input.display()
        );
    }

    let service = DecisionService::new(
        LocalForecastProvider::new(loaded.input),
        FixedClock::new(now),
        config,
    );
    let result = service.current_decision().await?;

    info!(
        "State: {} ({}), best ADS {}",
        result.decision.state,
        MasterStatus::from(result.decision.state),
        result.decision.best_window.ads
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&result.decision)?
    } else {
        serde_json::to_string(&result.decision)?
    };
    println!("{}", output);

    Ok(())
}
