use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hilal::display::{SnapshotDisplay, SnapshotReport};
use hilal::engine::{EngineConfig, HilalEngine, PositionSnapshot};
use hilal::hilal_errors::HilalError;
use hilal::observer::ObserverLocation;
use hilal::time::{validate_utc_offset, TARGET_GHURUB_UTC};
use hilal::visibility::VisibilityCriteria;

#[derive(Parser)]
#[command(name = "hilal", about = "Sun/Moon positions and crescent visibility")]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    /// Print a JSON report instead of the status board
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SiteArgs {
    /// JSON engine configuration; command-line values override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Observer latitude in degrees (north positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees (east positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Site name shown on the status board
    #[arg(long, global = true)]
    site_name: Option<String>,
    /// Fixed UTC offset of the local clock, in hours
    #[arg(long, global = true, allow_negative_numbers = true)]
    utc_offset: Option<f64>,
    /// Minimum Moon altitude for the imkan criterion, in degrees
    #[arg(long, global = true, allow_negative_numbers = true)]
    min_altitude: Option<f64>,
    /// Minimum elongation for the imkan criterion, in degrees
    #[arg(long, global = true)]
    min_elongation: Option<f64>,
    /// Minimum elongation for the qath'i criterion, in degrees
    #[arg(long, global = true)]
    certain_elongation: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate at the current UTC instant
    Now,
    /// Evaluate at a fixed UTC instant
    At {
        /// UTC instant (YYYY-MM-DDTHH:MM:SS)
        instant: String,
    },
    /// Evaluate at the built-in ghurub target (2026-02-17 10:05:00 UTC)
    Target,
    /// Re-evaluate against the live clock on a fixed cadence
    Watch {
        /// Refresh period in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
        /// Stop after this many snapshots (runs until Ctrl-C otherwise)
        #[arg(long)]
        count: Option<u64>,
    },
}

impl SiteArgs {
    fn into_config(self) -> Result<EngineConfig, HilalError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };

        if self.lat.is_some() || self.lon.is_some() || self.site_name.is_some() {
            let lat = self.lat.unwrap_or(config.site.latitude());
            let lon = self.lon.unwrap_or(config.site.longitude());
            // moved coordinates no longer carry the configured site name
            config.site = ObserverLocation::new(lat, lon, self.site_name)?;
        }

        if let Some(offset) = self.utc_offset {
            config.utc_offset_hours = validate_utc_offset(offset)?;
        }

        let c = config.criteria;
        config.criteria = VisibilityCriteria::builder()
            .min_moon_altitude(self.min_altitude.unwrap_or(c.min_moon_altitude))
            .min_elongation_possible(self.min_elongation.unwrap_or(c.min_elongation_possible))
            .min_elongation_certain(self.certain_elongation.unwrap_or(c.min_elongation_certain))
            .build()?;

        Ok(config)
    }
}

fn print_snapshot(
    snapshot: &PositionSnapshot,
    engine: &HilalEngine,
    json: bool,
) -> Result<(), HilalError> {
    if json {
        let report = SnapshotReport::new(snapshot, engine);
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", SnapshotDisplay::new(snapshot, engine));
    }
    Ok(())
}

async fn watch(
    engine: &HilalEngine,
    interval_ms: u64,
    count: Option<u64>,
    json: bool,
) -> Result<(), HilalError> {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let mut produced = 0u64;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = engine.snapshot_now()?;
                print_snapshot(&snapshot, engine, json)?;
                produced += 1;
                if count.is_some_and(|n| produced >= n) {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!(snapshots = produced, "interrupted, stopping watch");
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), HilalError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hilal=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = HilalEngine::new(cli.site.into_config()?)?;
    tracing::debug!(config = ?engine.config(), "engine ready");

    match cli.command {
        Commands::Now => print_snapshot(&engine.snapshot_now()?, &engine, cli.json),
        Commands::At { instant } => {
            print_snapshot(&engine.snapshot_at_str(&instant)?, &engine, cli.json)
        }
        Commands::Target => print_snapshot(
            &engine.snapshot_at_str(TARGET_GHURUB_UTC)?,
            &engine,
            cli.json,
        ),
        Commands::Watch { interval_ms, count } => {
            watch(&engine, interval_ms, count, cli.json).await
        }
    }
}
