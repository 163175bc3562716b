use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drop_targets::core::haversine_distance;
use drop_targets::{refresh, RefreshSnapshot};
use log::{info, LevelFilter};

/// Target consolidation and payload release prediction.
#[derive(Debug, Parser)]
#[command(name = "drop-targets", version, about)]
struct Cli {
    /// Log level for stderr output (off, error, warn, info, debug, trace).
    /// `RUST_LOG` directives take precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one refresh cycle over a JSON snapshot and emit the report.
    Refresh {
        /// Snapshot JSON: detections by class, current target, vehicle state.
        snapshot: PathBuf,
        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the estimated release distance in meters.
        #[arg(long, allow_negative_numbers = true)]
        release_distance: Option<f64>,
        /// Omit classes listed as completed.
        #[arg(long)]
        hide_completed: bool,
    },
    /// Print the great-circle distance in meters between two points.
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    match cli.command {
        Command::Refresh {
            snapshot,
            output,
            release_distance,
            hide_completed,
        } => run_refresh(snapshot, output, release_distance, hide_completed),
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let d = haversine_distance(lat1, lon1, lat2, lon2);
            println!("{d:.3}");
            Ok(())
        }
    }
}

/// Send library `log` records to stderr, timestamped to the millisecond so
/// records line up with the ground station's polling cycles.
#[cfg(not(feature = "tracing"))]
fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .try_init()?;
    Ok(())
}

/// Install a stderr fmt subscriber and bridge `log` records into it. Span
/// close events report how long each refresh stage took.
#[cfg(feature = "tracing")]
fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init_with_filter(level)?;
    Ok(())
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run_refresh(
    snapshot_path: PathBuf,
    output: Option<PathBuf>,
    release_distance: Option<f64>,
    hide_completed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshot = RefreshSnapshot::load_json(&snapshot_path)?;
    info!(
        "loaded {} class(es) from {}",
        snapshot.detections.len(),
        snapshot_path.display()
    );
    if let Some(distance) = release_distance {
        snapshot.release.estimated_release_distance_m = distance;
    }
    if hide_completed {
        snapshot.consolidate.include_completed = false;
    }

    let report = refresh(&snapshot)?;

    match output {
        Some(path) => {
            report.write_json(&path)?;
            println!("wrote report JSON to {}", path.display());
            println!("{} cluster(s)", report.clusters.len());
            println!("{}", report.prediction);
        }
        None => println!("{}", report.to_json_pretty()?),
    }
    Ok(())
}
