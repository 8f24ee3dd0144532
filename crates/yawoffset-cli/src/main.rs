//! Replays recorded velocity and IMU logs through the stop-time yaw rate
//! offset estimator.
//!
//! # Usage
//!
//! ```bash
//! yawoffset --config params.yaml --velocity velocity.csv --imu imu.csv --output offset.json
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use yawoffset_cli::errors::Result;
use yawoffset_cli::output::write_results_csv;
use yawoffset_cli::types::{OffsetConfig, SessionData};
use yawoffset_cli::{write_json, OffsetReplayer};

#[derive(Parser)]
#[command(name = "yawoffset")]
#[command(about = "Estimate the gyroscope yaw rate offset from stops in a recorded drive")]
struct Args {
    /// YAML parameter file (`common` and `yaw_rate_offset_stop` sections)
    #[arg(short, long)]
    config: PathBuf,

    /// Velocity CSV (timestamp_seconds,speed_mps)
    #[arg(long)]
    velocity: PathBuf,

    /// IMU CSV (timestamp_seconds,yaw_rate_rps)
    #[arg(long)]
    imu: PathBuf,

    /// JSON report destination
    #[arg(short, long, default_value = "yaw_rate_offset_stop.json")]
    output: PathBuf,

    /// Also write per-sample results as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        // Configuration problems use their own exit status.
        process::exit(if err.is_config_error() { 3 } else { 1 });
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::info!("config: {}", args.config.display());
    let params = OffsetConfig::from_path(&args.config)?.to_params()?;

    let session = SessionData::new(args.velocity.clone(), args.imu.clone());
    let mut replayer = OffsetReplayer::new(params);
    let output = replayer.process_session(&session)?;

    write_json(&args.output, &output)?;
    tracing::info!("Wrote {}", args.output.display());

    if let Some(csv_path) = &args.csv {
        write_results_csv(csv_path, &output.results)?;
        tracing::info!("Wrote {}", csv_path.display());
    }

    let summary = &output.summary;
    if summary.enabled {
        tracing::info!(
            "Final yaw rate offset {:.6} rad/s from {} windows ({} outliers rejected)",
            summary.final_offset,
            summary.windows_closed,
            summary.rejected_samples
        );
    } else {
        tracing::warn!("No stop lasted long enough to estimate the yaw rate offset");
    }
    if summary.abnormal_outputs > 0 {
        tracing::warn!(
            "{} outputs were NaN or infinite and held the previous offset",
            summary.abnormal_outputs
        );
    }

    Ok(())
}
