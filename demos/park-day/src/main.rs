//! park-day: run one day at the park and print how it went.
//!
//! Prints a status line every status interval, the opening/closing
//! announcements, and the daily recap.  With `--output-dir` the same data
//! is also written as CSV.
//!
//! ```text
//! park-day --closing-time 28800 --start-leaving 1800 --status-interval 900
//! RUST_LOG=park_sim=debug park-day --config park.json --departures
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use park_core::{ParkConfig, Tick};
use park_output::{ConsoleWriter, CsvWriter, ReportObserver};
use park_ride::Rider;
use park_sim::{DailyRecap, ParkBuilder, ParkObserver, StatusSnapshot};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "park-day", about = "Simulate one day at an amusement park")]
struct Cli {
    /// JSON park configuration; flags below override its values
    #[arg(long, env = "PARK_CONFIG")]
    config: Option<PathBuf>,

    /// Length of the day in seconds
    #[arg(long)]
    closing_time: Option<u64>,

    /// Seconds before closing when visitors start leaving
    #[arg(long)]
    start_leaving: Option<u64>,

    /// Seconds between status lines
    #[arg(long)]
    status_interval: Option<u64>,

    /// RNG seed for arrival group sizes
    #[arg(long)]
    seed: Option<u64>,

    /// Also write CSV output into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Announce every visitor as they leave
    #[arg(long)]
    departures: bool,

    /// Print the recap as JSON after the text recap
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn park_config(&self) -> Result<ParkConfig> {
        let mut config = match &self.config {
            Some(path) => ParkConfig::from_json_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ParkConfig::default(),
        };
        if let Some(v) = self.closing_time {
            config.closing_time_secs = v;
        }
        if let Some(v) = self.start_leaving {
            config.start_leaving_secs = v;
        }
        if let Some(v) = self.status_interval {
            config.status_interval_secs = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        Ok(config)
    }
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to two observers.
struct Both<A: ParkObserver, B: ParkObserver>(A, Option<B>);

impl<A: ParkObserver, B: ParkObserver> ParkObserver for Both<A, B> {
    fn on_open(&mut self, tick: Tick) {
        self.0.on_open(tick);
        if let Some(b) = &mut self.1 {
            b.on_open(tick);
        }
    }

    fn on_status(&mut self, status: &StatusSnapshot) {
        self.0.on_status(status);
        if let Some(b) = &mut self.1 {
            b.on_status(status);
        }
    }

    fn on_rider_departed(&mut self, tick: Tick, rider: &Rider) {
        self.0.on_rider_departed(tick, rider);
        if let Some(b) = &mut self.1 {
            b.on_rider_departed(tick, rider);
        }
    }

    fn on_closing(&mut self, tick: Tick) {
        self.0.on_closing(tick);
        if let Some(b) = &mut self.1 {
            b.on_closing(tick);
        }
    }

    fn on_closed(&mut self, recap: &DailyRecap) {
        self.0.on_closed(recap);
        if let Some(b) = &mut self.1 {
            b.on_closed(recap);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.park_config()?;
    info!(
        closing_time_secs = config.closing_time_secs,
        start_leaving_secs = config.start_leaving_secs,
        status_interval_secs = config.status_interval_secs,
        seed = config.seed,
        "configuration loaded"
    );

    let mut park = ParkBuilder::new(config).build()?;

    let console = ReportObserver::new(ConsoleWriter::new(std::io::stdout().lock()))
        .with_departures(cli.departures);
    let csv = match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(ReportObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = Both(console, csv);

    let t0 = Instant::now();
    let recap = park.run(&mut obs);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "simulation complete");

    if let Some(e) = obs.0.take_error() {
        return Err(e).context("writing console output");
    }
    if let Some(e) = obs.1.as_mut().and_then(ReportObserver::take_error) {
        return Err(e).context("writing CSV output");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recap)?);
    }

    Ok(())
}
