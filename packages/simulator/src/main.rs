//! Darts simulator CLI - plays whole legs against the in-memory match store.
//!
//! Prints one JSON object per leg to stdout.

mod simulator;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use darts_backend::{telemetry, ExitMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulator::{LegSettings, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "darts-simulator")]
#[command(about = "Simulate X01 legs through the scoring service")]
struct Args {
    /// Number of legs to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per leg
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..=16))]
    players: u16,

    /// Starting score
    #[arg(long, default_value = "501")]
    start: u32,

    /// Entry rule
    #[arg(long, default_value = "straight")]
    entry: Mode,

    /// Exit rule
    #[arg(long, default_value = "double")]
    exit: Mode,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a leg after this many darts
    #[arg(long, default_value = "1000")]
    max_darts: u32,

    /// Probability that a dart lands where it was aimed
    #[arg(long, default_value = "0.6", value_parser = parse_accuracy)]
    accuracy: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Straight,
    Double,
    Master,
}

impl From<Mode> for ExitMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Straight => ExitMode::Straight,
            Mode::Double => ExitMode::Double,
            Mode::Master => ExitMode::Master,
        }
    }
}

fn parse_accuracy(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("accuracy must be within 0.0..=1.0, got {value}"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; legs go to stdout, logs to stderr
    telemetry::init_tracing(if args.verbose { "debug" } else { "warn" });

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let settings = LegSettings {
        players: usize::from(args.players),
        starting_score: args.start,
        entry_mode: args.entry.into(),
        exit_mode: args.exit.into(),
        max_darts: args.max_darts,
        accuracy: args.accuracy,
    };

    let mut simulator = Simulator::new(rng);
    let started = Instant::now();
    let mut finished = 0u32;

    for leg in 1..=args.games {
        match simulator.play_leg(leg, &settings).await {
            Ok(result) => {
                if result.winner.is_some() {
                    finished += 1;
                }
                println!("{}", serde_json::to_string(&result)?);
            }
            Err(e) => warn!(leg, error = %e, "Leg failed"),
        }
    }

    info!(
        legs = args.games,
        finished,
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "Simulation complete"
    );
    Ok(())
}
