//! board — animated aircraft boarding in the terminal.
//!
//! Sells tickets for a `ROWS` × `COLUMNS` cabin, queues passengers per aisle,
//! and redraws the cabin after every round until everyone is seated.
//!
//! ```text
//! board 20 7 --delay-ms 200
//! RUST_LOG=debug board 5 4 --delay-ms 0
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ab_core::BoardingConfig;
use ab_display::{Glyphs, TerminalRenderer};
use ab_sim::SimBuilder;

/// Simulate passengers boarding an aircraft, one round at a time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of seat rows.
    #[clap(default_value = "10")]
    rows: usize,

    /// Number of seats per row (1 to 26).
    #[clap(default_value = "10")]
    columns: usize,

    /// Pause between rounds, in milliseconds.
    #[clap(long, default_value = "500")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?
        .as_nanos() as u64;

    let config = BoardingConfig {
        rows:           cli.rows,
        columns:        cli.columns,
        seed,
        round_delay_ms: cli.delay_ms,
        ..BoardingConfig::default()
    };
    info!(rows = config.rows, columns = config.columns, seed, "starting boarding");

    let mut sim = SimBuilder::new(config)
        .build()
        .context("could not set up the flight")?;

    let mut renderer = TerminalRenderer::stdout(sim.config.round_delay(), Glyphs::EMOJI);
    let rounds = sim.run(&mut renderer)?;
    if let Some(e) = renderer.take_error() {
        return Err(e).context("drawing the cabin");
    }

    info!(rounds = rounds.0, "done");
    Ok(())
}
