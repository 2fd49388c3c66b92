//! RenderNet marketplace simulator CLI.
//!
//! Generates (or loads) a population of artists and nodes, runs it for
//! a fixed number of ticks, and writes the artists, nodes and jobs
//! tables.
//!
//! # Example
//!
//! ```bash
//! # The reference run: 100 artists, 20 nodes, 50 ticks
//! rendernet-sim --seed 42
//!
//! # Re-run a saved population
//! rendernet-sim --from-data --data-dir data --ticks 200
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rendernet::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RenderNet simulator
///
/// Single-threaded and reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "rendernet-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of artists to generate
    #[arg(short = 'a', long, default_value = "100", conflicts_with = "from_data")]
    artists: usize,

    /// Number of nodes to generate
    #[arg(short = 'n', long, default_value = "20", conflicts_with = "from_data")]
    nodes: usize,

    /// Number of ticks to run
    #[arg(short = 't', long, default_value = "50")]
    ticks: u64,

    /// Random seed. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for artists.csv, nodes.csv and jobs.csv
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: PathBuf,

    /// Load artists and nodes from the data directory instead of
    /// generating them
    #[arg(long)]
    from_data: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rendernet_engine=info,rendernet_tables=info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            info!(
                jobs = summary.jobs,
                completed_artists = summary.completed_artists,
                missed_claims = summary.missed_claims(),
                total_cost = summary.total_cost,
                "simulation complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        artists = args.artists,
        nodes = args.nodes,
        ticks = args.ticks,
        seed,
        data_dir = %args.data_dir.display(),
        from_data = args.from_data,
        "starting simulation"
    );

    let dir = DataDir::create(&args.data_dir)?;
    let mut sim = if args.from_data {
        Simulation::new(dir.load_population()?, SeededRandom::new(seed))
    } else {
        let sim = Simulation::from_config(&SimConfig {
            num_artists: args.artists,
            num_nodes: args.nodes,
            seed,
        })?;
        dir.save_population(sim.population())?;
        sim
    };

    let summary = sim.run(args.ticks);
    dir.save_jobs(sim.ledger())?;
    Ok(summary)
}
