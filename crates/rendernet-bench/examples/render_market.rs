//! RenderNet walkthrough: generate a market, run it, inspect results.
//!
//! Demonstrates:
//!   1. Building a simulation from a seeded config
//!   2. Attaching a custom observer
//!   3. Stepping tick by tick and reading tick reports
//!   4. Writing the three tables to a directory
//!
//! Run with:
//!   cargo run --example render_market

use std::error::Error;

use rendernet_bench::{reference_profile, REFERENCE_TICKS};
use rendernet_core::TickId;
use rendernet_engine::{Observer, PopulationView, Simulation};
use rendernet_tables::DataDir;

/// Prints node utilisation every ten ticks.
struct Utilisation;

impl Observer for Utilisation {
    fn observe(&mut self, tick: TickId, view: &PopulationView<'_>) {
        if tick.0 % 10 == 1 {
            let nodes = view.nodes().len().max(1);
            println!(
                "tick {:>3}: {:>3} busy of {nodes} nodes, {:>3} artists served",
                tick.0,
                view.busy_nodes(),
                view.completed_artists(),
            );
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut sim = Simulation::from_config(&reference_profile(42))?
        .with_observer(Box::new(Utilisation));

    let mut missed = 0;
    for _ in 0..REFERENCE_TICKS {
        let report = sim.step();
        missed += report.missed;
    }

    println!();
    println!("jobs recorded:      {}", sim.ledger().len());
    println!("artists done:       {}", sim.completed_artists());
    println!("claims w/o record:  {missed}");
    println!("total cost:         {}", sim.ledger().total_cost());

    let cheapest = sim.ledger().iter().min_by_key(|r| r.cost);
    if let Some(job) = cheapest {
        println!(
            "cheapest job:       #{} artist {} on node {} ({} ticks, cost {})",
            job.id, job.artist, job.node, job.duration, job.cost
        );
    }

    let dir = DataDir::create(std::env::temp_dir().join("rendernet-demo"))?;
    dir.save_population(sim.population())?;
    dir.save_jobs(sim.ledger())?;
    println!("tables written to   {}", dir.root().display());
    Ok(())
}
