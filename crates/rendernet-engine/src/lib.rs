//! Tick-based scheduling engine for the RenderNet marketplace.
//!
//! A [`Simulation`] owns a [`Population`] of artists and nodes plus the
//! [`JobLedger`]. Each [`step()`](Simulation::step) shows the population
//! to the registered observers, shuffles the activation order, and
//! activates every agent exactly once. All randomness flows through an
//! explicit [`RandomSource`], so a seed reproduces a run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod metrics;
pub mod population;
pub mod rng;

pub use agent::{AgentSlot, Artist, AssignOutcome, Node, SubmitOutcome};
pub use config::SimConfig;
pub use engine::{RunSummary, Simulation, TickReport};
pub use ledger::JobLedger;
pub use metrics::{CompletionCollector, CompletionSample, Observer, PopulationView};
pub use population::{Population, PopulationConfig};
pub use rng::{choose, RandomSource, SeededRandom};
