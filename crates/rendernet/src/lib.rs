//! RenderNet: a decentralized rendering-job marketplace, simulated one
//! tick at a time.
//!
//! Artists with rendering projects compete for a limited pool of
//! compute nodes whose availability is stochastic. This facade crate
//! re-exports the public API of the RenderNet sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use rendernet::prelude::*;
//!
//! let mut sim = Simulation::from_config(&SimConfig {
//!     num_artists: 100,
//!     num_nodes: 20,
//!     seed: 42,
//! })
//! .unwrap();
//! let summary = sim.run(50);
//!
//! assert_eq!(sim.current_tick(), TickId(50));
//! assert_eq!(summary.jobs, sim.ledger().len());
//! for (i, job) in sim.ledger().iter().enumerate() {
//!     assert_eq!(job.id, JobId(i as u64 + 1));
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rendernet-core` | IDs, attributes, job records, allocation policy, config errors |
//! | [`engine`] | `rendernet-engine` | Agents, ledger, population, observers, the stepping engine |
//! | [`tables`] | `rendernet-tables` | CSV persistence of the artists, nodes and jobs tables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs and the allocation policy (`rendernet-core`).
pub use rendernet_core as types;

/// Agents, ledger, population and the simulation engine
/// (`rendernet-engine`).
pub use rendernet_engine as engine;

/// CSV table persistence (`rendernet-tables`).
pub use rendernet_tables as tables;

/// Common imports for typical usage.
pub mod prelude {
    pub use rendernet_core::{
        AllocationPolicy, ArtistId, ConfigError, JobId, JobRecord, NodeId, PricingTier,
        ProjectSize, TickId, Urgency,
    };
    pub use rendernet_engine::{
        Artist, CompletionCollector, JobLedger, Node, Observer, Population, PopulationConfig,
        PopulationView, RandomSource, RunSummary, SeededRandom, SimConfig, Simulation,
        SubmitOutcome, TickReport,
    };
    pub use rendernet_tables::{DataDir, TableError};
}
