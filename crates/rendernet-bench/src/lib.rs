//! Benchmark profiles for the RenderNet simulation.
//!
//! - [`reference_profile`]: the canonical 100 artists / 20 nodes market
//! - [`stress_profile`]: 10,000 artists competing for 500 nodes
//! - [`contended_population`]: many artists on a few flaky nodes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rendernet_core::{ArtistId, NodeId, PricingTier, ProjectSize, Urgency};
use rendernet_engine::{Artist, Node, Population, SimConfig};

/// Ticks in the reference run.
pub const REFERENCE_TICKS: u64 = 50;

/// 100 artists, 20 nodes.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        num_artists: 100,
        num_nodes: 20,
        seed,
    }
}

/// 10,000 artists, 500 nodes.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        num_artists: 10_000,
        num_nodes: 500,
        seed,
    }
}

/// `artists` large-project artists against `nodes` slow nodes at the
/// minimum availability, so most submissions wait or miss.
pub fn contended_population(artists: u32, nodes: u32) -> Population {
    let artist_list = (1..=artists)
        .map(|id| Artist::new(ArtistId(id), ProjectSize::Large, Urgency::High))
        .collect();
    let node_list = (1..=nodes)
        .map(|k| Node::new(NodeId(artists + k), PricingTier::Medium, 10, 0.5))
        .collect();
    match Population::new(artist_list, node_list) {
        Ok(population) => population,
        Err(e) => panic!("contended population is invalid: {e}"),
    }
}
