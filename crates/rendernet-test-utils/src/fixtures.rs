//! Population fixtures and invariant checks.

use std::collections::HashSet;

use rendernet_core::{ArtistId, NodeId, PricingTier, ProjectSize, Urgency};
use rendernet_engine::{Artist, Node, Population, RandomSource, Simulation};

/// An artist with low urgency.
pub fn artist(id: u32, size: ProjectSize) -> Artist {
    Artist::new(ArtistId(id), size, Urgency::Low)
}

/// A node with the given attributes.
pub fn node(id: u32, tier: PricingTier, bandwidth: u32, availability: f64) -> Node {
    Node::new(NodeId(id), tier, bandwidth, availability)
}

/// `count` identical nodes numbered from `first_id`.
pub fn uniform_nodes(
    first_id: u32,
    count: u32,
    tier: PricingTier,
    bandwidth: u32,
    availability: f64,
) -> Vec<Node> {
    (first_id..first_id + count)
        .map(|id| node(id, tier, bandwidth, availability))
        .collect()
}

/// `num_artists` small-project artists (IDs from 1) and the given nodes.
///
/// # Panics
///
/// Panics if the population is invalid.
pub fn population(num_artists: u32, nodes: Vec<Node>) -> Population {
    let artists = (1..=num_artists)
        .map(|id| artist(id, ProjectSize::Small))
        .collect();
    Population::new(artists, nodes).expect("fixture population must be valid")
}

/// No node has an occupant while idle, and no artist occupies two
/// nodes at once.
///
/// # Panics
///
/// Panics with a description of the first violation.
pub fn assert_node_exclusivity<R: RandomSource>(sim: &Simulation<R>) {
    let mut seen = HashSet::new();
    for node in sim.population().nodes() {
        match node.occupant() {
            Some(artist) => {
                assert!(
                    node.remaining() > 0.0,
                    "node {} occupied with no remaining duration",
                    node.id()
                );
                assert!(
                    seen.insert(artist),
                    "artist {artist} occupies more than one node"
                );
            }
            None => assert_eq!(node.remaining(), 0.0, "idle node {} has work left", node.id()),
        }
    }
}

/// Job IDs are exactly `1..=len`, every record names agents of the
/// population, and no artist appears twice.
///
/// # Panics
///
/// Panics with a description of the first violation.
pub fn assert_ledger_consistent<R: RandomSource>(sim: &Simulation<R>) {
    let mut artists = HashSet::new();
    for (i, record) in sim.ledger().iter().enumerate() {
        assert_eq!(record.id.0, i as u64 + 1, "job ids must be 1..=len");
        assert!(
            sim.artist(record.artist).is_some(),
            "job {} names unknown artist {}",
            record.id,
            record.artist
        );
        assert!(
            sim.node(record.node).is_some(),
            "job {} names unknown node {}",
            record.id,
            record.node
        );
        assert!(
            artists.insert(record.artist),
            "artist {} recorded twice",
            record.artist
        );
    }
    assert!(sim.ledger().len() <= sim.completed_artists());
}
