//! Validated agent populations and synthetic generation.
//!
//! A [`Population`] is the set of artists and nodes a simulation runs
//! over. It can be built explicitly from agents (e.g. loaded from
//! tables) through [`Population::new`], or drawn at random through
//! [`Population::generate`].

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexMap;
use rendernet_core::error::{MAX_AVAILABILITY, MIN_AVAILABILITY};
use rendernet_core::{ArtistId, ConfigError, NodeId, PricingTier, ProjectSize, Urgency};

use crate::agent::{Artist, Node};
use crate::rng::{choose, RandomSource};

/// Lower bound (inclusive) of generated node bandwidth.
pub const MIN_GENERATED_BANDWIDTH: u32 = 10;
/// Upper bound (exclusive) of generated node bandwidth.
pub const MAX_GENERATED_BANDWIDTH: u32 = 100;

/// Sizes for a synthetic population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationConfig {
    /// Number of artists. IDs run `1..=num_artists`.
    pub num_artists: usize,
    /// Number of nodes. IDs continue after the last artist.
    pub num_nodes: usize,
}

impl PopulationConfig {
    /// Check that there is at least one artist and that every agent
    /// can be numbered. Zero nodes is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_artists == 0 {
            return Err(ConfigError::NoArtists);
        }
        let total = self.num_artists.saturating_add(self.num_nodes);
        if u32::try_from(total).is_err() {
            return Err(ConfigError::PopulationOverflow { requested: total });
        }
        Ok(())
    }
}

/// Artists and nodes keyed by ID, in construction order.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    pub(crate) artists: IndexMap<ArtistId, Artist>,
    pub(crate) nodes: IndexMap<NodeId, Node>,
}

impl Population {
    /// Build a population from explicit agents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are no artists, an ID repeats
    /// (within a kind or across kinds), a node has zero bandwidth, or a
    /// node's availability is outside `[0.5, 1.0]`.
    pub fn new(artists: Vec<Artist>, nodes: Vec<Node>) -> Result<Self, ConfigError> {
        if artists.is_empty() {
            return Err(ConfigError::NoArtists);
        }

        let mut artist_map = IndexMap::with_capacity(artists.len());
        for artist in artists {
            match artist_map.entry(artist.id()) {
                Entry::Occupied(_) => {
                    return Err(ConfigError::DuplicateArtist { id: artist.id() })
                }
                Entry::Vacant(slot) => {
                    slot.insert(artist);
                }
            }
        }

        let artist_ids: HashSet<u32> = artist_map.keys().map(|id| id.0).collect();
        let mut node_map = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            validate_node(&node)?;
            if artist_ids.contains(&node.id().0) {
                return Err(ConfigError::IdCollision { id: node.id().0 });
            }
            match node_map.entry(node.id()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateNode { id: node.id() }),
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }

        Ok(Self {
            artists: artist_map,
            nodes: node_map,
        })
    }

    /// Draw a random population.
    ///
    /// Artists get IDs `1..=num_artists` with uniform size and urgency.
    /// Nodes get the following IDs, a uniform tier, bandwidth in
    /// `10..100`, and availability in `[0.5, 1.0)`. All agents of one
    /// kind are drawn before the next, artist attributes first.
    pub fn generate<R>(config: &PopulationConfig, rng: &mut R) -> Result<Self, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        config.validate()?;
        // validate() guarantees both counts fit in u32.
        let num_artists = config.num_artists as u32;
        let num_nodes = config.num_nodes as u32;

        let artists = (1..=num_artists)
            .map(|id| {
                let size = pick(rng, &ProjectSize::ALL, ProjectSize::Small);
                let urgency = pick(rng, &Urgency::ALL, Urgency::Low);
                Artist::new(ArtistId(id), size, urgency)
            })
            .collect();

        let nodes = (1..=num_nodes)
            .map(|k| {
                let id = num_artists + k;
                let tier = pick(rng, &PricingTier::ALL, PricingTier::Low);
                let bandwidth = rng.range_u32(MIN_GENERATED_BANDWIDTH, MAX_GENERATED_BANDWIDTH);
                let availability = rng.range_f64(MIN_AVAILABILITY, MAX_AVAILABILITY);
                Node::new(NodeId(id), tier, bandwidth, availability)
            })
            .collect();

        Self::new(artists, nodes)
    }

    /// Artists in construction order.
    pub fn artists(&self) -> impl ExactSizeIterator<Item = &Artist> + '_ {
        self.artists.values()
    }

    /// Nodes in construction order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Look up an artist.
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Number of artists.
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Artists whose completion flag is set.
    pub fn completed_artists(&self) -> usize {
        self.artists.values().filter(|a| a.is_done()).count()
    }

    /// Nodes currently serving a job.
    pub fn busy_nodes(&self) -> usize {
        self.nodes.values().filter(|n| !n.is_idle()).count()
    }
}

fn pick<T: Copy, R: RandomSource + ?Sized>(rng: &mut R, values: &[T], fallback: T) -> T {
    choose(rng, values).copied().unwrap_or(fallback)
}

fn validate_node(node: &Node) -> Result<(), ConfigError> {
    if node.bandwidth() == 0 {
        return Err(ConfigError::ZeroBandwidth { node: node.id() });
    }
    let p = node.availability();
    if !(MIN_AVAILABILITY..=MAX_AVAILABILITY).contains(&p) {
        return Err(ConfigError::InvalidAvailability {
            node: node.id(),
            value: p,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    fn artist(id: u32) -> Artist {
        Artist::new(ArtistId(id), ProjectSize::Small, Urgency::Low)
    }

    fn node(id: u32, bandwidth: u32, availability: f64) -> Node {
        Node::new(NodeId(id), PricingTier::Low, bandwidth, availability)
    }

    #[test]
    fn populations_without_artists_rejected() {
        assert_eq!(Population::new(vec![], vec![]), Err(ConfigError::NoArtists));
        assert_eq!(
            Population::new(vec![], vec![node(1, 50, 0.9)]),
            Err(ConfigError::NoArtists)
        );
        for num_nodes in [0, 5] {
            let config = PopulationConfig {
                num_artists: 0,
                num_nodes,
            };
            assert_eq!(config.validate(), Err(ConfigError::NoArtists));
            assert_eq!(
                Population::generate(&config, &mut SeededRandom::new(1)),
                Err(ConfigError::NoArtists)
            );
        }
    }

    #[test]
    fn zero_nodes_is_valid() {
        assert!(Population::new(vec![artist(1)], vec![]).is_ok());
        let config = PopulationConfig {
            num_artists: 3,
            num_nodes: 0,
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn duplicate_ids_rejected() {
        assert_eq!(
            Population::new(vec![artist(1), artist(1)], vec![]),
            Err(ConfigError::DuplicateArtist { id: ArtistId(1) })
        );
        assert_eq!(
            Population::new(vec![artist(1)], vec![node(2, 50, 0.9), node(2, 60, 0.9)]),
            Err(ConfigError::DuplicateNode { id: NodeId(2) })
        );
        assert_eq!(
            Population::new(vec![artist(3)], vec![node(3, 50, 0.9)]),
            Err(ConfigError::IdCollision { id: 3 })
        );
    }

    #[test]
    fn bad_node_attributes_rejected() {
        assert_eq!(
            Population::new(vec![artist(1)], vec![node(2, 0, 0.9)]),
            Err(ConfigError::ZeroBandwidth { node: NodeId(2) })
        );
        for bad in [0.49, 1.01, f64::NAN, f64::INFINITY] {
            let err = Population::new(vec![artist(1)], vec![node(2, 10, bad)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidAvailability { node: NodeId(2), .. }),
                "{bad} accepted"
            );
        }
        assert!(Population::new(vec![artist(1)], vec![node(2, 10, 0.5)]).is_ok());
        assert!(Population::new(vec![artist(1)], vec![node(3, 10, 1.0)]).is_ok());
    }

    #[test]
    fn generated_ids_and_ranges() {
        let config = PopulationConfig {
            num_artists: 100,
            num_nodes: 20,
        };
        let pop = Population::generate(&config, &mut SeededRandom::new(5)).unwrap();
        let artist_ids: Vec<u32> = pop.artists().map(|a| a.id().0).collect();
        let node_ids: Vec<u32> = pop.nodes().map(|n| n.id().0).collect();
        assert_eq!(artist_ids, (1..=100).collect::<Vec<_>>());
        assert_eq!(node_ids, (101..=120).collect::<Vec<_>>());
        for n in pop.nodes() {
            assert!((10..100).contains(&n.bandwidth()));
            assert!((0.5..1.0).contains(&n.availability()));
            assert!(n.is_idle());
        }
        assert_eq!(pop.completed_artists(), 0);
        assert_eq!(pop.busy_nodes(), 0);
    }

    #[test]
    fn generation_is_reproducible() {
        let config = PopulationConfig {
            num_artists: 30,
            num_nodes: 10,
        };
        let a = Population::generate(&config, &mut SeededRandom::new(77)).unwrap();
        let b = Population::generate(&config, &mut SeededRandom::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lookup_by_id() {
        let pop = Population::new(vec![artist(1)], vec![node(2, 25, 0.75)]).unwrap();
        assert_eq!(pop.artist(ArtistId(1)).map(|a| a.id()), Some(ArtistId(1)));
        assert_eq!(pop.node(NodeId(2)).map(|n| n.bandwidth()), Some(25));
        assert!(pop.node(NodeId(1)).is_none());
        assert_eq!((pop.artist_count(), pop.node_count()), (1, 1));
    }
}
