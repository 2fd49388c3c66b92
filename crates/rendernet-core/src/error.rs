//! Construction-time configuration errors.
//!
//! Running a valid population never fails: an empty candidate set or a
//! failed re-check inside an assignment are ordinary outcomes, not
//! errors. Everything that can go wrong is caught when the population
//! is built.

use std::error::Error;
use std::fmt;

use crate::id::{ArtistId, NodeId};

/// Smallest allowed node availability probability.
pub const MIN_AVAILABILITY: f64 = 0.5;
/// Largest allowed node availability probability.
pub const MAX_AVAILABILITY: f64 = 1.0;

/// Errors detected while validating a population or simulation config.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The population has no artists. Zero nodes is allowed.
    NoArtists,
    /// The requested population cannot be numbered within `u32` IDs.
    PopulationOverflow {
        /// Total number of agents requested.
        requested: usize,
    },
    /// Two artists share the same ID.
    DuplicateArtist {
        /// The repeated ID.
        id: ArtistId,
    },
    /// Two nodes share the same ID.
    DuplicateNode {
        /// The repeated ID.
        id: NodeId,
    },
    /// An artist and a node share the same numeric ID.
    IdCollision {
        /// The shared numeric ID.
        id: u32,
    },
    /// A node was configured with zero bandwidth.
    ZeroBandwidth {
        /// The offending node.
        node: NodeId,
    },
    /// A node's availability probability is NaN or outside
    /// `[MIN_AVAILABILITY, MAX_AVAILABILITY]`.
    InvalidAvailability {
        /// The offending node.
        node: NodeId,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArtists => write!(f, "population has no artists"),
            Self::PopulationOverflow { requested } => {
                write!(f, "population of {requested} agents exceeds u32 ID space")
            }
            Self::DuplicateArtist { id } => write!(f, "duplicate artist id {id}"),
            Self::DuplicateNode { id } => write!(f, "duplicate node id {id}"),
            Self::IdCollision { id } => {
                write!(f, "id {id} is used by both an artist and a node")
            }
            Self::ZeroBandwidth { node } => write!(f, "node {node} has zero bandwidth"),
            Self::InvalidAvailability { node, value } => write!(
                f,
                "node {node} availability {value} outside [{MIN_AVAILABILITY}, {MAX_AVAILABILITY}]"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ConfigError::InvalidAvailability {
            node: NodeId(12),
            value: 0.25,
        };
        assert_eq!(err.to_string(), "node 12 availability 0.25 outside [0.5, 1]");
        assert_eq!(
            ConfigError::ZeroBandwidth { node: NodeId(3) }.to_string(),
            "node 3 has zero bandwidth"
        );
        assert_eq!(ConfigError::NoArtists.to_string(), "population has no artists");
    }
}
