//! Run configuration for a generated population.

use rendernet_core::ConfigError;

use crate::population::PopulationConfig;

/// Parameters for [`Simulation::from_config`](crate::Simulation::from_config).
///
/// The seed drives both population generation and every draw made
/// while stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of artists. Default: 100.
    pub num_artists: usize,
    /// Number of nodes. Default: 20.
    pub num_nodes: usize,
    /// RNG seed. Default: 0.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_artists: 100,
            num_nodes: 20,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Population sizes as a [`PopulationConfig`].
    pub fn population(&self) -> PopulationConfig {
        PopulationConfig {
            num_artists: self.num_artists,
            num_nodes: self.num_nodes,
        }
    }

    /// Check the population sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.population().validate()
    }
}
