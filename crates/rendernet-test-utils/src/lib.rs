//! Test utilities for RenderNet development.
//!
//! Provides scripted [`RandomSource`] implementations that make the
//! stochastic parts of a run predictable, population fixtures, and
//! invariant checks shared by integration tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use rendernet_engine::RandomSource;

pub use fixtures::{
    assert_ledger_consistent, assert_node_exclusivity, artist, node, population, uniform_nodes,
};

/// A source whose availability draws always succeed.
///
/// `uniform()` returns `0.0`, which is below every valid availability
/// probability. Picks take the first candidate and shuffles keep the
/// identity order (artists before nodes).
#[derive(Clone, Debug, Default)]
pub struct AlwaysAvailable {
    draws: u64,
}

impl AlwaysAvailable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of uniform draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for AlwaysAvailable {
    fn uniform(&mut self) -> f64 {
        self.draws += 1;
        0.0
    }

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }

    fn shuffle(&mut self, _order: &mut [usize]) {}
}

/// Replays scripted draws, picks and activation orders.
///
/// When a script runs dry the source falls back to `fallback_draw`,
/// index 0, and the identity order respectively.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    picks: VecDeque<usize>,
    orders: VecDeque<Vec<usize>>,
    fallback_draw: f64,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self {
            draws: VecDeque::new(),
            picks: VecDeque::new(),
            orders: VecDeque::new(),
            fallback_draw: 0.0,
        }
    }

    /// Queue uniform draws.
    pub fn draws(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.draws.extend(values);
        self
    }

    /// Queue candidate picks (each taken modulo the candidate count).
    pub fn picks(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(values);
        self
    }

    /// Queue an activation order for one tick. The order is a
    /// permutation of agent positions: artists first, then nodes.
    pub fn order(mut self, order: Vec<usize>) -> Self {
        self.orders.push_back(order);
        self
    }

    /// Draw returned once the draw script is exhausted.
    pub fn fallback_draw(mut self, value: f64) -> Self {
        self.fallback_draw = value;
        self
    }

    /// Scripted draws not yet consumed.
    pub fn remaining_draws(&self) -> usize {
        self.draws.len()
    }
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback_draw)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |p| p % len)
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        let Some(script) = self.orders.pop_front() else {
            return;
        };
        assert_eq!(
            script.len(),
            order.len(),
            "scripted order length does not match agent count"
        );
        order.copy_from_slice(&script);
    }
}
