//! The stepping engine.
//!
//! [`Simulation`] owns the population, the ledger, and the random
//! source for the lifetime of a run. Each [`step()`](Simulation::step):
//!
//! 1. shows observers a read-only view of the population,
//! 2. draws a fresh permutation of every agent (artists and nodes
//!    together),
//! 3. activates each agent exactly once in that order.
//!
//! Artist submissions and node countdowns interleave according to the
//! permutation, so within one tick an artist may see a node before or
//! after that node releases its job. That ordering sensitivity is part
//! of the model.
//!
//! Execution is single-threaded and every operation runs to completion
//! before the next begins; `&mut self` on `step()` is the only
//! synchronisation the ledger and node occupancy need.

use rendernet_core::{ArtistId, ConfigError, NodeId, TickId};
use tracing::{debug, info, trace};

use crate::agent::{AgentSlot, Artist, Node, SubmitOutcome};
use crate::config::SimConfig;
use crate::ledger::JobLedger;
use crate::metrics::{CompletionCollector, Observer, PopulationView};
use crate::population::Population;
use crate::rng::{RandomSource, SeededRandom};

// ── Reports ─────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that just ran.
    pub tick: TickId,
    /// Artists whose job was accepted and recorded.
    pub assigned: usize,
    /// Artists that claimed a node whose second availability draw failed.
    pub missed: usize,
    /// Pending artists that found no available node.
    pub waiting: usize,
    /// Nodes that finished a job and went idle.
    pub released: usize,
}

/// Totals after [`Simulation::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed by this call.
    pub ticks: u64,
    /// Ledger length at the end of the run.
    pub jobs: usize,
    /// Artists with the completion flag set.
    pub completed_artists: usize,
    /// Sum of recorded job costs.
    pub total_cost: u64,
}

impl RunSummary {
    /// Completed artists without a ledger record.
    pub fn missed_claims(&self) -> usize {
        self.completed_artists.saturating_sub(self.jobs)
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// Discrete-tick marketplace simulation.
///
/// # Example
///
/// ```
/// use rendernet_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::from_config(&SimConfig {
///     num_artists: 10,
///     num_nodes: 3,
///     seed: 42,
/// })
/// .unwrap();
/// let summary = sim.run(20);
/// assert_eq!(summary.ticks, 20);
/// assert!(summary.jobs <= summary.completed_artists);
/// assert!(summary.completed_artists <= 10);
/// ```
pub struct Simulation<R: RandomSource = SeededRandom> {
    population: Population,
    ledger: JobLedger,
    rng: R,
    order: Vec<usize>,
    tick: TickId,
    collector: CompletionCollector,
    observers: Vec<Box<dyn Observer>>,
}

impl Simulation<SeededRandom> {
    /// Generate a population from `config.seed` and build a simulation
    /// that keeps drawing from the same stream.
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        let mut rng = SeededRandom::new(config.seed);
        let population = Population::generate(&config.population(), &mut rng)?;
        info!(
            artists = population.artist_count(),
            nodes = population.node_count(),
            seed = config.seed,
            "generated population"
        );
        Ok(Self::new(population, rng))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Build a simulation over an existing population.
    pub fn new(population: Population, rng: R) -> Self {
        let agents = population.artist_count() + population.node_count();
        Self {
            population,
            ledger: JobLedger::new(),
            rng,
            order: Vec::with_capacity(agents),
            tick: TickId::default(),
            collector: CompletionCollector::new(),
            observers: Vec::new(),
        }
    }

    /// Register an extra observer, called after the built-in collector.
    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Builder-style [`add_observer`](Self::add_observer).
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Execute one tick.
    pub fn step(&mut self) -> TickReport {
        let tick = self.tick.next();

        let view = PopulationView::new(&self.population, &self.ledger);
        self.collector.observe(tick, &view);
        for observer in &mut self.observers {
            observer.observe(tick, &view);
        }

        let artists = self.population.artist_count();
        let mut order = std::mem::take(&mut self.order);
        order.clear();
        order.extend(0..artists + self.population.node_count());
        self.rng.shuffle(&mut order);

        let mut report = TickReport {
            tick,
            ..TickReport::default()
        };
        for &position in &order {
            match slot_at(position, artists) {
                AgentSlot::Artist(i) => {
                    let Some((_, artist)) = self.population.artists.get_index_mut(i) else {
                        continue;
                    };
                    let outcome =
                        artist.submit(&mut self.population.nodes, &mut self.ledger, &mut self.rng);
                    record_submission(&mut report, artist.id(), outcome);
                }
                AgentSlot::Node(i) => {
                    let Some((_, node)) = self.population.nodes.get_index_mut(i) else {
                        continue;
                    };
                    if let Some(artist) = node.advance() {
                        report.released += 1;
                        trace!(tick = tick.0, node = node.id().0, artist = artist.0, "job finished");
                    }
                }
            }
        }
        self.order = order;
        self.tick = tick;

        trace!(
            tick = tick.0,
            assigned = report.assigned,
            missed = report.missed,
            waiting = report.waiting,
            released = report.released,
            "tick complete"
        );
        report
    }

    /// Execute exactly `ticks` steps in sequence.
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        for _ in 0..ticks {
            self.step();
        }
        let summary = RunSummary {
            ticks,
            jobs: self.ledger.len(),
            completed_artists: self.population.completed_artists(),
            total_cost: self.ledger.total_cost(),
        };
        info!(
            ticks,
            current_tick = self.tick.0,
            jobs = summary.jobs,
            completed_artists = summary.completed_artists,
            missed_claims = summary.missed_claims(),
            total_cost = summary.total_cost,
            "run complete"
        );
        summary
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Every job recorded so far.
    pub fn ledger(&self) -> &JobLedger {
        &self.ledger
    }

    /// The agent population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Look up an artist.
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.population.artist(id)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.population.node(id)
    }

    /// Artists whose completion flag is set.
    pub fn completed_artists(&self) -> usize {
        self.population.completed_artists()
    }

    /// Nodes currently serving a job.
    pub fn busy_nodes(&self) -> usize {
        self.population.busy_nodes()
    }

    /// The built-in per-tick collector.
    pub fn metrics(&self) -> &CompletionCollector {
        &self.collector
    }

    /// The random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RandomSource> std::fmt::Debug for Simulation<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("current_tick", &self.tick)
            .field("artists", &self.population.artist_count())
            .field("nodes", &self.population.node_count())
            .field("jobs", &self.ledger.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Artists occupy positions `0..artists`, nodes the rest.
fn slot_at(position: usize, artists: usize) -> AgentSlot {
    if position < artists {
        AgentSlot::Artist(position)
    } else {
        AgentSlot::Node(position - artists)
    }
}

fn record_submission(report: &mut TickReport, artist: ArtistId, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::AlreadyDone => {}
        SubmitOutcome::NoCandidates => report.waiting += 1,
        SubmitOutcome::Assigned { node, job } => {
            report.assigned += 1;
            debug!(
                tick = report.tick.0,
                job = job.0,
                artist = artist.0,
                node = node.0,
                "job assigned"
            );
        }
        SubmitOutcome::Missed { node } => {
            report.missed += 1;
            debug!(
                tick = report.tick.0,
                artist = artist.0,
                node = node.0,
                "claimed node failed re-check; no job recorded"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendernet_core::{PricingTier, ProjectSize, Urgency};

    fn single_pair(availability: f64) -> Population {
        Population::new(
            vec![Artist::new(ArtistId(1), ProjectSize::Small, Urgency::Low)],
            vec![Node::new(NodeId(2), PricingTier::Low, 100, availability)],
        )
        .unwrap()
    }

    #[test]
    fn slots_split_artists_then_nodes() {
        assert_eq!(slot_at(0, 2), AgentSlot::Artist(0));
        assert_eq!(slot_at(1, 2), AgentSlot::Artist(1));
        assert_eq!(slot_at(2, 2), AgentSlot::Node(0));
        assert_eq!(slot_at(0, 0), AgentSlot::Node(0));
    }

    #[test]
    fn step_advances_tick_and_samples_first() {
        let mut sim = Simulation::new(single_pair(1.0), SeededRandom::new(1));
        assert_eq!(sim.current_tick(), TickId(0));
        let report = sim.step();
        assert_eq!(report.tick, TickId(1));
        assert_eq!(sim.current_tick(), TickId(1));
        // The sample is taken before activation.
        let sample = sim.metrics().latest().copied().unwrap();
        assert_eq!(sample.tick, TickId(1));
        assert_eq!(sample.jobs_completed, 0);
        assert_eq!(report.assigned, 1);
    }

    #[test]
    fn run_executes_exactly_n_ticks() {
        let mut sim = Simulation::new(single_pair(1.0), SeededRandom::new(3));
        let summary = sim.run(7);
        assert_eq!(summary.ticks, 7);
        assert_eq!(sim.current_tick(), TickId(7));
        assert_eq!(sim.metrics().samples().len(), 7);
        assert_eq!(summary.jobs, 1);
        assert_eq!(summary.total_cost, 10);
        assert_eq!(summary.missed_claims(), 0);
    }

    #[test]
    fn run_zero_ticks_is_a_no_op() {
        let mut sim = Simulation::new(single_pair(1.0), SeededRandom::new(3));
        let summary = sim.run(0);
        assert_eq!(summary.ticks, 0);
        assert_eq!(sim.current_tick(), TickId(0));
        assert!(sim.ledger().is_empty());
    }

    #[test]
    fn from_config_rejects_zero_artists() {
        let err = Simulation::from_config(&SimConfig {
            num_artists: 0,
            num_nodes: 5,
            seed: 1,
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::NoArtists);
    }

    #[test]
    fn debug_output_summarises_state() {
        let sim = Simulation::new(single_pair(1.0), SeededRandom::new(3));
        let text = format!("{sim:?}");
        assert!(text.contains("current_tick"));
        assert!(text.contains("jobs: 0"));
    }
}
