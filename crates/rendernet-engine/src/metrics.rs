//! Read-only per-tick observation of the population.
//!
//! Observers run once per tick, before any agent is activated, and see
//! the population and ledger through shared references only. They
//! cannot influence scheduling.

use rendernet_core::{ArtistId, TickId};

use crate::agent::{Artist, Node};
use crate::ledger::JobLedger;
use crate::population::Population;

/// Immutable view of simulation state handed to observers.
#[derive(Clone, Copy, Debug)]
pub struct PopulationView<'a> {
    population: &'a Population,
    ledger: &'a JobLedger,
}

impl<'a> PopulationView<'a> {
    pub(crate) fn new(population: &'a Population, ledger: &'a JobLedger) -> Self {
        Self { population, ledger }
    }

    /// Artists in construction order.
    pub fn artists(&self) -> impl ExactSizeIterator<Item = &'a Artist> + 'a {
        self.population.artists.values()
    }

    /// Nodes in construction order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &'a Node> + 'a {
        self.population.nodes.values()
    }

    /// The job ledger so far.
    pub fn ledger(&self) -> &'a JobLedger {
        self.ledger
    }

    /// Number of artists whose completion flag is set.
    pub fn completed_artists(&self) -> usize {
        self.population.completed_artists()
    }

    /// Number of nodes serving a job.
    pub fn busy_nodes(&self) -> usize {
        self.population.busy_nodes()
    }
}

/// Receives a view of the population at the start of every tick.
pub trait Observer {
    /// Called once per tick, before activation. `tick` is the tick
    /// about to run (the first call sees `TickId(1)`).
    fn observe(&mut self, tick: TickId, view: &PopulationView<'_>);
}

/// Aggregate counts taken at the start of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionSample {
    /// The tick about to run.
    pub tick: TickId,
    /// Artists with the completion flag set.
    pub jobs_completed: usize,
    /// Nodes serving a job.
    pub busy_nodes: usize,
    /// Ledger length.
    pub ledger_len: usize,
}

/// Default observer: per-tick completion counts plus per-artist flags
/// from the most recent tick.
#[derive(Clone, Debug, Default)]
pub struct CompletionCollector {
    samples: Vec<CompletionSample>,
    latest: Vec<(ArtistId, bool)>,
}

impl CompletionCollector {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// One sample per observed tick, oldest first.
    pub fn samples(&self) -> &[CompletionSample] {
        &self.samples
    }

    /// The most recent sample.
    pub fn latest(&self) -> Option<&CompletionSample> {
        self.samples.last()
    }

    /// Per-artist completion flags at the most recent sample.
    pub fn agent_completions(&self) -> &[(ArtistId, bool)] {
        &self.latest
    }
}

impl Observer for CompletionCollector {
    fn observe(&mut self, tick: TickId, view: &PopulationView<'_>) {
        self.latest.clear();
        self.latest
            .extend(view.artists().map(|a| (a.id(), a.is_done())));
        let jobs_completed = self.latest.iter().filter(|(_, done)| *done).count();
        self.samples.push(CompletionSample {
            tick,
            jobs_completed,
            busy_nodes: view.busy_nodes(),
            ledger_len: view.ledger().len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;
    use rendernet_core::{NodeId, PricingTier, ProjectSize, Urgency};

    #[test]
    fn collector_records_one_sample_per_observation() {
        let artists = vec![
            Artist::new(ArtistId(1), ProjectSize::Small, Urgency::Low),
            Artist::new(ArtistId(2), ProjectSize::Large, Urgency::High),
        ];
        let nodes = vec![Node::new(NodeId(3), PricingTier::Low, 100, 1.0)];
        let mut pop = Population::new(artists, nodes).unwrap();
        let mut ledger = JobLedger::new();
        let mut collector = CompletionCollector::new();

        collector.observe(TickId(1), &PopulationView::new(&pop, &ledger));

        let mut rng = SeededRandom::new(1);
        let artist = pop.artists.get_index_mut(0).map(|(_, a)| a).unwrap();
        artist.submit(&mut pop.nodes, &mut ledger, &mut rng);
        collector.observe(TickId(2), &PopulationView::new(&pop, &ledger));

        let samples = collector.samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].jobs_completed, 0);
        assert_eq!(samples[0].ledger_len, 0);
        assert_eq!(samples[1].tick, TickId(2));
        assert_eq!(samples[1].jobs_completed, 1);
        assert_eq!(samples[1].busy_nodes, samples[1].ledger_len);
        assert_eq!(
            collector.agent_completions(),
            &[(ArtistId(1), true), (ArtistId(2), false)]
        );
    }
}
