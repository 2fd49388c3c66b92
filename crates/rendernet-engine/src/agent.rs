//! The two participant kinds and their per-tick behaviour.
//!
//! - [`Node`] cycles `Idle -> Busy(remaining) -> Idle` forever. Its
//!   availability check is a fresh probabilistic draw on every call.
//! - [`Artist`] moves `Pending -> Done` exactly once, on the first tick
//!   it finds any available node.
//!
//! Neither kind holds a reference to the ledger or to other agents;
//! the engine lends them what a step needs.
//!
//! # Double-draw availability
//!
//! An artist checks availability while building its candidate set, and
//! the chosen node checks again inside [`Node::try_assign`]. The second
//! draw can fail, in which case the artist is still marked done but no
//! job record exists. This is reported as [`SubmitOutcome::Missed`] and
//! kept as part of the model.

use indexmap::IndexMap;
use rendernet_core::{
    AllocationPolicy, ArtistId, JobId, NodeId, PricingTier, ProjectSize, Urgency,
};
use smallvec::SmallVec;

use crate::ledger::JobLedger;
use crate::rng::RandomSource;

/// One schedulable agent, addressed by its position in the population.
///
/// The engine shuffles a list of slots every tick and dispatches each
/// to the matching per-kind behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentSlot {
    /// Index into the population's artists.
    Artist(usize),
    /// Index into the population's nodes.
    Node(usize),
}

// ── Node ────────────────────────────────────────────────────────

/// Result of [`Node::try_assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The node accepted the job and the ledger recorded it.
    Assigned(JobId),
    /// The node was busy or failed its availability draw. Nothing changed.
    Unavailable,
}

/// A compute resource serving at most one job at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    tier: PricingTier,
    bandwidth: u32,
    availability: f64,
    occupant: Option<ArtistId>,
    remaining: f64,
}

impl Node {
    /// Create an idle node. Validation happens in
    /// [`Population::new`](crate::Population::new).
    pub fn new(id: NodeId, tier: PricingTier, bandwidth: u32, availability: f64) -> Self {
        Self {
            id,
            tier,
            bandwidth,
            availability,
            occupant: None,
            remaining: 0.0,
        }
    }

    /// Node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Pricing tier.
    pub fn tier(&self) -> PricingTier {
        self.tier
    }

    /// Capacity units; higher finishes jobs sooner.
    pub fn bandwidth(&self) -> u32 {
        self.bandwidth
    }

    /// Static probability that a liveness draw succeeds.
    pub fn availability(&self) -> f64 {
        self.availability
    }

    /// The artist currently being served, if any.
    pub fn occupant(&self) -> Option<ArtistId> {
        self.occupant
    }

    /// Ticks until the current job finishes (0 when idle).
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Whether the node has no occupant.
    pub fn is_idle(&self) -> bool {
        self.occupant.is_none()
    }

    /// Idle and a fresh draw succeeds against the availability
    /// probability.
    ///
    /// Not idempotent: each call on an idle node consumes one draw and
    /// may answer differently. Busy nodes answer `false` without drawing.
    pub fn is_available<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        self.is_idle() && rng.uniform() < self.availability
    }

    /// Re-check availability and, on success, take the artist's job.
    ///
    /// On success the node becomes busy for the quoted duration and a
    /// record is appended to `ledger`. On failure nothing changes.
    pub fn try_assign<R: RandomSource + ?Sized>(
        &mut self,
        artist: &Artist,
        ledger: &mut JobLedger,
        rng: &mut R,
    ) -> AssignOutcome {
        if !self.is_available(rng) {
            return AssignOutcome::Unavailable;
        }
        let quote = AllocationPolicy::quote(artist.project_size(), self.tier, self.bandwidth);
        self.occupant = Some(artist.id());
        self.remaining = quote.duration;
        let job = ledger.append(artist.id(), self.id, quote.duration, quote.cost);
        AssignOutcome::Assigned(job)
    }

    /// Advance the current job by one tick.
    ///
    /// Returns the artist whose job finished on this call, if any.
    /// Idle nodes are unaffected.
    pub fn advance(&mut self) -> Option<ArtistId> {
        if self.is_idle() {
            return None;
        }
        self.remaining -= 1.0;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return self.occupant.take();
        }
        None
    }
}

// ── Artist ──────────────────────────────────────────────────────

/// Result of one [`Artist::submit`] activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The artist had already finished; nothing was drawn.
    AlreadyDone,
    /// No node passed its availability draw; the artist stays pending.
    NoCandidates,
    /// The chosen node accepted the job.
    Assigned {
        /// The accepting node.
        node: NodeId,
        /// The ledger record created.
        job: JobId,
    },
    /// The chosen node failed its second draw. The artist is done but
    /// no job record exists.
    Missed {
        /// The node that was picked.
        node: NodeId,
    },
}

/// A job-submitting participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artist {
    id: ArtistId,
    project_size: ProjectSize,
    urgency: Urgency,
    done: bool,
}

impl Artist {
    /// Create a pending artist.
    pub fn new(id: ArtistId, project_size: ProjectSize, urgency: Urgency) -> Self {
        Self {
            id,
            project_size,
            urgency,
            done: false,
        }
    }

    /// Artist ID.
    pub fn id(&self) -> ArtistId {
        self.id
    }

    /// Size of the project to render.
    pub fn project_size(&self) -> ProjectSize {
        self.project_size
    }

    /// Urgency (not used by the allocation rule).
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Whether the artist has claimed a node. Never reverts to `false`.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// One activation: scan `nodes`, pick an available one, and try to
    /// place the job there.
    ///
    /// The candidate set takes one availability draw per node, in
    /// population order. Any pick ends the artist's search, whether or
    /// not the chosen node accepts.
    pub fn submit<R: RandomSource + ?Sized>(
        &mut self,
        nodes: &mut IndexMap<NodeId, Node>,
        ledger: &mut JobLedger,
        rng: &mut R,
    ) -> SubmitOutcome {
        if self.done {
            return SubmitOutcome::AlreadyDone;
        }

        let candidates: SmallVec<[usize; 16]> = nodes
            .values()
            .enumerate()
            .filter(|(_, node)| node.is_available(rng))
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return SubmitOutcome::NoCandidates;
        }

        let pick = candidates[rng.choose_index(candidates.len())];
        let Some((_, node)) = nodes.get_index_mut(pick) else {
            return SubmitOutcome::NoCandidates;
        };
        let outcome = match node.try_assign(self, ledger, rng) {
            AssignOutcome::Assigned(job) => SubmitOutcome::Assigned { node: node.id(), job },
            AssignOutcome::Unavailable => SubmitOutcome::Missed { node: node.id() },
        };
        self.done = true;
        outcome
    }
}
