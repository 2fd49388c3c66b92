//! The immutable record of one successful assignment.

use crate::id::{ArtistId, JobId, NodeId};

/// One entry of the job ledger.
///
/// Duration and cost are fixed when the node accepts the job and are
/// never re-derived afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct JobRecord {
    /// Sequential, 1-based job ID.
    pub id: JobId,
    /// Artist that submitted the job.
    pub artist: ArtistId,
    /// Node that accepted it.
    pub node: NodeId,
    /// Completion time in ticks (real-valued).
    pub duration: f64,
    /// Price in currency units.
    pub cost: u32,
}
