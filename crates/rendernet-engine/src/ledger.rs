//! Append-only record of every successful assignment.

use rendernet_core::{ArtistId, JobId, JobRecord, NodeId};

/// Ordered, append-only sequence of [`JobRecord`]s.
///
/// The next job ID is `len + 1`, computed at the moment a record is
/// appended. Stepping is single-threaded, so no two appends can race
/// for the same ID.
///
/// Records can only be written by a successful assignment:
///
/// ```compile_fail
/// use rendernet_core::{ArtistId, NodeId};
/// let mut ledger = rendernet_engine::JobLedger::new();
/// ledger.append(ArtistId(1), NodeId(2), 1.0, 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobLedger {
    records: Vec<JobRecord>,
}

impl JobLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID the next appended record will receive.
    pub fn next_id(&self) -> JobId {
        JobId(self.records.len() as u64 + 1)
    }

    /// Append a record and return its ID. Only [`Node::try_assign`]
    /// writes to the ledger.
    ///
    /// [`Node::try_assign`]: crate::Node::try_assign
    pub(crate) fn append(
        &mut self,
        artist: ArtistId,
        node: NodeId,
        duration: f64,
        cost: u32,
    ) -> JobId {
        let id = self.next_id();
        self.records.push(JobRecord {
            id,
            artist,
            node,
            duration,
            cost,
        });
        id
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no job has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by ID.
    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        let index = id.0.checked_sub(1)?;
        self.records.get(usize::try_from(index).ok()?)
    }

    /// Records in append order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Iterate records in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.records.iter()
    }

    /// Sum of all recorded costs.
    pub fn total_cost(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.cost)).sum()
    }
}

impl<'a> IntoIterator for &'a JobLedger {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut ledger = JobLedger::new();
        assert_eq!(ledger.next_id(), JobId(1));
        let a = ledger.append(ArtistId(1), NodeId(10), 1.0, 10);
        let b = ledger.append(ArtistId(2), NodeId(11), 2.5, 40);
        assert_eq!((a, b), (JobId(1), JobId(2)));
        assert_eq!(ledger.next_id(), JobId(3));
        let ids: Vec<u64> = ledger.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn get_by_id() {
        let mut ledger = JobLedger::new();
        ledger.append(ArtistId(5), NodeId(8), 3.0, 60);
        assert_eq!(ledger.get(JobId(1)).map(|r| r.artist), Some(ArtistId(5)));
        assert!(ledger.get(JobId(0)).is_none());
        assert!(ledger.get(JobId(2)).is_none());
    }

    #[test]
    fn total_cost_sums_records() {
        let mut ledger = JobLedger::new();
        assert_eq!(ledger.total_cost(), 0);
        ledger.append(ArtistId(1), NodeId(3), 1.0, 10);
        ledger.append(ArtistId(2), NodeId(4), 1.0, 90);
        assert_eq!(ledger.total_cost(), 100);
        assert_eq!((&ledger).into_iter().count(), 2);
    }
}
