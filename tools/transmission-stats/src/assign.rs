//! Event-to-bin assignment.

use tracing::debug;

use crate::types::{AnnotatedTransmission, Bin, BinAssignment, Transmission};

/// Label each transmission with the bin containing its infection time.
///
/// Bins are scanned in generation order and every match overwrites the
/// previous one, so when bins overlap an event keeps its *last* matching
/// bin. Events with no match (missing or NaN time, or a time outside every
/// bin) stay unassigned.
pub fn annotate(records: &[Transmission], bins: &[Bin]) -> Vec<AnnotatedTransmission> {
  let mut assignments: Vec<Option<BinAssignment>> = vec![None; records.len()];

  for bin in bins {
    for (slot, record) in assignments.iter_mut().zip(records) {
      if let Some(t) = record.time_infected {
        if bin.contains(t) {
          *slot = Some(BinAssignment::for_bin(bin));
        }
      }
    }
  }

  let assigned = assignments.iter().filter(|a| a.is_some()).count();
  debug!(
    "assigned {} of {} events across {} bins",
    assigned,
    records.len(),
    bins.len()
  );

  records
    .iter()
    .zip(assignments)
    .map(|(record, assignment)| AnnotatedTransmission {
      group: record.group.clone(),
      assignment,
    })
    .collect()
}
