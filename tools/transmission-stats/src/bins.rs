//! Bin generation: a finite ordered sequence of (possibly overlapping)
//! time windows.

use crate::types::Bin;

/// Generate bins `(lower, lower + window)` for lower edges `start`,
/// `start + step`, ... while `lower <= stop - window`.
///
/// Bins overlap when `step < window`. A nonpositive step or a window wider
/// than `stop - start` yields an empty sequence.
pub fn overlapping_bins(start: i64, stop: i64, window: i64, step: i64) -> Vec<Bin> {
  let mut bins = Vec::new();
  if step <= 0 {
    return bins;
  }
  let mut lower = start;
  while lower <= stop - window {
    bins.push(Bin::new(bins.len(), lower, lower + window));
    lower += step;
  }
  bins
}
