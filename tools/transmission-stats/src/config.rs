//! Binning parameters with the CLI's defaults.

use crate::error::StatsError;

/// Time-window parameters for one run.
#[derive(Debug, Clone)]
pub struct BinningConfig {
  /// Lower limit of the time range of interest.
  pub start: i64,
  /// Upper limit of the time range of interest (inclusive at the pipeline
  /// level: events at exactly `stop` still land in a window).
  pub stop: i64,
  /// Width of each counting window.
  pub window: i64,
  /// Stride between successive lower edges. Equal to `window` for
  /// non-overlapping bins; smaller values make bins overlap.
  pub step: i64,
}

impl Default for BinningConfig {
  fn default() -> Self {
    Self {
      start: 0,
      stop: 100,
      window: 5,
      step: 5,
    }
  }
}

impl BinningConfig {
  /// Reject parameters the generator cannot advance on. A negative step is
  /// allowed and produces no bins; a zero step never advances the lower
  /// edge.
  pub fn validate(&self) -> Result<(), StatsError> {
    if self.step == 0 {
      return Err(StatsError::config("step must be nonzero"));
    }
    Ok(())
  }
}
