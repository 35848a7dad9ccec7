//! Windowed incidence counts from an epidemic model's transmission file.
//!
//! Assigns each transmission event to a (possibly overlapping) time bin and
//! tabulates counts per bin and grouping-column value. Used by the binary
//! for CSV-to-CSV runs; can also be called as a library.

pub mod assign;
pub mod bins;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod output;
pub mod tabulate;
pub mod types;

pub use config::BinningConfig;
pub use error::StatsError;
pub use types::{PivotTable, Transmission};

/// Run the binning pipeline on parsed records and return the count table
/// (no I/O).
///
/// The stop limit is inclusive at this level: the generator runs one window
/// past it, so events at exactly `stop` still land in a bin.
pub fn run(records: &[Transmission], config: &BinningConfig) -> Result<PivotTable, StatsError> {
  config.validate()?;
  let bins = bins::overlapping_bins(
    config.start,
    config.stop + config.window,
    config.window,
    config.step,
  );
  let annotated = assign::annotate(records, &bins);
  Ok(tabulate::pivot(&annotated))
}
