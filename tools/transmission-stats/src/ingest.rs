//! CSV ingestion: read the transmission file once, keeping only the event
//! time and the caller-named grouping column.

use std::path::Path;

use crate::error::StatsError;
use crate::types::{Transmission, TIME_COLUMN};

/// Read a transmission CSV, resolving `time_infected` and `grouping_var`
/// against the header. Other columns are ignored.
///
/// Blank and NA fields become a missing time; anything else must parse as a
/// float (`nan` included) or the run aborts with the offending row.
pub fn read_transmissions(path: &Path, grouping_var: &str) -> Result<Vec<Transmission>, StatsError> {
  let mut reader = csv::Reader::from_path(path)?;

  let headers = reader.headers()?.clone();
  let time_col = headers
    .iter()
    .position(|h| h == TIME_COLUMN)
    .ok_or_else(|| StatsError::missing_column(TIME_COLUMN))?;
  let group_col = headers
    .iter()
    .position(|h| h == grouping_var)
    .ok_or_else(|| StatsError::missing_column(grouping_var))?;

  let mut records = Vec::new();
  for (i, result) in reader.records().enumerate() {
    let record = result?;
    let raw_time = record.get(time_col).unwrap_or("");
    let time_infected = parse_time(raw_time, i + 1)?;
    let group = record.get(group_col).unwrap_or("").to_string();
    records.push(Transmission {
      time_infected,
      group,
    });
  }
  Ok(records)
}

fn parse_time(raw: &str, row: usize) -> Result<Option<f64>, StatsError> {
  let trimmed = raw.trim();
  // R-style NA markers count as missing, like the source files use.
  if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
    return Ok(None);
  }
  trimmed
    .parse::<f64>()
    .map(Some)
    .map_err(|_| StatsError::InvalidTime {
      row,
      value: raw.to_string(),
    })
}
