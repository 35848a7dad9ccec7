//! Structured error types for the binning tool.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
  #[error("config: {0}")]
  Config(String),

  #[error("column `{0}` not found in input")]
  MissingColumn(String),

  #[error("row {row}: invalid time_infected value `{value}`")]
  InvalidTime { row: usize, value: String },

  #[error("csv: {0}")]
  Csv(#[from] csv::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl StatsError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  pub fn missing_column(name: impl Into<String>) -> Self {
    Self::MissingColumn(name.into())
  }
}
