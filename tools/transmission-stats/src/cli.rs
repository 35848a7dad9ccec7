//! Command-line surface. Flag spellings match the analysis scripts that
//! already call this tool, underscores included.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::BinningConfig;

#[derive(Debug, Parser)]
#[command(
  name = "transmission-stats",
  about = "Count transmission events over sliding time windows, stratified by a grouping column"
)]
pub struct Cli {
  /// Path to the transmission file, as output from the epidemic model
  #[arg(long = "df_trans")]
  pub df_trans: PathBuf,

  /// Name of the column within which to group individuals
  #[arg(long = "grouping_var")]
  pub grouping_var: String,

  /// Path to the output CSV file to be written
  #[arg(long = "output_csv")]
  pub output_csv: String,

  /// Lower and upper limits of the time range of interest
  #[arg(long, num_args = 2, default_values_t = [0, 100])]
  pub limits: Vec<i64>,

  /// Window over which to count transmission events
  #[arg(long, default_value_t = 5)]
  pub window: i64,

  /// Step of the lower edge of the window within the limits
  #[arg(long, default_value_t = 5)]
  pub step: i64,

  /// Also write a wide (pivot) table next to the long output
  #[arg(long = "write_pivot", action = ArgAction::SetTrue)]
  pub write_pivot: bool,

  /// Write a long-format table (always on; the flag is accepted for
  /// compatibility with existing pipelines and cannot turn it off)
  #[arg(long = "write_long", action = ArgAction::SetTrue, default_value_t = true)]
  pub write_long: bool,

  /// Increase log verbosity (-v info, -vv debug)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  /// Binning parameters from the parsed flags. `limits` has exactly two
  /// values by construction.
  pub fn binning_config(&self) -> BinningConfig {
    BinningConfig {
      start: self.limits[0],
      stop: self.limits[1],
      window: self.window,
      step: self.step,
    }
  }
}
