//! Binary entrypoint: read a transmission CSV, bin by infection time, write
//! incidence counts.

use anyhow::Context;
use clap::Parser;
use tracing::info;

use transmission_stats::cli::Cli;
use transmission_stats::{ingest, output, run};

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let log_level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    _ => tracing::Level::DEBUG,
  };
  tracing_subscriber::fmt()
    .with_max_level(log_level)
    .with_target(false)
    .init();

  let records = ingest::read_transmissions(&cli.df_trans, &cli.grouping_var)
    .with_context(|| format!("reading {}", cli.df_trans.display()))?;
  info!("read {} transmission events", records.len());

  let table = run(&records, &cli.binning_config())?;
  info!(
    "tabulated {} bins x {} group values",
    table.rows.len(),
    table.group_values.len()
  );

  if cli.write_pivot {
    let pivot_csv = output::pivot_path(&cli.output_csv);
    output::write_pivot(&pivot_csv, &table)
      .with_context(|| format!("writing {}", pivot_csv))?;
    info!("wrote pivot table to {}", pivot_csv);
  }
  if cli.write_long {
    output::write_long(&cli.output_csv, &table, &cli.grouping_var)
      .with_context(|| format!("writing {}", cli.output_csv))?;
    info!("wrote long table to {}", cli.output_csv);
  }

  Ok(())
}
