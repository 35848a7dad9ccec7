//! CSV output: long and wide (pivot) incidence tables.

use std::path::Path;

use crate::error::StatsError;
use crate::types::PivotTable;

/// Count column of the long-format table.
pub const LONG_COUNT_COLUMN: &str = "incident_infections";

/// Pivot output path: the long-form path with a `pivot_` prefix on the
/// whole argument, so `out/run.csv` becomes `pivot_out/run.csv`.
pub fn pivot_path(output_csv: &str) -> String {
  format!("pivot_{output_csv}")
}

/// Write the long-format table: one row per (bin, group value) with a count.
pub fn write_long(
  path: impl AsRef<Path>,
  table: &PivotTable,
  grouping_var: &str,
) -> Result<(), StatsError> {
  let mut writer = csv::Writer::from_path(path)?;
  writer.write_record(["time_infected_bin", grouping_var, LONG_COUNT_COLUMN])?;
  for row in table.long_rows() {
    let count = row.incident_infections.to_string();
    writer.write_record([row.bin.as_str(), row.group.as_str(), count.as_str()])?;
  }
  writer.flush()?;
  Ok(())
}

/// Write the wide-format table: bin rows (label, index, edges) against one
/// column per group value.
pub fn write_pivot(path: impl AsRef<Path>, table: &PivotTable) -> Result<(), StatsError> {
  let mut writer = csv::Writer::from_path(path)?;

  let mut header = vec![
    "time_infected_bin".to_string(),
    "time_infected_bin_idx".to_string(),
    "lower_bin_edge".to_string(),
    "upper_bin_edge".to_string(),
  ];
  header.extend(table.group_values.iter().cloned());
  writer.write_record(&header)?;

  for row in &table.rows {
    let mut record = vec![
      row.bin.label.clone(),
      row.bin.bin_index.to_string(),
      row.bin.lower.to_string(),
      row.bin.upper.to_string(),
    ];
    record.extend(row.counts.iter().map(|c| c.to_string()));
    writer.write_record(&record)?;
  }
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Bin, BinAssignment, PivotRow};

  fn fixture_table() -> PivotTable {
    PivotTable {
      group_values: vec!["adult".into(), "child".into()],
      rows: vec![
        PivotRow {
          bin: BinAssignment::for_bin(&Bin::new(0, 0, 5)),
          counts: vec![2, 1],
        },
        PivotRow {
          bin: BinAssignment::for_bin(&Bin::new(2, 10, 15)),
          counts: vec![0, 3],
        },
      ],
    }
  }

  #[test]
  fn pivot_path_prefixes_the_whole_argument() {
    assert_eq!(pivot_path("counts.csv"), "pivot_counts.csv");
    assert_eq!(pivot_path("out/run.csv"), "pivot_out/run.csv");
  }

  #[test]
  fn long_output_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("long.csv");
    write_long(&path, &fixture_table(), "age_group_recipient").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
      lines[0],
      "time_infected_bin,age_group_recipient,incident_infections"
    );
    assert_eq!(lines[1], "\"[0, 5)\",adult,2");
    assert_eq!(lines[2], "\"[0, 5)\",child,1");
    assert_eq!(lines[3], "\"[10, 15)\",adult,0");
    assert_eq!(lines[4], "\"[10, 15)\",child,3");
  }

  #[test]
  fn pivot_output_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pivot.csv");
    write_pivot(&path, &fixture_table()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
      lines[0],
      "time_infected_bin,time_infected_bin_idx,lower_bin_edge,upper_bin_edge,adult,child"
    );
    assert_eq!(lines[1], "\"[0, 5)\",0,0,5,2,1");
    assert_eq!(lines[2], "\"[10, 15)\",2,10,15,0,3");
  }

  #[test]
  fn empty_table_writes_headers_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let long = dir.path().join("long.csv");
    let pivot = dir.path().join("pivot.csv");
    let table = PivotTable::default();

    write_long(&long, &table, "grp").unwrap();
    write_pivot(&pivot, &table).unwrap();

    let long_contents = std::fs::read_to_string(&long).unwrap();
    assert_eq!(long_contents.trim_end(), "time_infected_bin,grp,incident_infections");
    let pivot_contents = std::fs::read_to_string(&pivot).unwrap();
    assert_eq!(
      pivot_contents.trim_end(),
      "time_infected_bin,time_infected_bin_idx,lower_bin_edge,upper_bin_edge"
    );
  }
}
