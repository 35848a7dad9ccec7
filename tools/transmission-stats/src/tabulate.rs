//! Aggregation: (bin, group value) counts as a zero-filled pivot table.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{AnnotatedTransmission, PivotRow, PivotTable};

/// Tabulate assigned events into a wide count table.
///
/// Columns are the group values observed anywhere in the input (sorted), so
/// a value seen only on unassigned rows still gets an all-zero column. Rows
/// are the bins that received at least one event, in bin order. The long
/// format is a reshape of this table ([`PivotTable::long_rows`]), which is
/// where its zero fill comes from.
pub fn pivot(annotated: &[AnnotatedTransmission]) -> PivotTable {
  let group_values: Vec<String> = annotated
    .iter()
    .map(|a| a.group.clone())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect();

  let column: HashMap<&str, usize> = group_values
    .iter()
    .enumerate()
    .map(|(i, g)| (g.as_str(), i))
    .collect();

  let mut rows: BTreeMap<usize, PivotRow> = BTreeMap::new();
  for event in annotated {
    let Some(assignment) = &event.assignment else {
      continue;
    };
    let row = rows.entry(assignment.bin_index).or_insert_with(|| PivotRow {
      bin: assignment.clone(),
      counts: vec![0; group_values.len()],
    });
    let col = column[event.group.as_str()];
    row.counts[col] += 1;
  }

  PivotTable {
    group_values,
    rows: rows.into_values().collect(),
  }
}
