//! Core types for the binning pipeline (input rows, bins, count tables).

// ---------------------------------------------------------------------------
// Input rows
// ---------------------------------------------------------------------------

/// Name of the event-time column every transmission file must carry.
pub const TIME_COLUMN: &str = "time_infected";

/// One transmission event, reduced to the fields the pipeline uses.
///
/// `time_infected` is `None` when the field was blank or an NA marker; a
/// `NaN` value is kept as-is and simply never matches a bin.
#[derive(Debug, Clone)]
pub struct Transmission {
  pub time_infected: Option<f64>,
  /// Value of the caller-named grouping column, verbatim.
  pub group: String,
}

// ---------------------------------------------------------------------------
// Bins
// ---------------------------------------------------------------------------

/// A half-open time interval `[lower, upper)`, identified by its position in
/// the generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
  pub index: usize,
  pub lower: i64,
  pub upper: i64,
}

impl Bin {
  pub fn new(index: usize, lower: i64, upper: i64) -> Self {
    Self {
      index,
      lower,
      upper,
    }
  }

  /// Membership test: `lower <= t < upper`. NaN never matches.
  pub fn contains(&self, t: f64) -> bool {
    self.lower as f64 <= t && t < self.upper as f64
  }

  /// Interval label, rendered half-open to match [`Bin::contains`].
  pub fn label(&self) -> String {
    format!("[{}, {})", self.lower, self.upper)
  }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// The bin an event landed in: index, printable label, and both edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinAssignment {
  pub bin_index: usize,
  pub label: String,
  pub lower: i64,
  pub upper: i64,
}

impl BinAssignment {
  pub fn for_bin(bin: &Bin) -> Self {
    Self {
      bin_index: bin.index,
      label: bin.label(),
      lower: bin.lower,
      upper: bin.upper,
    }
  }
}

/// A transmission event annotated with its (possibly absent) bin.
#[derive(Debug, Clone)]
pub struct AnnotatedTransmission {
  pub group: String,
  pub assignment: Option<BinAssignment>,
}

// ---------------------------------------------------------------------------
// Count tables
// ---------------------------------------------------------------------------

/// One pivot row: a bin that received at least one event, with counts
/// parallel to [`PivotTable::group_values`].
#[derive(Debug, Clone)]
pub struct PivotRow {
  pub bin: BinAssignment,
  pub counts: Vec<u64>,
}

impl PivotRow {
  /// Total events assigned to this bin.
  pub fn total(&self) -> u64 {
    self.counts.iter().sum()
  }
}

/// Wide-format count table: bins as rows, group values as columns,
/// zero-filled. Rows are in bin order; columns are sorted.
#[derive(Debug, Clone, Default)]
pub struct PivotTable {
  pub group_values: Vec<String>,
  pub rows: Vec<PivotRow>,
}

/// One long-format row: a (bin, group value) pair with its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
  pub bin: String,
  pub group: String,
  pub incident_infections: u64,
}

impl PivotTable {
  /// Reshape to long format: one row per (bin row, group column), in the
  /// same order the wide table stores them. Unobserved combinations inside
  /// a bin with data come out with count 0.
  pub fn long_rows(&self) -> Vec<LongRow> {
    let mut out = Vec::with_capacity(self.rows.len() * self.group_values.len());
    for row in &self.rows {
      for (group, &count) in self.group_values.iter().zip(&row.counts) {
        out.push(LongRow {
          bin: row.bin.label.clone(),
          group: group.clone(),
          incident_infections: count,
        });
      }
    }
    out
  }
}
