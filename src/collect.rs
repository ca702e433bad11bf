//! Chooses the canonical labels for a minimal pattern, and collects every
//! mapping that produces them.

use std::cmp::Ordering::*;
use std::collections::BTreeSet;

use itertools::iproduct;
use log::debug;

use crate::core::*;
use crate::mapping::MappingRecord;
use crate::pattern::PatternPair;
use crate::search::{Candidate, PatternSearch};
use crate::tables::{perms_in, PERMS};

/// Larger than any label, so that the first complete labeling always wins.
const UNSET: u8 = 32;

/// Tries every column order the surviving candidates allow, keeping the
/// smallest labeling and the mappings that reach it.
pub struct LabelSearch {
  /// What each cell is reset to when an earlier cell improves: `UNSET` where
  /// the pattern has a given, 0 elsewhere.
  baseline: [u8; 81],
  /// The best labeling found so far, in row-major order.
  best: [u8; 81],
  mappings: BTreeSet<MappingRecord>,
}

impl LabelSearch {
  /// Runs the label phase over a completed pattern search.  A puzzle with no
  /// givens has nothing to label, and yields no mappings.
  pub fn run(pair: &PatternPair, search: &PatternSearch) -> Self {
    let mut baseline = [0; 81];
    for (cell, label) in baseline.iter_mut().enumerate() {
      if search.is_given(cell / 9, cell % 9) {
        *label = UNSET;
      }
    }
    let mut labels = LabelSearch {
      baseline,
      best: baseline,
      mappings: BTreeSet::new(),
    };
    if pair.givens() > 0 {
      for candidate in &search.candidates {
        labels.try_candidate(pair, candidate);
      }
    }
    debug!("{} distinct mappings", labels.mappings.len());
    labels
  }

  /// The canonical grid: the best labeling found.
  pub fn grid(&self) -> Grid {
    let mut grid = Grid::new();
    for cell in Cell::all() {
      grid[cell] = Num::new(self.best[cell.index()]);
    }
    grid
  }

  /// The distinct mappings that produce the canonical grid, in order.
  pub fn into_mappings(self) -> Vec<MappingRecord> {
    self.mappings.into_iter().collect()
  }

  /// Expands a candidate's column permission masks into concrete column
  /// orders, and tries each one.
  fn try_candidate(&mut self, pair: &PatternPair, candidate: &Candidate) {
    debug_assert!(candidate.is_complete());
    let from_rows: [usize; 9] =
      std::array::from_fn(|row| candidate.rows.source_of(row).unwrap_or_default());
    // The first source column of the stack that lands in each target stack.
    let mut bases = [0; 3];
    for (stack, &to) in PERMS[candidate.stacks].iter().enumerate() {
      bases[to] = 3 * stack;
    }
    let [m0, m1, m2] = candidate.col_perms;
    for (p0, p1, p2) in iproduct!(perms_in(m0), perms_in(m1), perms_in(m2)) {
      let mut from_cols = [0; 9];
      for (stack, perm) in [p0, p1, p2].into_iter().enumerate() {
        for (k, &to) in PERMS[perm].iter().enumerate() {
          from_cols[3 * stack + to] = bases[stack] + k;
        }
      }
      self.try_order(pair, candidate.transposed, &from_rows, &from_cols);
    }
  }

  /// Labels the numerals of one complete automorphism in reading order,
  /// abandoning it as soon as it falls behind the best labeling.
  fn try_order(
    &mut self,
    pair: &PatternPair,
    transposed: bool,
    from_rows: &[usize; 9],
    from_cols: &[usize; 9],
  ) {
    let digits = &pair.get(transposed).digits;
    let mut labels = [0u8; 9];
    let mut next_label = 1;
    let mut matched = 0;
    for (row, &from_row) in from_rows.iter().enumerate() {
      for (col, &from_col) in from_cols.iter().enumerate() {
        let digit = digits[from_row][from_col];
        if digit == 0 {
          continue;
        }
        let label = &mut labels[digit as usize - 1];
        if *label == 0 {
          *label = next_label;
          next_label += 1;
        }
        let cell = row * 9 + col;
        match (*label).cmp(&self.best[cell]) {
          Greater => return,
          Less => {
            self.best[cell + 1..].copy_from_slice(&self.baseline[cell + 1..]);
            self.best[cell] = *label;
            self.mappings.clear();
          }
          Equal => {}
        }
        matched += 1;
        if matched == pair.givens() {
          self.record(transposed, from_rows, from_cols, &labels);
        }
      }
    }
  }

  fn record(
    &mut self,
    transposed: bool,
    from_rows: &[usize; 9],
    from_cols: &[usize; 9],
    labels: &[u8; 9],
  ) {
    let mut cells = [None; 81];
    for (cell, source) in cells.iter_mut().enumerate() {
      if self.baseline[cell] != 0 {
        let (row, col) = (cell / 9, cell % 9);
        *source = Some(PatternPair::source_cell(transposed, from_rows[row], from_cols[col]));
      }
    }
    self.mappings.insert(MappingRecord::new(cells, labels.map(Num::new)));
  }
}
