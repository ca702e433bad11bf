//! Extracts clue patterns from a puzzle, in both orientations.

use crate::core::*;
use crate::tables::split_row;

/// Where the givens of one orientation of a puzzle are, and which numerals
/// they hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CluePattern {
  /// One mask per row, with column 0 in bit 8 and column 8 in bit 0.
  pub rows: [u16; 9],
  /// The numeral at each row and column, 0 for a blank.
  pub digits: [[u8; 9]; 9],
}

impl CluePattern {
  fn new(grid: &Grid) -> Self {
    let mut pattern = CluePattern {
      rows: [0; 9],
      digits: [[0; 9]; 9],
    };
    for (cell, num) in grid.givens() {
      let (row, col) = (cell.row().index(), cell.col().index());
      pattern.rows[row] |= 1 << (8 - col);
      pattern.digits[row][col] = num.get();
    }
    pattern
  }

  /// The 3 triplet codes of a row, stack by stack.
  pub fn triplets(&self, row: usize) -> [u8; 3] {
    split_row(self.rows[row])
  }
}

/// A puzzle's clue patterns as given and as transposed.  Created once per
/// puzzle, and never modified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternPair {
  normal: CluePattern,
  transposed: CluePattern,
  givens: usize,
}

impl PatternPair {
  /// Extracts both orientations' patterns from a puzzle.
  pub fn new(grid: &Grid) -> Self {
    PatternPair {
      normal: CluePattern::new(grid),
      transposed: CluePattern::new(&grid.transposed()),
      givens: grid.len(),
    }
  }

  /// The pattern for the given orientation.
  pub fn get(&self, transposed: bool) -> &CluePattern {
    if transposed {
      &self.transposed
    } else {
      &self.normal
    }
  }

  /// How many givens the puzzle has.
  pub fn givens(&self) -> usize {
    self.givens
  }

  /// Translates a row and column of one orientation's pattern back into a
  /// cell of the original puzzle.
  pub fn source_cell(transposed: bool, row: usize, col: usize) -> Cell {
    let cell = if transposed { col * 9 + row } else { row * 9 + col };
    // Row and column are both in 0..9.
    Cell::from_index(cell).unwrap_or_else(|| unreachable!("cell {cell} out of range"))
  }
}
