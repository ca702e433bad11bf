//! Finds the minimal clue pattern of a puzzle, along with every partial
//! automorphism that produces it.
//!
//! The search works one target row at a time.  It starts from the rows (of
//! either orientation) that can reach the best possible top row, then keeps
//! only the candidates whose next row ties for the smallest mask.  Column
//! permutations are tracked as per-stack sets rather than enumerated, so the
//! number of candidates stays small until the very end.

mod candidate;
mod expand;
mod seed;

pub use candidate::*;

use log::debug;

use crate::pattern::PatternPair;

/// The outcome of a pattern search.
#[derive(Clone, Debug)]
pub struct PatternSearch {
  /// The minimal row masks, top row first.
  pub rows: [u16; 9],
  /// The complete candidates that produce `rows`.
  pub candidates: Vec<Candidate>,
}

impl PatternSearch {
  /// Searches for a puzzle's minimal pattern.
  pub fn run(pair: &PatternPair) -> Self {
    let (top, seeds) = seed::seed(pair);
    debug!("{} givens, {} seeds, top row {:09b}", pair.givens(), seeds.len(), top);
    let mut rows = [0; 9];
    rows[0] = top;
    let candidates = expand::expand_rows(pair, seeds, &mut rows);
    debug!("{} candidates survive", candidates.len());
    PatternSearch { rows, candidates }
  }

  /// Tells whether the minimal pattern has a given at a target row and
  /// column.
  pub fn is_given(&self, row: usize, col: usize) -> bool {
    self.rows[row] >> (8 - col) & 1 != 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn search(s: &str) -> PatternSearch {
    PatternSearch::run(&PatternPair::new(&s.parse().unwrap()))
  }

  #[test]
  fn keeps_the_given_count() {
    let s = "..3.....2...7.1...6.......48..4.5......2....9..1.6.7...5.......3...8.....4.9...1.";
    let search = search(s);
    let count: u32 = search.rows.iter().map(|row| row.count_ones()).sum();
    assert_eq!(count, 20);
    assert_eq!(search.candidates.len(), 1);
    assert!(search.candidates[0].is_complete());
  }

  #[test]
  fn empty_rows_come_first() {
    let search = search(&("5".to_string() + &".".repeat(80)));
    assert_eq!(search.rows, [0, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert!(search.is_given(8, 8));
    assert!(!search.is_given(8, 7));
    assert!(!search.is_given(0, 0));
  }

  #[test]
  fn empty_grid() {
    let search = search(&".".repeat(81));
    assert_eq!(search.rows, [0; 9]);
    // Every band-preserving row order ties, in both orientations and under
    // every stack permutation.
    assert_eq!(search.candidates.len(), 2 * 6 * 1296);
  }

  #[test]
  fn orientations_tie_for_symmetric_patterns() {
    let corners = "1.......2".to_string() + &".".repeat(63) + "3.......4";
    let search = search(&corners);
    assert!(search.candidates.iter().any(|c| c.transposed));
    assert!(search.candidates.iter().any(|c| !c.transposed));
  }
}
