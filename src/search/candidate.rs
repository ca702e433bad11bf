//! Partial automorphisms under construction.

use crate::pattern::PatternPair;
use crate::tables::{permute_stacks, PermMask};

/// A partial one-to-one map from source rows to target rows, kept in both
/// directions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RowMap {
  forward: [Option<u8>; 9],
  backward: [Option<u8>; 9],
}

impl RowMap {
  /// Makes a map with no rows mapped.
  pub const fn new() -> Self {
    RowMap {
      forward: [None; 9],
      backward: [None; 9],
    }
  }

  /// The target row a source row maps to, if any.
  pub fn target_of(&self, from: usize) -> Option<usize> {
    self.forward[from].map(usize::from)
  }

  /// The source row that maps to a target row, if any.
  pub fn source_of(&self, to: usize) -> Option<usize> {
    self.backward[to].map(usize::from)
  }

  /// How many rows are mapped.
  pub fn len(&self) -> usize {
    self.forward.iter().flatten().count()
  }

  /// Tells whether no rows are mapped.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Maps a source row to a target row.  Neither may be mapped already.
  pub fn map(&mut self, from: usize, to: usize) {
    debug_assert!(self.forward[from].is_none(), "row {from} is already mapped");
    debug_assert!(self.backward[to].is_none(), "row {to} is already a target");
    self.forward[from] = Some(to as u8);
    self.backward[to] = Some(from as u8);
  }

  /// Checks that the two directions are inverses of each other.
  pub fn is_consistent(&self) -> bool {
    let forward_ok = (0..9).all(|from| match self.target_of(from) {
      Some(to) => self.source_of(to) == Some(from),
      None => true,
    });
    let backward_ok = (0..9).all(|to| match self.source_of(to) {
      Some(from) => self.target_of(from) == Some(to),
      None => true,
    });
    forward_ok && backward_ok
  }
}

impl Default for RowMap {
  fn default() -> Self {
    Self::new()
  }
}

/// A partially built element of the grid's symmetry group: an orientation, a
/// partial row map, a stack permutation, and the column permutations still
/// allowed within each target stack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Candidate {
  /// Whether the puzzle is read transposed.
  pub transposed: bool,
  /// Which source rows have been placed, and where.
  pub rows: RowMap,
  /// The permutation (an index into `PERMS`) sending source stacks to target
  /// stacks.
  pub stacks: usize,
  /// For each target stack, the column permutations that keep every placed
  /// row minimal.  Later candidates only ever lose permutations.
  pub col_perms: [PermMask; 3],
}

impl Candidate {
  /// Makes a candidate that places a source row at the top.
  pub fn top_row(
    transposed: bool,
    from_row: usize,
    stacks: usize,
    col_perms: [PermMask; 3],
  ) -> Self {
    let mut rows = RowMap::new();
    rows.map(from_row, 0);
    Candidate {
      transposed,
      rows,
      stacks,
      col_perms,
    }
  }

  /// A source row's triplet codes, moved to their target stacks.
  pub fn target_triplets(&self, pair: &PatternPair, from_row: usize) -> [u8; 3] {
    permute_stacks(pair.get(self.transposed).triplets(from_row), self.stacks)
  }

  /// Copies this candidate, placing one more row and narrowing the column
  /// permutations.
  pub fn extended(&self, from_row: usize, to_row: usize, col_perms: [PermMask; 3]) -> Self {
    debug_assert!(
      col_perms
        .iter()
        .zip(self.col_perms.iter())
        .all(|(new, old)| new & !old == 0),
      "column permutations may only narrow"
    );
    let mut next = *self;
    next.rows.map(from_row, to_row);
    next.col_perms = col_perms;
    next
  }

  /// Tells whether every row has been placed.
  pub fn is_complete(&self) -> bool {
    self.rows.len() == 9
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tables::ALL_PERMS;

  #[test]
  fn row_map() {
    let mut map = RowMap::new();
    assert!(map.is_empty());
    map.map(4, 0);
    map.map(3, 1);
    assert_eq!(map.target_of(4), Some(0));
    assert_eq!(map.source_of(1), Some(3));
    assert_eq!(map.target_of(0), None);
    assert_eq!(map.source_of(2), None);
    assert_eq!(map.len(), 2);
    assert!(map.is_consistent());
  }

  #[test]
  fn inconsistent_row_map() {
    let mut map = RowMap::new();
    map.forward[2] = Some(5);
    assert!(!map.is_consistent());
  }

  #[test]
  #[should_panic]
  #[cfg(debug_assertions)]
  fn remapping_panics() {
    let mut map = RowMap::new();
    map.map(1, 0);
    map.map(1, 2);
  }

  #[test]
  fn extending() {
    let top = Candidate::top_row(true, 7, 3, [ALL_PERMS; 3]);
    assert!(top.transposed);
    assert_eq!(top.rows.source_of(0), Some(7));
    let next = top.extended(6, 1, [ALL_PERMS, 0b11, 0b1]);
    assert_eq!(next.rows.source_of(1), Some(6));
    assert_eq!(next.rows.len(), 2);
    assert_eq!(next.col_perms, [ALL_PERMS, 0b11, 0b1]);
    assert_eq!(next.stacks, 3);
    // The parent is untouched.
    assert_eq!(top.rows.len(), 1);
    assert!(!next.is_complete());
  }

  #[test]
  fn target_triplets() {
    let grid = "1..2..3..".to_string() + &".".repeat(72);
    let pair = PatternPair::new(&grid.parse().unwrap());
    // Permutation 3 sends stacks 0, 1, 2 to 1, 2, 0.
    let candidate = Candidate::top_row(false, 0, 3, [ALL_PERMS; 3]);
    assert_eq!(candidate.target_triplets(&pair, 0), [0b100; 3]);
    let grid = "1.....3..".to_string() + &".".repeat(72);
    let pair = PatternPair::new(&grid.parse().unwrap());
    assert_eq!(candidate.target_triplets(&pair, 0), [0b100, 0b100, 0]);
  }
}
