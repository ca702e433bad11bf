//! Sorts puzzles into orbits: classes of puzzles that are equivalent under the
//! grid's symmetries.

use std::collections::HashMap;

use log::debug;

use crate::core::Grid;
use crate::minlex::MinLex;

/// Tells whether two puzzles are isomorphic.
pub fn same_orbit(a: &Grid, b: &Grid) -> bool {
  a.len() == b.len() && MinLex::of(a).grid() == MinLex::of(b).grid()
}

/// Partitions puzzles by orbit.  Each group lists the indices of isomorphic
/// puzzles in increasing order, and the groups are ordered by their first
/// member.
pub fn group_by_orbit<'a>(puzzles: impl IntoIterator<Item = &'a Grid>) -> Vec<Vec<usize>> {
  let mut groups: Vec<Vec<usize>> = vec![];
  let mut by_min: HashMap<Grid, usize> = HashMap::new();
  for (i, puzzle) in puzzles.into_iter().enumerate() {
    let min = *MinLex::of(puzzle).grid();
    match by_min.get(&min) {
      Some(&group) => groups[group].push(i),
      None => {
        by_min.insert(min, groups.len());
        groups.push(vec![i]);
      }
    }
  }
  debug!("{} orbits", groups.len());
  groups
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::permute::GridPermutation;
  use crate::random::*;

  const A: &str =
    "000040602004800091020000040901008006050000080200700405010000050460003900503020000";
  const B: &str =
    "..3.....2...7.1...6.......48..4.5......2....9..1.6.7...5.......3...8.....4.9...1.";

  #[test]
  fn isomorphs_share_an_orbit() {
    let mut random = new_random("orbit");
    let a: Grid = A.parse().unwrap();
    let b: Grid = B.parse().unwrap();
    let a2 = GridPermutation::random(&mut random).apply(&a);
    assert!(same_orbit(&a, &a2));
    assert!(!same_orbit(&a, &b));
  }

  #[test]
  fn grouping() {
    let mut random = new_random("orbit");
    let a: Grid = A.parse().unwrap();
    let b: Grid = B.parse().unwrap();
    let puzzles = [
      a,
      b,
      GridPermutation::random(&mut random).apply(&b),
      GridPermutation::random(&mut random).apply(&a),
      Grid::new(),
      GridPermutation::random(&mut random).apply(&a),
    ];
    assert_eq!(group_by_orbit(&puzzles), [vec![0, 3, 5], vec![1, 2], vec![4]]);
    assert!(group_by_orbit(&[]).is_empty());
  }
}
