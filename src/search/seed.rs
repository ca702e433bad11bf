//! Chooses the top row: the first generation of candidates.

use super::Candidate;
use crate::pattern::{CluePattern, PatternPair};
use crate::tables::*;

/// Finds the best score any row of either orientation can reach at the top
/// of the grid, and makes one candidate for every row and stack permutation
/// that reaches it.
pub(super) fn seed(pair: &PatternPair) -> (u16, Vec<Candidate>) {
  let best_in = |transposed| {
    pair
      .get(transposed)
      .rows
      .iter()
      .map(|&row| row_score(row))
      .fold(u16::MAX, u16::min)
  };
  let scores = [best_in(false), best_in(true)];
  let target = scores[0].min(scores[1]);
  let mut candidates = vec![];
  for (transposed, score) in [(false, scores[0]), (true, scores[1])] {
    if score > target {
      continue;
    }
    let pattern = pair.get(transposed);
    for row in 0..9 {
      if row_score(pattern.rows[row]) == target {
        expand_stacks(pattern, transposed, row, target, &mut candidates);
      }
    }
  }
  (target, candidates)
}

/// Tries each stack permutation on a top-row seed, keeping those that let the
/// row reach the target score.
fn expand_stacks(
  pattern: &CluePattern,
  transposed: bool,
  row: usize,
  target: u16,
  candidates: &mut Vec<Candidate>,
) {
  let wanted = split_row(target);
  for stacks in 0..PERMS.len() {
    let best = permute_stacks(pattern.triplets(row), stacks).map(|t| best_triplet(t, ALL_PERMS));
    if best.iter().zip(wanted).all(|(b, w)| b.code == w) {
      candidates.push(Candidate::top_row(
        transposed,
        row,
        stacks,
        best.map(|b| b.perms),
      ));
    }
  }
}
