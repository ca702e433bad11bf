//! Extends candidates one target row at a time.

use std::cmp::Ordering::*;

use log::trace;

use super::Candidate;
use crate::pattern::PatternPair;
use crate::tables::*;

/// The candidates that survive one target row.  Each row gets a fresh
/// generation, and the previous one is dropped once the next is complete.
type Generation = Vec<Candidate>;

/// Fills target rows 1 through 8, recording each row's minimal mask in
/// `rows`.  Returns the complete candidates that produce the minimal pattern.
pub(super) fn expand_rows(
  pair: &PatternPair,
  seeds: Generation,
  rows: &mut [u16; 9],
) -> Generation {
  let mut current = seeds;
  for to_row in 1..9 {
    let (next, best) = expand_row(pair, &current, to_row);
    trace!(
      "row {}: best {:03b} {:03b} {:03b}, {} -> {} candidates",
      to_row,
      best[0],
      best[1],
      best[2],
      current.len(),
      next.len()
    );
    rows[to_row] = join_row(best);
    current = next;
  }
  current
}

/// Builds the next generation for one target row.
///
/// The best triplet codes seen so far are shared across every candidate: an
/// extension that beats them in some stack discards everything accepted so
/// far, and one that loses to them is dropped.
fn expand_row(pair: &PatternPair, current: &[Candidate], to_row: usize) -> (Generation, [u8; 3]) {
  let mut next = Generation::with_capacity(current.len());
  let mut best = [WORST_TRIPLET; 3];
  for candidate in current {
    'rows: for from_row in admissible_rows(candidate, to_row) {
      let triplets = candidate.target_triplets(pair, from_row);
      let mut col_perms = [0; 3];
      for stack in 0..3 {
        let found = best_triplet(triplets[stack], candidate.col_perms[stack]);
        match found.code.cmp(&best[stack]) {
          Greater => continue 'rows,
          Less => {
            next.clear();
            best[stack] = found.code;
            best[stack + 1..].fill(WORST_TRIPLET);
          }
          Equal => {}
        }
        col_perms[stack] = found.perms;
      }
      next.push(candidate.extended(from_row, to_row, col_perms));
    }
  }
  (next, best)
}

/// The source rows a candidate may place in a target row.  The first row of
/// a band may come from anywhere; the others must come from the same source
/// band as that first row.
fn admissible_rows(candidate: &Candidate, to_row: usize) -> impl Iterator<Item = usize> + '_ {
  let range = if to_row % 3 == 0 {
    0..9
  } else {
    match candidate.rows.source_of(to_row - to_row % 3) {
      Some(band_start) => {
        let first = band_start / 3 * 3;
        first..first + 3
      }
      None => 0..0,
    }
  };
  range.filter(move |&from_row| candidate.rows.target_of(from_row).is_none())
}

#[cfg(test)]
mod tests {
  use super::super::seed::seed;
  use super::*;

  fn pair(s: &str) -> PatternPair {
    PatternPair::new(&s.parse().unwrap())
  }

  #[test]
  fn admissible() {
    let mut candidate = Candidate::top_row(false, 4, 0, [ALL_PERMS; 3]);
    // Rows 3 and 5 share row 4's band.
    assert_eq!(admissible_rows(&candidate, 1).collect::<Vec<_>>(), [3, 5]);
    candidate.rows.map(5, 1);
    assert_eq!(admissible_rows(&candidate, 2).collect::<Vec<_>>(), [3]);
    candidate.rows.map(3, 2);
    // A new band may start anywhere.
    assert_eq!(
      admissible_rows(&candidate, 3).collect::<Vec<_>>(),
      [0, 1, 2, 6, 7, 8]
    );
  }

  #[test]
  fn baseline_pattern() {
    let pair = pair(
      "000040602004800091020000040901008006050000080200700405010000050460003900503020000",
    );
    let (top, seeds) = seed(&pair);
    let mut rows = [0; 9];
    rows[0] = top;
    let survivors = expand_rows(&pair, seeds, &mut rows);
    assert_eq!(
      rows,
      [
        0b000_001_001,
        0b001_000_010,
        0b010_010_000,
        0b000_011_011,
        0b001_010_001,
        0b100_101_100,
        0b010_001_010,
        0b011_000_011,
        0b101_100_100,
      ]
    );
    assert_eq!(survivors.len(), 2);
    for s in &survivors {
      assert!(s.is_complete());
      assert!(s.rows.is_consistent());
      // Every placed row lands on exactly the recorded mask.
      for to_row in 0..9 {
        let from_row = s.rows.source_of(to_row).unwrap();
        let triplets = s.target_triplets(&pair, from_row);
        let codes = [0, 1, 2].map(|stack| best_triplet(triplets[stack], s.col_perms[stack]).code);
        assert_eq!(join_row(codes), rows[to_row]);
      }
    }
  }

  #[test]
  fn bands_stay_together() {
    let pair = pair(
      "..3.....2...7.1...6.......48..4.5......2....9..1.6.7...5.......3...8.....4.9...1.",
    );
    let (top, seeds) = seed(&pair);
    let mut rows = [top, 0, 0, 0, 0, 0, 0, 0, 0];
    for s in expand_rows(&pair, seeds, &mut rows) {
      for band in 0..3 {
        let source_bands: Vec<usize> =
          (0..3).map(|i| s.rows.source_of(band * 3 + i).unwrap() / 3).collect();
        assert!(source_bands.iter().all(|&b| b == source_bands[0]));
      }
    }
  }

  #[test]
  fn symmetric_pattern_keeps_many_candidates() {
    let corners = "1.......2".to_string() + &".".repeat(63) + "3.......4";
    let pair = pair(&corners);
    let (top, seeds) = seed(&pair);
    let mut rows = [top, 0, 0, 0, 0, 0, 0, 0, 0];
    let survivors = expand_rows(&pair, seeds, &mut rows);
    assert_eq!(rows, [0, 0, 0, 0, 0, 0b000_001_001, 0, 0, 0b000_001_001]);
    assert_eq!(survivors.len(), 192);
  }
}
