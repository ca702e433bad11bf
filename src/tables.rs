//! Precomputed tables that drive the pattern search.
//!
//! Both tables are built by brute force the first time they're used.  Row
//! masks keep column 0 in their most significant bit, so that comparing masks
//! numerically compares the rows lexicographically; triplet codes likewise
//! keep a stack's first column in bit 2.

use once_cell::sync::Lazy;
use static_assertions::const_assert_eq;

/// The 6 permutations of 3 things, in lexicographic order.  Permutation `p`
/// sends the item at position `i` to position `PERMS[p][i]`.
pub const PERMS: [[usize; 3]; 6] = [
  [0, 1, 2],
  [0, 2, 1],
  [1, 0, 2],
  [1, 2, 0],
  [2, 0, 1],
  [2, 1, 0],
];

/// A set of permutations, as indices into `PERMS`.
pub type PermMask = u8;

/// The mask that allows every permutation.
pub const ALL_PERMS: PermMask = (1 << PERMS.len()) - 1;

/// The largest triplet code: all 3 cells hold givens.
pub const WORST_TRIPLET: u8 = 7;

const TRIPLET_CODES: usize = WORST_TRIPLET as usize + 1;
const ROW_MASKS: usize = 1 << 9;

const_assert_eq!(ALL_PERMS, 0b11_1111);
const_assert_eq!(TRIPLET_CODES * TRIPLET_CODES * TRIPLET_CODES, ROW_MASKS);

/// Iterates the permutations contained in a mask.
pub fn perms_in(mask: PermMask) -> impl Iterator<Item = usize> + Clone {
  (0..PERMS.len()).filter(move |&p| mask >> p & 1 != 0)
}

/// Rearranges the 3 cells of a triplet code.
pub fn permute_triplet(code: u8, perm: usize) -> u8 {
  let mut answer = 0;
  for (i, &to) in PERMS[perm].iter().enumerate() {
    if code & (4 >> i) != 0 {
      answer |= 4 >> to;
    }
  }
  answer
}

/// Splits a row mask into its 3 triplet codes, stack by stack.
pub const fn split_row(row: u16) -> [u8; 3] {
  [(row >> 6 & 7) as u8, (row >> 3 & 7) as u8, (row & 7) as u8]
}

/// Joins 3 triplet codes into a row mask.
pub const fn join_row(triplets: [u8; 3]) -> u16 {
  (triplets[0] as u16) << 6 | (triplets[1] as u16) << 3 | triplets[2] as u16
}

/// Moves a row's triplets to the stacks a stack permutation sends them to.
pub fn permute_stacks(triplets: [u8; 3], perm: usize) -> [u8; 3] {
  let mut answer = [0; 3];
  for (triplet, &to) in triplets.iter().zip(PERMS[perm].iter()) {
    answer[to] = *triplet;
  }
  answer
}

/// The best a triplet can do using a restricted set of permutations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TripletBest {
  /// The smallest code the allowed permutations can produce.
  pub code: u8,
  /// The allowed permutations that produce `code`.
  pub perms: PermMask,
  /// How many permutations `perms` holds.
  pub count: u8,
}

/// Canonicalizes a triplet code using only the permutations in `allowed`.
///
/// An empty `allowed` mask yields the worst code and no permutations; the
/// search never narrows a mask that far.
pub fn best_triplet(code: u8, allowed: PermMask) -> TripletBest {
  TRIPLETS[code as usize][allowed as usize]
}

/// The smallest row mask reachable from `row` by permuting stacks and the
/// columns within them.
pub fn row_score(row: u16) -> u16 {
  ROW_SCORES[row as usize]
}

static TRIPLETS: Lazy<[[TripletBest; 64]; TRIPLET_CODES]> = Lazy::new(|| {
  let mut table = [[TripletBest {
    code: WORST_TRIPLET,
    perms: 0,
    count: 0,
  }; 64]; TRIPLET_CODES];
  for (code, row) in table.iter_mut().enumerate() {
    for (allowed, entry) in row.iter_mut().enumerate() {
      for perm in perms_in(allowed as PermMask) {
        let result = permute_triplet(code as u8, perm);
        if entry.perms == 0 || result < entry.code {
          entry.code = result;
          entry.perms = 0;
        }
        if result == entry.code {
          entry.perms |= 1 << perm;
        }
      }
      entry.count = entry.perms.count_ones() as u8;
    }
  }
  table
});

static ROW_SCORES: Lazy<[u16; ROW_MASKS]> = Lazy::new(|| {
  let mut scores = [0; ROW_MASKS];
  for (row, score) in scores.iter_mut().enumerate() {
    let triplets = split_row(row as u16).map(|t| best_triplet(t, ALL_PERMS).code);
    *score = (0..PERMS.len())
      .map(|perm| join_row(permute_stacks(triplets, perm)))
      .fold(u16::MAX, u16::min);
  }
  scores
});
