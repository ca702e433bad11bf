//! Permutations that turn a Sudoku puzzle into an equivalent one.
//!
//! The validity-preserving transformations of a grid form a group generated
//! by transposition, permutations of bands and stacks, permutations of the
//! rows within a band and the columns within a stack, and relabeling of the
//! numerals.  Canonicalization picks the smallest image under this group; the
//! types here produce the images themselves.

use std::fmt;

use crate::core::*;
use crate::random::*;

/// A type that implements this trait is an algebraic group.
pub trait GroupElement
where
  Self: Eq + Sized,
{
  /// The group operation.  `a.composed_with(b)` has the effect of applying
  /// `a` and then `b`.
  fn composed_with(&self, other: &Self) -> Self;

  /// The group identity.  `g.composed_with(identity()) == g ==
  /// identity().composed_with(g)` for all `g` in the group.
  fn identity() -> Self;

  /// The group inverse.  `g.composed_with(g.inverse()) == identity() ==
  /// g.inverse().composed_with(g)` for all `g` in the group.
  fn inverse(&self) -> Self;

  /// Composes self with other in place.
  fn compose(&mut self, other: &Self) {
    *self = self.composed_with(other);
  }

  /// Inverts self in place.
  fn invert(&mut self) {
    *self = self.inverse();
  }
}

/// A permutation of the indices `0..N`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FullPermutation<const N: usize>([u8; N]);

impl<const N: usize> FullPermutation<N> {
  /// Checks that the array maps `0..N` one-to-one onto itself, and wraps it.
  pub fn new(array: [u8; N]) -> Option<Self> {
    let mut seen = [false; N];
    for &to in &array {
      let slot = seen.get_mut(to as usize)?;
      if *slot {
        return None;
      }
      *slot = true;
    }
    Some(Self(array))
  }

  /// Makes a random permutation.
  pub fn random<R: Rng>(random: &mut R) -> Self {
    let mut answer = Self::identity();
    answer.0.shuffle(random);
    answer
  }

  /// Where this permutation sends an index.
  pub fn apply(&self, i: usize) -> usize {
    self.0[i] as usize
  }
}

impl<const N: usize> GroupElement for FullPermutation<N> {
  fn composed_with(&self, other: &Self) -> Self {
    Self(self.0.map(|to| other.0[to as usize]))
  }

  fn identity() -> Self {
    Self(std::array::from_fn(|i| i as u8))
  }

  fn inverse(&self) -> Self {
    let mut answer = *self;
    for (i, &to) in self.0.iter().enumerate() {
      answer.0[to as usize] = i as u8;
    }
    answer
  }
}

impl<const N: usize> fmt::Display for FullPermutation<N> {
  /// Shows the permutation as a product of disjoint cycles, like `(0 2)(1 5 3)`.
  /// The identity, having no cycles, shows as `()`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut seen = [false; N];
    let mut printed = false;
    for start in 0..N {
      if seen[start] || self.apply(start) == start {
        continue;
      }
      write!(f, "({}", start)?;
      seen[start] = true;
      let mut i = self.apply(start);
      while i != start {
        seen[i] = true;
        write!(f, " {}", i)?;
        i = self.apply(i);
      }
      f.write_str(")")?;
      printed = true;
    }
    if !printed {
      f.write_str("()")?;
    }
    Ok(())
  }
}

impl<const N: usize> fmt::Debug for FullPermutation<N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

/// A permutation of numerals, by index.
pub type NumPermutation = FullPermutation<9>;

impl NumPermutation {
  /// Relabels a numeral.
  pub fn apply_num(&self, num: Num) -> Num {
    // Indices stay in 0..9.
    Num::from_index(self.apply(num.index())).unwrap_or(num)
  }
}

/// A permutation of the 9 rows (or columns) that keeps each band (or stack)
/// together.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LinePermutation(FullPermutation<9>);

impl LinePermutation {
  /// Builds a line permutation that moves band `b` to `bands.apply(b)` and,
  /// within it, line `i` to `lines[b].apply(i)`.
  pub fn new(bands: FullPermutation<3>, lines: [FullPermutation<3>; 3]) -> Self {
    let array = std::array::from_fn(|line| {
      (bands.apply(line / 3) * 3 + lines[line / 3].apply(line % 3)) as u8
    });
    LinePermutation(FullPermutation(array))
  }

  /// Wraps a permutation of lines, if it keeps bands together.
  pub fn from_lines(lines: FullPermutation<9>) -> Option<Self> {
    let keeps_bands =
      (0..9).all(|line| lines.apply(line) / 3 == lines.apply(line - line % 3) / 3);
    keeps_bands.then_some(LinePermutation(lines))
  }

  /// Makes a random band-preserving permutation.
  pub fn random<R: Rng>(random: &mut R) -> Self {
    let bands = FullPermutation::random(random);
    let lines = [(); 3].map(|_| FullPermutation::random(random));
    Self::new(bands, lines)
  }

  /// Where this permutation sends a line.
  pub fn apply(&self, line: usize) -> usize {
    self.0.apply(line)
  }
}

impl GroupElement for LinePermutation {
  fn composed_with(&self, other: &Self) -> Self {
    LinePermutation(self.0.composed_with(&other.0))
  }

  fn identity() -> Self {
    LinePermutation(FullPermutation::identity())
  }

  fn inverse(&self) -> Self {
    LinePermutation(self.0.inverse())
  }
}

/// A validity-preserving transformation of a Sudoku grid: an optional
/// transposition, followed by row and column permutations, with the numerals
/// relabeled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GridPermutation {
  pub transpose: bool,
  pub rows: LinePermutation,
  pub cols: LinePermutation,
  pub nums: NumPermutation,
}

impl GridPermutation {
  /// Makes a random grid permutation, with every element of the group
  /// equally likely.
  pub fn random<R: Rng>(random: &mut R) -> Self {
    GridPermutation {
      transpose: random.random(),
      rows: LinePermutation::random(random),
      cols: LinePermutation::random(random),
      nums: NumPermutation::random(random),
    }
  }

  /// Where this permutation sends a cell.
  pub fn apply_to_cell(&self, cell: Cell) -> Cell {
    let cell = if self.transpose { cell.t() } else { cell };
    let index = self.rows.apply(cell.row().index()) * 9 + self.cols.apply(cell.col().index());
    // Line permutations keep indices in 0..9.
    Cell::from_index(index).unwrap_or(cell)
  }

  /// Applies this permutation to a grid.
  pub fn apply(&self, grid: &Grid) -> Grid {
    let mut answer = Grid::new();
    for (cell, num) in grid.givens() {
      answer[self.apply_to_cell(cell)] = Some(self.nums.apply_num(num));
    }
    answer
  }
}

impl GroupElement for GridPermutation {
  fn composed_with(&self, other: &Self) -> Self {
    // A transposition in `other` swaps which of our line permutations its
    // rows and columns follow.
    let (rows, cols) = if other.transpose {
      (self.cols, self.rows)
    } else {
      (self.rows, self.cols)
    };
    GridPermutation {
      transpose: self.transpose ^ other.transpose,
      rows: rows.composed_with(&other.rows),
      cols: cols.composed_with(&other.cols),
      nums: self.nums.composed_with(&other.nums),
    }
  }

  fn identity() -> Self {
    GridPermutation {
      transpose: false,
      rows: LinePermutation::identity(),
      cols: LinePermutation::identity(),
      nums: NumPermutation::identity(),
    }
  }

  fn inverse(&self) -> Self {
    let (rows, cols) = if self.transpose {
      (self.cols, self.rows)
    } else {
      (self.rows, self.cols)
    };
    GridPermutation {
      transpose: self.transpose,
      rows: rows.inverse(),
      cols: cols.inverse(),
      nums: self.nums.inverse(),
    }
  }
}

impl fmt::Display for GridPermutation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}rows {} cols {} nums {}",
      if self.transpose { "transpose, " } else { "" },
      self.rows.0,
      self.cols.0,
      self.nums
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const PUZZLE: &str =
    "..3.....2...7.1...6.......48..4.5......2....9..1.6.7...5.......3...8.....4.9...1.";

  fn grid(s: &str) -> Grid {
    s.parse().unwrap()
  }

  fn perm<const N: usize>(array: [u8; N]) -> FullPermutation<N> {
    FullPermutation::new(array).unwrap()
  }

  #[test]
  fn full_permutations() {
    assert_eq!(FullPermutation::new([0, 0, 1]), None);
    assert_eq!(FullPermutation::new([0, 1, 3]), None);
    let p = perm([1, 2, 0, 3]);
    assert_eq!(p.apply(2), 0);
    assert_eq!(p.inverse(), perm([2, 0, 1, 3]));
    assert_eq!(p.composed_with(&p.inverse()), FullPermutation::identity());
    let q = perm([1, 0, 2, 3]);
    // Apply p, then q.
    assert_eq!(p.composed_with(&q), perm([0, 2, 1, 3]));
    assert_eq!(q.composed_with(&p), perm([2, 1, 0, 3]));
  }

  #[test]
  fn display() {
    assert_eq!(perm([1, 2, 0, 3]).to_string(), "(0 1 2)");
    assert_eq!(perm([1, 0, 3, 2]).to_string(), "(0 1)(2 3)");
    assert_eq!(FullPermutation::<5>::identity().to_string(), "()");
    assert_eq!(format!("{:?}", perm([2, 1, 0])), "(0 2)");
  }

  #[test]
  fn line_permutations() {
    let lines = LinePermutation::new(
      perm([2, 0, 1]),
      [perm([0, 2, 1]), FullPermutation::identity(), perm([1, 2, 0])],
    );
    let images: Vec<usize> = (0..9).map(|line| lines.apply(line)).collect();
    assert_eq!(images, [6, 8, 7, 0, 1, 2, 4, 5, 3]);
    assert_eq!(LinePermutation::from_lines(lines.0), Some(lines));
    assert_eq!(LinePermutation::from_lines(perm([0, 1, 3, 2, 4, 5, 6, 7, 8])), None);
    let mut random = new_random("test");
    for _ in 0..20 {
      let p = LinePermutation::random(&mut random);
      assert!(LinePermutation::from_lines(p.0).is_some());
      assert_eq!(p.composed_with(&p.inverse()), LinePermutation::identity());
    }
  }

  #[test]
  fn numerals() {
    let nums = perm([1, 0, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(nums.apply_num(N1), N2);
    assert_eq!(nums.apply_num(N2), N1);
    assert_eq!(nums.apply_num(N9), N9);
  }

  #[test]
  fn identity() {
    let g = grid(PUZZLE);
    assert_eq!(GridPermutation::identity().apply(&g), g);
    assert_eq!(GridPermutation::identity().to_string(), "rows () cols () nums ()");
  }

  #[test]
  fn apply() {
    let g = grid(&("12".to_string() + &".".repeat(79)));
    let mut p = GridPermutation::identity();
    p.transpose = true;
    // Transposing moves r1c2 to r2c1.
    assert_eq!(p.apply(&g).to_string(), "1........2".to_string() + &".".repeat(71));

    let mut p = GridPermutation::identity();
    p.rows = LinePermutation::new(perm([2, 1, 0]), [FullPermutation::identity(); 3]);
    p.cols = LinePermutation::new(
      FullPermutation::identity(),
      [perm([2, 1, 0]), FullPermutation::identity(), FullPermutation::identity()],
    );
    p.nums = perm([4, 1, 2, 3, 0, 5, 6, 7, 8]);
    // Rows 1 and 7 swap bands; columns 1 and 3 swap within the stack.
    assert_eq!(p.apply(&g).to_string(), ".".repeat(54) + ".25" + &".".repeat(24));
  }

  #[test]
  fn preserves_givens() {
    let mut random = new_random("test");
    let g = grid(PUZZLE);
    for _ in 0..50 {
      let p = GridPermutation::random(&mut random);
      let image = p.apply(&g);
      assert_eq!(image.len(), g.len());
      let mut counts = [0; 9];
      for (_, num) in g.givens() {
        counts[p.nums.apply_num(num).index()] += 1;
      }
      for (_, num) in image.givens() {
        counts[num.index()] -= 1;
      }
      assert_eq!(counts, [0; 9]);
    }
  }

  #[test]
  fn compose() {
    let mut random = new_random("test");
    let g = grid(PUZZLE);
    for _ in 0..100 {
      let p1 = GridPermutation::random(&mut random);
      let p2 = GridPermutation::random(&mut random);
      let p12 = p1.composed_with(&p2);
      assert_eq!(p12.apply(&g), p2.apply(&p1.apply(&g)));
      let p21 = p2.composed_with(&p1);
      assert_eq!(p21.apply(&g), p1.apply(&p2.apply(&g)));
    }
  }

  #[test]
  fn inverse() {
    let mut random = new_random("test");
    let g = grid(PUZZLE);
    for _ in 0..100 {
      let p = GridPermutation::random(&mut random);
      let i = p.inverse();
      assert_eq!(p, i.inverse());
      assert_eq!(p.composed_with(&i), GridPermutation::identity());
      assert_eq!(i.composed_with(&p), GridPermutation::identity());
      assert_eq!(g, i.apply(&p.apply(&g)));
      let mut q = p;
      q.invert();
      q.compose(&p);
      assert_eq!(q, GridPermutation::identity());
    }
  }
}
