//! Defines the Num type, which represents the numerals written in a Sudoku.

use core::fmt;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use std::num::NonZeroU8;

/// Identifies one of the 9 numerals that can occupy a cell of a Sudoku grid.
///
/// In a canonical grid the numerals are labels: `N1` is whichever numeral the
/// canonical reading order meets first, and so on.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Num(NonZeroU8);

// Constant Num values, N1 through N9.
seq!(K in 1..=9 {
    paste! {
        pub const [<N K>]: Num = Num(match NonZeroU8::new(K) {
            Some(n) => n,
            None => panic!("numerals start at 1"),
        });
    }
});

impl Num {
  /// How many distinct numerals there are.
  pub const COUNT: usize = 9;

  /// Makes an optional Num from an int, present when it's in 1..=9 and
  /// absent otherwise.
  pub const fn new(num: u8) -> Option<Self> {
    if num > 9 {
      return None;
    }
    match NonZeroU8::new(num) {
      Some(n) => Some(Num(n)),
      None => None,
    }
  }

  /// Makes an optional Num from an index in 0..9.
  pub const fn from_index(i: usize) -> Option<Self> {
    if i < 9 {
      Self::new(i as u8 + 1)
    } else {
      None
    }
  }

  /// Reads a puzzle character: `'1'` through `'9'` are numerals, and every
  /// other character is a blank.
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      '1'..='9' => Self::new(c as u8 - b'0'),
      _ => None,
    }
  }

  /// Returns the int that this Num wraps, which is in 1..=9.
  pub const fn get(self) -> u8 {
    self.0.get()
  }

  /// Returns the number to use for indexing, when you need to index by
  /// `Num`s.
  pub const fn index(self) -> usize {
    (self.get() - 1) as usize
  }

  /// Iterates all distinct `Num`s, 1 through 9.
  pub fn all() -> impl Iterator<Item = Self> {
    (1..=9).filter_map(Self::new)
  }
}

impl fmt::Debug for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "N{}", self.get())
  }
}

impl fmt::Display for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.get())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ranges() {
    assert_eq!(Num::new(0), None);
    assert_eq!(Num::new(10), None);
    assert_eq!(Num::new(4), Some(N4));
    assert_eq!(Num::from_index(8), Some(N9));
    assert_eq!(Num::from_index(9), None);
    assert_eq!(Num::all().count(), Num::COUNT);
    for (i, num) in Num::all().enumerate() {
      assert_eq!(num.index(), i);
    }
  }

  #[test]
  fn chars() {
    assert_eq!(Num::from_char('1'), Some(N1));
    assert_eq!(Num::from_char('9'), Some(N9));
    assert_eq!(Num::from_char('0'), None);
    assert_eq!(Num::from_char('.'), None);
    assert_eq!(Num::from_char('x'), None);
    assert_eq!(format!("{} {:?}", N7, N7), "7 N7");
  }

  #[test]
  fn niche() {
    assert_eq!(std::mem::size_of::<Option<Num>>(), 1);
  }
}
