//! Defines the errors the canonicalizer reports.

/// Things that can go wrong when canonicalizing a puzzle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum MinLexError {
  /// The puzzle text wasn't exactly 81 characters long.
  #[display("puzzle text must be 81 characters long, not {len}")]
  MalformedInput { len: usize },
}
