//! Canonical forms for Sudoku puzzles.
//!
//! Every puzzle belongs to an orbit of equivalent puzzles, reachable from one
//! another by transposing, shuffling bands and stacks, shuffling the lines
//! within them, and relabeling numerals.  [`minlex::canonicalize`] maps a
//! puzzle to the smallest member of its orbit, first by where its givens sit
//! and then by how its numerals read, and reports every mapping that gets
//! there.

pub mod collect;
pub mod core;
pub mod error;
pub mod mapping;
pub mod minlex;
pub mod orbit;
pub mod pattern;
pub mod permute;
pub mod random;
pub mod search;
pub mod tables;
