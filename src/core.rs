//! Defines the core types the canonicalizer works with.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board, holding a puzzle's givens
//! - Num: the 9 numerals that go in the grid's cells
//! - Cell: the 81 cells of the grid
//! - Row, Col and Band: the lines and chutes that the grid's symmetries
//!   shuffle around

mod id_types;

mod cell;
mod grid;
mod num;

pub use cell::*;
pub use grid::*;
pub use num::*;
