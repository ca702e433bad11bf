//! Defines the Grid type, representing a Sudoku puzzle: the assignments of
//! numerals to the cells that hold givens.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;

use super::*;
use crate::error::MinLexError;

/// A Sudoku grid: a 9x9 array with each cell holding an optional numeral from
/// 1 through 9.
///
/// Grids order lexicographically by cell, with blanks before numerals.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[wasm_bindgen]
pub struct Grid([Option<Num>; 81]);

#[wasm_bindgen]
impl Grid {
  /// Makes an empty Grid.
  #[wasm_bindgen(constructor)]
  pub fn new() -> Grid {
    Grid([None; 81])
  }

  /// Constructs a Grid from an 81-character puzzle string, or throws.
  #[wasm_bindgen(js_name = "newFromString")]
  pub fn new_from_string(s: &str) -> Result<Grid, String> {
    Grid::from_str(s).map_err(|e| e.to_string())
  }

  /// Returns the number of cells that hold givens.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  /// Tells whether the grid has no givens at all.
  #[wasm_bindgen(js_name = "isEmpty")]
  pub fn is_empty(&self) -> bool {
    self.0.iter().all(|optional| optional.is_none())
  }

  /// Returns the display string (81 characters).
  #[wasm_bindgen(js_name = "toFlatString")]
  pub fn to_flat_string(&self) -> String {
    format!("{}", self)
  }
}

impl Grid {
  /// Iterates the cells that hold givens, with their numerals.
  pub fn givens(&self) -> impl Iterator<Item = (Cell, Num)> + '_ {
    Cell::all()
      .zip(self.0.iter())
      .filter_map(|(cell, optional)| optional.map(|num| (cell, num)))
  }

  /// Returns the grid reflected across its main diagonal.
  pub fn transposed(&self) -> Grid {
    let mut answer = Grid::new();
    for (cell, num) in self.givens() {
      answer[cell.t()] = Some(num);
    }
    answer
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Cell> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Cell`s.
  fn index(&self, cell: Cell) -> &Option<Num> {
    &self.0[cell.index()]
  }
}

impl IndexMut<Cell> for Grid {
  fn index_mut(&mut self, cell: Cell) -> &mut Option<Num> {
    &mut self.0[cell.index()]
  }
}

impl fmt::Display for Grid {
  /// Prints this grid in row-major order, with `.` for blank cells.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for optional in self.0 {
      match optional {
        Some(num) => fmt::Display::fmt(&num, f)?,
        None => f.write_str(".")?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let flat: Vec<char> = self.to_string().chars().collect();
    let triplet = |n: usize| format!("{} {} {}", flat[n], flat[n + 1], flat[n + 2]);
    let row = |n: usize| [triplet(n), triplet(n + 3), triplet(n + 6)].join(" | ");
    let band = |n: usize| [row(n), row(n + 9), row(n + 18)].join("\n");
    let grid = [band(0), band(27), band(54)].join("\n- - - + - - - + - - -\n");
    f.write_str(&grid)
  }
}

impl FromStr for Grid {
  type Err = MinLexError;

  /// Constructs a Grid from a puzzle string, which must be exactly 81
  /// characters long.
  ///
  /// The characters `1` through `9` are givens in the corresponding cells;
  /// every other character (conventionally `0` or `.`) is a blank.
  fn from_str(s: &str) -> Result<Grid, MinLexError> {
    let len = s.chars().count();
    if len != Cell::COUNT {
      return Err(MinLexError::MalformedInput { len });
    }
    let mut grid = Grid::new();
    for (slot, c) in grid.0.iter_mut().zip(s.chars()) {
      *slot = Num::from_char(c);
    }
    Ok(grid)
  }
}
