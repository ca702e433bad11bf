//! Defines the Cell type, which identifies the 81 cells of a Sudoku grid, and
//! the rows, columns and bands that partition them.

use crate::define_id_types;
use std::fmt;

define_id_types! {
    /// Identifies one of the 81 cells in a Sudoku grid.
    ///
    /// Grids are represented as length-81 arrays in row-major order.
    /// `Cell(0)` is the top left cell of the grid, and `Cell(80)` is the
    /// bottom right.
    Cell[81];

    /// Identifies one of the 9 rows in a Sudoku grid, numbered top to bottom.
    #[derive(Debug)]
    Row[9];

    /// Identifies one of the 9 columns in a Sudoku grid, numbered left to
    /// right.
    #[derive(Debug)]
    Col[9];

    /// Identifies a group of 3 consecutive rows (a band) or 3 consecutive
    /// columns (a stack).
    #[derive(Debug)]
    Band[3];
}

impl Cell {
  /// Converts from row/col to Cell.
  pub const fn at(row: Row, col: Col) -> Cell {
    Cell(row.0 * 9 + col.0)
  }

  /// This cell's row.
  pub const fn row(self) -> Row {
    Row(self.0 / 9)
  }

  /// This cell's column.
  pub const fn col(self) -> Col {
    Col(self.0 % 9)
  }

  /// Returns the transpose of this cell: the cell on the other side of the
  /// main diagonal.
  pub const fn t(self) -> Cell {
    Cell::at(Row(self.col().0), Col(self.row().0))
  }
}

impl Row {
  /// Tells which band this row inhabits.
  pub const fn band(self) -> Band {
    Band(self.0 / 3)
  }
}

impl Col {
  /// Tells which stack this column inhabits.
  pub const fn stack(self) -> Band {
    Band(self.0 / 3)
  }
}

impl Band {
  /// The first of the 3 lines that make up this band (or stack).
  pub const fn first_line(self) -> usize {
    self.0 as usize * 3
  }
}

impl fmt::Display for Cell {
  /// Prints this cell as rXcY, with 1-based row and column numbers.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "r{}c{}", self.row().0 + 1, self.col().0 + 1)
  }
}

impl fmt::Debug for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
