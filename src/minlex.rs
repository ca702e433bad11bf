//! Canonicalizes Sudoku puzzles: maps each puzzle to the smallest member of
//! its equivalence class under the grid's validity-preserving symmetries.
//!
//! The canonical form first minimizes where the givens sit, reading the grid
//! row by row with a given counting as 1 and a blank as 0.  Among the
//! arrangements that tie on positions, it then relabels the numerals in the
//! order they're first met, and picks the smallest labeling.  Two puzzles are
//! isomorphic exactly when their canonical forms are equal.

use std::fmt;
use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::collect::LabelSearch;
use crate::core::*;
use crate::error::MinLexError;
use crate::mapping::MappingRecord;
use crate::pattern::PatternPair;
use crate::search::PatternSearch;

/// A puzzle's canonical form, along with every mapping that produces it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[wasm_bindgen]
pub struct MinLex {
  grid: Grid,
  pattern: [u16; 9],
  givens: usize,
  mappings: Vec<MappingRecord>,
}

/// Parses an 81-character puzzle and canonicalizes it.
pub fn canonicalize(text: &str) -> Result<MinLex, MinLexError> {
  Ok(MinLex::of(&Grid::from_str(text)?))
}

/// Canonicalizes an 81-character puzzle string, or throws.
#[wasm_bindgen(js_name = "minLex")]
pub fn min_lex(text: &str) -> Result<MinLex, String> {
  canonicalize(text).map_err(|e| e.to_string())
}

impl MinLex {
  /// Canonicalizes a puzzle.  Each call starts from scratch.
  pub fn of(puzzle: &Grid) -> Self {
    let pair = PatternPair::new(puzzle);
    let search = PatternSearch::run(&pair);
    let labels = LabelSearch::run(&pair, &search);
    MinLex {
      grid: labels.grid(),
      pattern: search.rows,
      givens: pair.givens(),
      mappings: labels.into_mappings(),
    }
  }

  /// The canonical form of the puzzle.
  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  /// The canonical positions of the givens, one 9-bit mask per row with
  /// column 1 in the high bit.
  pub fn pattern(&self) -> [u16; 9] {
    self.pattern
  }

  /// The mappings from the original puzzle to the canonical form, with
  /// duplicates removed.
  pub fn mappings(&self) -> &[MappingRecord] {
    &self.mappings
  }
}

#[wasm_bindgen]
impl MinLex {
  /// The canonical form as an 81-character string, with `.` for blanks.
  #[wasm_bindgen(js_name = "toFlatString")]
  pub fn to_flat_string(&self) -> String {
    self.grid.to_string()
  }

  /// How many givens the puzzle has.
  pub fn givens(&self) -> usize {
    self.givens
  }

  /// How many distinct mappings produce the canonical form.  Puzzles with
  /// nontrivial automorphisms have more than one.
  #[wasm_bindgen(js_name = "mappingCount")]
  pub fn mapping_count(&self) -> usize {
    self.mappings.len()
  }

  /// The mappings, as an array of `{cells, labels}` objects.
  #[wasm_bindgen(js_name = "mappings")]
  pub fn mappings_js(&self) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&self.mappings)?)
  }
}

impl fmt::Display for MinLex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.grid, f)
  }
}
