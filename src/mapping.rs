//! Records how a puzzle's givens were carried into its canonical form.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::core::*;

/// One way of turning a puzzle into its canonical form.
///
/// For every canonical cell holding a given, `cells` names the original cell
/// it came from; for every numeral in the original puzzle, `labels` names the
/// canonical numeral it became.  Puzzles with automorphisms have more than
/// one record.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MappingRecord {
  cells: [Option<Cell>; 81],
  labels: [Option<Num>; 9],
}

impl MappingRecord {
  pub fn new(cells: [Option<Cell>; 81], labels: [Option<Num>; 9]) -> Self {
    MappingRecord { cells, labels }
  }

  /// The original cell that ends up in a canonical cell, if it holds a given.
  pub fn source_of(&self, target: Cell) -> Option<Cell> {
    self.cells[target.index()]
  }

  /// The canonical label of an original numeral, if the puzzle uses it.
  pub fn label_of(&self, num: Num) -> Option<Num> {
    self.labels[num.index()]
  }

  /// Transforms the original puzzle into its canonical form.
  pub fn apply(&self, original: &Grid) -> Grid {
    let mut answer = Grid::new();
    for target in Cell::all() {
      if let Some(source) = self.source_of(target) {
        answer[target] = original[source].and_then(|num| self.label_of(num));
      }
    }
    answer
  }

  /// Transforms the canonical form back into the original puzzle.
  pub fn unapply(&self, canonical: &Grid) -> Grid {
    let mut numerals = [None; 9];
    for num in Num::all() {
      if let Some(label) = self.label_of(num) {
        numerals[label.index()] = Some(num);
      }
    }
    let mut answer = Grid::new();
    for target in Cell::all() {
      if let Some(source) = self.source_of(target) {
        answer[source] = canonical[target].and_then(|label| numerals[label.index()]);
      }
    }
    answer
  }
}

impl std::fmt::Debug for MappingRecord {
  /// Lists the cell moves and then the relabelings, skipping blanks and
  /// unused numerals.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut list = f.debug_map();
    for target in Cell::all() {
      if let Some(source) = self.source_of(target) {
        list.entry(&source, &target);
      }
    }
    for num in Num::all() {
      if let Some(label) = self.label_of(num) {
        list.entry(&num, &label);
      }
    }
    list.finish()
  }
}

impl Serialize for MappingRecord {
  /// Serializes as `{cells, labels}`, with cells as indices in 0..81 and
  /// labels as numerals, and `null` standing in for blanks.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("MappingRecord", 2)?;
    state.serialize_field("cells", &self.cells[..])?;
    state.serialize_field("labels", &self.labels[..])?;
    state.end()
  }
}
