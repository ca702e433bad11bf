use std::io::{self, BufRead};

use sudoku_minlex::{core::Grid, orbit::group_by_orbit};

/// Reads puzzles, one per line, from standard input, and prints every set of
/// lines whose puzzles belong to the same orbit.
fn main() -> io::Result<()> {
  #[cfg(not(target_arch = "wasm32"))]
  env_logger::init();
  let mut puzzles = vec![];
  let mut line_numbers = vec![];
  for (i, line) in io::stdin().lock().lines().enumerate() {
    let line = line?;
    match line.trim_end().parse::<Grid>() {
      Ok(grid) => {
        puzzles.push(grid);
        line_numbers.push(i + 1);
      }
      Err(e) => eprintln!("line {}: {}", i + 1, e),
    }
  }
  let groups = group_by_orbit(&puzzles);
  let mut shared = 0;
  for group in groups.iter().filter(|group| group.len() > 1) {
    let lines: Vec<String> = group.iter().map(|&i| line_numbers[i].to_string()).collect();
    println!("{}: lines {}", puzzles[group[0]], lines.join(", "));
    shared += 1;
  }
  println!("{} puzzles, {} orbits, {} shared", puzzles.len(), groups.len(), shared);
  Ok(())
}
