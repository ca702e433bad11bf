use std::{
  env,
  fs::File,
  io::{self, BufRead, BufReader},
};

use sudoku_minlex::minlex::canonicalize;

/// Reads puzzles, one per line, from the named file or from standard input,
/// and prints each one's canonical form followed by its number of distinct
/// mappings.  Malformed lines are reported on standard error and skipped.
fn main() -> io::Result<()> {
  #[cfg(not(target_arch = "wasm32"))]
  env_logger::init();
  let args: Vec<String> = env::args().collect();
  assert!(args.len() <= 2, "usage: {} [<puzzle-file>]", args[0]);
  let input: Box<dyn BufRead> = match args.get(1) {
    Some(path) => Box::new(BufReader::new(File::open(path)?)),
    None => Box::new(io::stdin().lock()),
  };
  for (i, line) in input.lines().enumerate() {
    let line = line?;
    let line = line.trim_end();
    if line.is_empty() {
      continue;
    }
    match canonicalize(line) {
      Ok(min) => println!("{} {}", min, min.mapping_count()),
      Err(e) => eprintln!("line {}: {}", i + 1, e),
    }
  }
  Ok(())
}
