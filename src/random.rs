//! Deterministic random number generation.

pub use rand::{seq::SliceRandom, Rng};
use rand_pcg::Pcg64Mcg;
use rand_seeder::Seeder;

/// The random number generator used throughout the crate.
pub type Random = Pcg64Mcg;

/// Makes a random number generator whose sequence is fixed by a seed string.
pub fn new_random(seed: &str) -> Random {
  Seeder::from(seed).into_rng()
}
