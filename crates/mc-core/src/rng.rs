//! Deterministic per-molecule RNG.
//!
//! # Determinism strategy
//!
//! Each molecule gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (molecule_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive molecule IDs uniformly across the seed space.
//! This means:
//!
//! - Molecules never share RNG state, so the movement phase gives the same
//!   answer whether it runs sequentially or on Rayon.
//! - A molecule's trajectory depends only on the run seed and its creation
//!   order, never on how many other molecules are in flight.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::MoleculeId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-molecule deterministic RNG.
///
/// Owned by the molecule it was seeded for and dropped on delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct MoleculeRng(SmallRng);

impl MoleculeRng {
    /// Seed deterministically from the run's seed and a molecule ID.
    pub fn new(run_seed: u64, molecule: MoleculeId) -> Self {
        let seed = run_seed ^ molecule.0.wrapping_mul(MIXING_CONSTANT);
        MoleculeRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
