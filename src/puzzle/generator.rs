use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;
use rand::seq::index::sample;

use crate::puzzle::errors::PuzzleError;

pub const LARGE_NUMBERS: [u64; 4] = [25, 50, 75, 100];
pub const SMALL_NUMBERS: RangeInclusive<u64> = 1..=10;
/// Each small number may appear at most this many times.
pub const SMALL_COPIES: usize = 2;
pub const TARGET_RANGE: RangeInclusive<u64> = 100..=999;
pub const PUZZLE_SIZE: usize = 6;

/// How many of the six numbers come from the large pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub large_count: usize,
}

impl PuzzleConfig {
    /// # Errors
    ///
    /// Returns an error if more large numbers are requested than the pool holds.
    pub fn new(large_count: usize) -> Result<Self, PuzzleError> {
        if large_count > LARGE_NUMBERS.len() {
            return Err(PuzzleError::TooManyLarge {
                requested: large_count,
                max: LARGE_NUMBERS.len(),
            });
        }
        Ok(Self { large_count })
    }

    /// Between one and four large numbers, chosen uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            large_count: rng.random_range(1..=LARGE_NUMBERS.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub numbers: Vec<u64>,
    pub target: u64,
}

impl Puzzle {
    /// Draw large numbers without replacement from [`LARGE_NUMBERS`], fill up
    /// with small numbers drawn without replacement from two copies of
    /// [`SMALL_NUMBERS`], and pick a target from [`TARGET_RANGE`].
    pub fn generate<R: Rng + ?Sized>(config: PuzzleConfig, rng: &mut R) -> Self {
        let small_pool: Vec<u64> = SMALL_NUMBERS
            .flat_map(|n| std::iter::repeat_n(n, SMALL_COPIES))
            .collect();
        let small_count = PUZZLE_SIZE - config.large_count;

        let mut numbers: Vec<u64> = sample(rng, LARGE_NUMBERS.len(), config.large_count)
            .into_iter()
            .filter_map(|idx| LARGE_NUMBERS.get(idx).copied())
            .collect();
        numbers.extend(
            sample(rng, small_pool.len(), small_count)
                .into_iter()
                .filter_map(|idx| small_pool.get(idx).copied()),
        );

        let target = rng.random_range(TARGET_RANGE);
        debug!("Generated puzzle {:?} -> {}", numbers, target);

        Self { numbers, target }
    }
}
