//! Random Countdown puzzles: six numbers and a three-digit target

mod errors;
mod generator;

pub use errors::PuzzleError;
pub use generator::{
    LARGE_NUMBERS, Puzzle, PuzzleConfig, SMALL_COPIES, SMALL_NUMBERS, TARGET_RANGE,
};
