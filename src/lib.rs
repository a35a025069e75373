//! Countdown solver - A library for reaching a target number from a multiset of numbers
//!
//! This library searches every way of repeatedly combining two numbers with
//! `*`, `+`, `-` or `/` (positive integer results only) until the target is
//! reached, or reports the closest value found within a bounded number of
//! operation attempts.

pub mod operation;
pub mod puzzle;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use operation::{OperationError, OperationKey, OperationStep, Operator, evaluate};
pub use puzzle::{Puzzle, PuzzleConfig, PuzzleError};
pub use solver::{
    BestResultTracker, CallBudget, OperationCache, SearchNode, SearchState, Solution, SolveStats,
    Solver, SolverConfig, SolverError,
};
pub use utils::{UtilsError, replay};

/// Combine `numbers` into `target` using the default call budget
///
/// This is a convenience function that creates a default solver and runs a
/// sequential search.
///
/// # Arguments
///
/// * `numbers` - The numbers available for combination, at least two
/// * `target` - The value to reach
///
/// # Returns
///
/// * `Ok(Solution)` - The exact match if one was found, otherwise the closest
///   node together with the reason the search stopped
/// * `Err(SolverError)` - If the input is rejected
///
/// # Errors
///
/// This function will return an error if:
/// * Fewer than two numbers are given
/// * Any number or the target is zero
///
/// # Examples
///
/// ```
/// use countdown_solver::solve;
///
/// match solve(&[100, 75, 50, 25, 6, 3], 952) {
///     Ok(solution) if solution.found_exact() => println!("Found:\n{}", solution.node),
///     Ok(solution) => println!("Closest: {}", solution.node.value()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
    Solver::default().solve(numbers, target)
}
