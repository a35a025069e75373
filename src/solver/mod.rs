mod budget;
mod cache;
pub mod constants;
mod core;
mod errors;
mod node;
mod parallel;
mod stats;
mod tracker;

pub use budget::CallBudget;
pub use cache::OperationCache;
pub use self::core::{SearchState, Solution, Solver, SolverConfig};
pub use errors::SolverError;
pub use node::SearchNode;
pub use stats::SolveStats;
pub use tracker::BestResultTracker;
