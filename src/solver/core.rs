use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

use crate::operation::{OperationStep, Operator};
use crate::solver::budget::CallBudget;
use crate::solver::cache::OperationCache;
use crate::solver::constants::{DEFAULT_MAX_CALLS, MIN_NUMBERS};
use crate::solver::errors::SolverError;
use crate::solver::node::SearchNode;
use crate::solver::stats::SolveStats;
use crate::solver::tracker::BestResultTracker;
use crate::utils::{validate_numbers, validate_target};

/// Configuration for a solve call
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub max_calls: u64,
}

impl SolverConfig {
    pub fn with_max_calls(max_calls: u64) -> Self {
        Self { max_calls }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_calls: DEFAULT_MAX_CALLS,
        }
    }
}

/// Where the search stands. Every solve call starts in `Searching` and ends
/// in one of the three other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    ExactFound,
    BudgetExhausted,
    SpaceExhausted,
}

/// Outcome of a solve call: the exact match, or the closest node found
#[derive(Debug, Clone)]
pub struct Solution {
    pub state: SearchState,
    pub node: SearchNode,
    pub stats: SolveStats,
}

impl Solution {
    pub fn found_exact(&self) -> bool {
        self.state == SearchState::ExactFound
    }
}

/// State shared by every recursion frame of one search
pub(crate) struct SearchContext<'a> {
    target: u64,
    budget: &'a CallBudget,
    cache: OperationCache,
    tracker: BestResultTracker,
    state: SearchState,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(tracker: BestResultTracker, budget: &'a CallBudget) -> Self {
        Self {
            target: tracker.target(),
            budget,
            cache: OperationCache::new(),
            tracker,
            state: SearchState::Searching,
        }
    }

    pub(crate) fn state(&self) -> SearchState {
        self.state
    }

    /// Try every pair of positions and every operator on `working`,
    /// recursing into each reduced multiset.
    pub(crate) fn search(&mut self, working: &[u64], history: &[OperationStep]) {
        if working.len() < MIN_NUMBERS {
            return;
        }

        for i in 0..working.len() {
            for j in (i + 1)..working.len() {
                for operator in Operator::ALL {
                    self.attempt(working, (i, j), operator, history);
                    if self.state != SearchState::Searching {
                        return;
                    }
                }
            }
        }
    }

    /// Combine `working[i]` and `working[j]` with `operator`, then search the
    /// reduced multiset.
    pub(crate) fn attempt(
        &mut self,
        working: &[u64],
        (i, j): (usize, usize),
        operator: Operator,
        history: &[OperationStep],
    ) {
        let (Some(&left), Some(&right)) = (working.get(i), working.get(j)) else {
            return;
        };

        if !self.budget.try_consume() {
            debug!(
                "Attempt denied after {} of {} calls",
                self.budget.consumed(),
                self.budget.max_calls()
            );
            self.state = SearchState::BudgetExhausted;
            return;
        }

        let Some(result) = self.cache.get_or_compute(left, right, operator) else {
            return;
        };
        trace!("{} {} {} = {}", left, operator, right, result);

        let node = SearchNode::branch(history, OperationStep::new(left, right, operator, result));
        self.tracker.consider(&node);

        if result == self.target {
            info!("Exact match found after {} steps", node.steps().len());
            self.state = SearchState::ExactFound;
            return;
        }

        let reduced = reduce(working, i, j, result);
        self.search(&reduced, node.steps());
    }

    /// Settle the final state and collect statistics.
    pub(crate) fn finish(self, elapsed: Duration) -> (Solution, OperationCache) {
        let state = match self.state {
            SearchState::Searching => SearchState::SpaceExhausted,
            other => other,
        };
        let stats = SolveStats {
            attempts: self.budget.consumed(),
            cache_size: self.cache.len(),
            cache_hits: self.cache.hits(),
            most_common_operation: self.cache.most_common(),
            elapsed,
        };
        let solution = Solution {
            state,
            node: self.tracker.into_best(),
            stats,
        };
        (solution, self.cache)
    }
}

/// Remove positions `i` and `j`, append `result`, keep descending order.
fn reduce(working: &[u64], i: usize, j: usize, result: u64) -> Vec<u64> {
    let mut next: Vec<u64> = working
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != i && *k != j)
        .map(|(_, &n)| n)
        .collect();
    next.push(result);
    sort_descending(&mut next);
    next
}

pub(crate) fn sort_descending(numbers: &mut [u64]) {
    numbers.sort_unstable_by(|a, b| b.cmp(a));
}

/// Main solver for reaching a target from a multiset of numbers
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for a sequence of operations combining `numbers` into `target`.
    ///
    /// Stops at the first exact match in exploration order. Without one, the
    /// closest value found is returned once the search space or the call
    /// budget runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two numbers are given, or if any
    /// number or the target is zero.
    pub fn solve(&self, numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
        let started = Instant::now();
        let tracker = prepare(numbers, target)?;

        if let Some(solution) = trivial_solution(numbers, target) {
            return Ok(solution);
        }

        info!(
            "Searching {:?} for {} (max {} calls)",
            numbers, target, self.config.max_calls
        );

        let budget = CallBudget::new(self.config.max_calls);
        let mut working = numbers.to_vec();
        sort_descending(&mut working);

        let mut context = SearchContext::new(tracker, &budget);
        context.search(&working, &[]);

        let (solution, _) = context.finish(started.elapsed());
        log_outcome(&solution);
        Ok(solution)
    }
}

/// Validate input and seed the tracker with the closest input number.
pub(crate) fn prepare(numbers: &[u64], target: u64) -> Result<BestResultTracker, SolverError> {
    if numbers.len() < MIN_NUMBERS {
        warn!("Need at least {} numbers, got {}", MIN_NUMBERS, numbers.len());
        return Err(SolverError::InsufficientInput {
            count: numbers.len(),
        });
    }
    validate_numbers(numbers)?;
    validate_target(target)?;

    BestResultTracker::seeded(numbers, target).ok_or(SolverError::InsufficientInput {
        count: numbers.len(),
    })
}

/// The target is one of the inputs: no operation needed.
pub(crate) fn trivial_solution(numbers: &[u64], target: u64) -> Option<Solution> {
    if !numbers.contains(&target) {
        return None;
    }
    info!("Trivial solution: {} is in the numbers", target);
    Some(Solution {
        state: SearchState::ExactFound,
        node: SearchNode::leaf(target),
        stats: SolveStats::default(),
    })
}

pub(crate) fn log_outcome(solution: &Solution) {
    match solution.state {
        SearchState::ExactFound => info!(
            "Solved in {} attempts ({:?})",
            solution.stats.attempts, solution.stats.elapsed
        ),
        SearchState::BudgetExhausted => warn!(
            "Call budget exhausted after {} attempts; closest value {}",
            solution.stats.attempts,
            solution.node.value()
        ),
        state => info!(
            "No exact match ({:?}); closest value {} after {} attempts",
            state,
            solution.node.value(),
            solution.stats.attempts
        ),
    }
}
