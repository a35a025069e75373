use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::operation::Operator;
use crate::solver::budget::CallBudget;
use crate::solver::cache::OperationCache;
use crate::solver::core::{
    SearchContext, SearchState, Solution, Solver, log_outcome, prepare, sort_descending,
    trivial_solution,
};
use crate::solver::errors::SolverError;
use crate::solver::stats::SolveStats;

impl Solver {
    /// Like [`Solver::solve`], but explores the top-level (pair, operator)
    /// branches on the rayon thread pool.
    ///
    /// Branches share one call budget and get their own cache and tracker.
    /// The first exact match cancels the remaining branches, so which exact
    /// solution is reported may vary between runs; among the branches that
    /// did find one, the earliest in exploration order wins. Statistics are
    /// merged over all branches.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_parallel(&self, numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
        let started = Instant::now();
        let mut tracker = prepare(numbers, target)?;

        if let Some(solution) = trivial_solution(numbers, target) {
            return Ok(solution);
        }

        let budget = CallBudget::new(self.config().max_calls);
        let mut working = numbers.to_vec();
        sort_descending(&mut working);

        let branches = top_level_branches(working.len());
        info!(
            "Searching {:?} for {} across {} parallel branches",
            numbers,
            target,
            branches.len()
        );

        let outcomes: Vec<(Solution, OperationCache)> = branches
            .into_par_iter()
            .map(|(pair, operator)| {
                let mut context = SearchContext::new(tracker.clone(), &budget);
                context.attempt(&working, pair, operator, &[]);
                if context.state() == SearchState::ExactFound {
                    budget.cancel();
                }
                context.finish(started.elapsed())
            })
            .collect();

        let mut cache = OperationCache::new();
        let mut exact = None;
        let mut exhausted = false;

        for (branch, branch_cache) in outcomes {
            cache.absorb(branch_cache);
            match branch.state {
                SearchState::ExactFound => {
                    if exact.is_none() {
                        exact = Some(branch.node);
                    }
                }
                state => {
                    exhausted |= state == SearchState::BudgetExhausted;
                    tracker.consider(&branch.node);
                }
            }
        }
        debug!("Merged branch caches into {} entries", cache.len());

        let (state, node) = match exact {
            Some(node) => (SearchState::ExactFound, node),
            None if exhausted => (SearchState::BudgetExhausted, tracker.into_best()),
            None => (SearchState::SpaceExhausted, tracker.into_best()),
        };

        let solution = Solution {
            state,
            node,
            stats: SolveStats {
                attempts: budget.consumed(),
                cache_size: cache.len(),
                cache_hits: cache.hits(),
                most_common_operation: cache.most_common(),
                elapsed: started.elapsed(),
            },
        };
        log_outcome(&solution);
        Ok(solution)
    }
}

/// Every (pair, operator) combination tried by the top search frame, in
/// exploration order.
fn top_level_branches(len: usize) -> Vec<((usize, usize), Operator)> {
    (0..len)
        .flat_map(|i| ((i + 1)..len).map(move |j| (i, j)))
        .flat_map(|pair| Operator::ALL.into_iter().map(move |op| (pair, op)))
        .collect()
}
