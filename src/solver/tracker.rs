use log::debug;

use crate::solver::node::SearchNode;

/// Holds the node closest to the target seen so far.
#[derive(Debug, Clone)]
pub struct BestResultTracker {
    target: u64,
    best: SearchNode,
}

impl BestResultTracker {
    /// Seed with the input number closest to `target`, the first one on ties.
    /// Returns `None` for an empty input.
    pub fn seeded(numbers: &[u64], target: u64) -> Option<Self> {
        let closest = numbers
            .iter()
            .copied()
            .min_by_key(|n| n.abs_diff(target))?;
        Some(Self {
            target,
            best: SearchNode::leaf(closest),
        })
    }

    /// Replace the incumbent if `node` is strictly closer to the target.
    pub fn consider(&mut self, node: &SearchNode) -> bool {
        if node.distance_to(self.target) < self.distance() {
            debug!(
                "New closest value {} (distance {})",
                node.value(),
                node.distance_to(self.target)
            );
            self.best = node.clone();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &SearchNode {
        &self.best
    }

    pub fn distance(&self) -> u64 {
        self.best.distance_to(self.target)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn into_best(self) -> SearchNode {
        self.best
    }
}
