use std::fmt;

use crate::operation::OperationStep;

/// A point in the search tree: the steps taken from the input numbers and
/// the value the last step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    steps: Vec<OperationStep>,
    value: u64,
}

impl SearchNode {
    /// A node for an input number, reached without any operation.
    pub fn leaf(value: u64) -> Self {
        Self {
            steps: Vec::new(),
            value,
        }
    }

    /// A new node whose history is `history` followed by `step`.
    /// The caller's history is copied, never shared.
    pub fn branch(history: &[OperationStep], step: OperationStep) -> Self {
        let mut steps = Vec::with_capacity(history.len() + 1);
        steps.extend_from_slice(history);
        steps.push(step);
        Self {
            steps,
            value: step.result(),
        }
    }

    pub fn extend(&self, step: OperationStep) -> Self {
        Self::branch(&self.steps, step)
    }

    pub fn steps(&self) -> &[OperationStep] {
        &self.steps
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn distance_to(&self, target: u64) -> u64 {
        self.value.abs_diff(target)
    }

    pub fn is_exact(&self, target: u64) -> bool {
        self.value == target
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "{}", self.value);
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "Step {}: {}", idx + 1, step)?;
        }
        Ok(())
    }
}
