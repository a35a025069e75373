use thiserror::Error;

use crate::operation::OperationStep;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Numbers must be positive integers, got {value} at position {position}")]
    NonPositiveNumber { position: usize, value: u64 },
    #[error("Target must be a positive integer")]
    NonPositiveTarget,
    #[error("Step {index} uses {value}, which is not available")]
    MissingOperand { index: usize, value: u64 },
    #[error("Step {index} does not evaluate as recorded: {step}")]
    InvalidStep { index: usize, step: OperationStep },
}
