use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Insufficient input: at least two numbers are required, got {count}")]
    InsufficientInput { count: usize },
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
}
