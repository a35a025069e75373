use thiserror::Error;

/// Reasons an operation does not yield a usable number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder: {left} / {right}")]
    InexactDivision { left: u64, right: u64 },
    #[error("Result is not strictly positive")]
    NonPositive,
    #[error("Result does not fit in 64 bits")]
    Overflow,
}
