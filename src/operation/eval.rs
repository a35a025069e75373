use log::trace;

use crate::operation::ast::Operator;
use crate::operation::errors::OperationError;

impl Operator {
    /// Apply the operator to the ordered pair `(left, right)` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error unless the result is a strictly positive integer:
    /// - Division by zero or division with a remainder
    /// - Subtraction yielding zero or a negative value
    /// - Any zero result
    /// - Overflow of `u64`
    pub fn apply(self, left: u64, right: u64) -> Result<u64, OperationError> {
        let raw = match self {
            Operator::Mul => left.checked_mul(right).ok_or(OperationError::Overflow)?,
            Operator::Add => left.checked_add(right).ok_or(OperationError::Overflow)?,
            Operator::Sub => {
                if left <= right {
                    return Err(OperationError::NonPositive);
                }
                left - right
            }
            Operator::Div => {
                if right == 0 {
                    return Err(OperationError::DivisionByZero);
                }
                if left % right != 0 {
                    return Err(OperationError::InexactDivision { left, right });
                }
                left / right
            }
        };

        if raw == 0 {
            return Err(OperationError::NonPositive);
        }
        Ok(raw)
    }
}

/// Evaluate `left op right`, keeping only strictly positive integer results.
pub fn evaluate(left: u64, right: u64, operator: Operator) -> Option<u64> {
    match operator.apply(left, right) {
        Ok(value) => Some(value),
        Err(e) => {
            trace!(
                "Rejected {} {} {}: {}",
                left,
                operator.symbol(),
                right,
                e
            );
            None
        }
    }
}
