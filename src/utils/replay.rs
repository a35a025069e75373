use log::debug;

use crate::operation::{OperationStep, evaluate};
use crate::utils::errors::UtilsError;

/// Re-apply `steps` in order against the multiset `numbers`.
///
/// Each step removes its two operands from the multiset and inserts its
/// result. Returns the result of the last step, or `None` when there are
/// no steps.
///
/// # Errors
///
/// Returns an error if a step consumes a value that is not currently in the
/// multiset, or if its recorded result differs from evaluating it again.
pub fn replay(numbers: &[u64], steps: &[OperationStep]) -> Result<Option<u64>, UtilsError> {
    let mut pool = numbers.to_vec();
    let mut last = None;

    for (index, step) in steps.iter().enumerate() {
        take(&mut pool, step.left(), index)?;
        take(&mut pool, step.right(), index)?;

        if evaluate(step.left(), step.right(), step.operator()) != Some(step.result()) {
            return Err(UtilsError::InvalidStep { index, step: *step });
        }

        pool.push(step.result());
        last = Some(step.result());
    }

    debug!("Replayed {} steps, remaining pool {:?}", steps.len(), pool);
    Ok(last)
}

fn take(pool: &mut Vec<u64>, value: u64, index: usize) -> Result<(), UtilsError> {
    let position = pool
        .iter()
        .position(|&n| n == value)
        .ok_or(UtilsError::MissingOperand { index, value })?;
    pool.swap_remove(position);
    Ok(())
}
