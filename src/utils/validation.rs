use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any number is zero.
pub fn validate_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if let Some((position, &value)) = numbers.iter().enumerate().find(|(_, n)| **n == 0) {
        warn!("Number at position {} is not positive", position);
        return Err(UtilsError::NonPositiveNumber { position, value });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the target is zero.
pub fn validate_target(target: u64) -> Result<(), UtilsError> {
    if target == 0 {
        warn!("Target is not positive");
        return Err(UtilsError::NonPositiveTarget);
    }
    Ok(())
}
