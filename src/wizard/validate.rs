//! Per-step input validation.

use thiserror::Error;

use crate::catalog::Sport;

/// Rejected wizard input. The wizard stays on the same step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text does not match any sport label")]
    UnknownSport,

    #[error("Title is empty")]
    EmptyTitle,

    #[error("Location is empty")]
    EmptyLocation,

    #[error("Schedule is empty")]
    EmptySchedule,

    #[error("Deposit is not a non-negative integer")]
    InvalidDeposit,
}

/// Sport picked from the reply keyboard.
pub fn sport(text: &str) -> Result<Sport, ValidationError> {
    Sport::from_label(text).ok_or(ValidationError::UnknownSport)
}

/// Trimmed, non-empty text.
pub fn required(text: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

/// Deposit in tenge. Digit groups separated by spaces are accepted ("1 500").
pub fn deposit(text: &str) -> Result<u32, ValidationError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse().map_err(|_| ValidationError::InvalidDeposit)
}
