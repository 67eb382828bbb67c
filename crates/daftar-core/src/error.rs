use thiserror::Error;

/// Typed failures raised by core ledger operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No open accounting period")]
    NoOpenPeriod,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rejects negative amounts. Invalid input is never clamped.
pub(crate) fn ensure_non_negative(amount: i64, field: &str) -> Result<(), CoreError> {
    if amount < 0 {
        Err(CoreError::Validation(format!(
            "{field} must be non-negative, got {amount}"
        )))
    } else {
        Ok(())
    }
}
