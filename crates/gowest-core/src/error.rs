use thiserror::Error;

/// Errors raised by the reporter core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A failure described only by its message.
    #[error("{0}")]
    Custom(String),

    /// Reporting past this limit would overflow `u64`.
    #[error("Limit {limit} exceeds the maximum of {max}")]
    LimitTooLarge { limit: u64, max: u64 },
}

impl CoreError {
    pub fn custom(message: impl Into<String>) -> Self {
        CoreError::Custom(message.into())
    }
}
