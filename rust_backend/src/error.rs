//! Error types for decision engine operations.

/// Result type for decision engine operations
pub type DecisionResult<T> = Result<T, DecisionError>;

/// Error type for decision engine operations
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    /// The forecast contained no windows, so there is no best window to pick.
    #[error("Forecast must contain at least one window")]
    EmptyForecast,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl DecisionError {
    /// Whether the error was caused by the caller (4xx-equivalent).
    pub fn is_caller_error(&self) -> bool {
        match self {
            DecisionError::EmptyForecast | DecisionError::InvalidInput(_) => true,
            DecisionError::Provider(_) => false,
        }
    }
}
