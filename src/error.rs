use thiserror::Error;

/// Precondition failures reported before any enumeration work starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("Invalid denomination: {value} (denominations must be positive)")]
    InvalidDenomination { value: i64 },

    #[error("Invalid target amount {target}: {reason}")]
    InvalidTarget { target: i64, reason: &'static str },
}

impl EnumerationError {
    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            EnumerationError::InvalidDenomination { .. } => "InvalidDenomination",
            EnumerationError::InvalidTarget { .. } => "InvalidTarget",
        }
    }
}

/// Result alias for enumeration operations
pub type Result<T> = std::result::Result<T, EnumerationError>;
