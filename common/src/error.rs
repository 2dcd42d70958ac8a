//! Error types shared across PriceLens crates.

use thiserror::Error;

/// Errors raised when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Not a two-letter ISO 3166-1 country code.
    #[error("Invalid country code: {0:?}")]
    InvalidCountry(String),

    /// Unknown region key.
    #[error("Unknown region: {0:?}")]
    UnknownRegion(String),
}

impl CodeError {
    /// Get error code for log fields and CLI output.
    pub fn error_code(&self) -> &'static str {
        match self {
            CodeError::InvalidCountry(_) => "INVALID_COUNTRY",
            CodeError::UnknownRegion(_) => "UNKNOWN_REGION",
        }
    }
}
