//! Engine error types.

use thiserror::Error;

/// Failures of a preference store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced to engine callers.
///
/// Only configuration and explicit user selections can fail; everything
/// else degrades to a fallback.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Currency {0} is display-only and cannot be selected")]
    NotSelectable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Get error code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            EngineError::NotSelectable(_) => "NOT_SELECTABLE",
            EngineError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EngineError::UnknownCurrency("ZZZ".into()).error_code(), "UNKNOWN_CURRENCY");
        assert_eq!(EngineError::NotSelectable("BTC".into()).error_code(), "NOT_SELECTABLE");
        assert_eq!(EngineError::Config("bad".into()).error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_store_error_from_io() {
        let err: StoreError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
