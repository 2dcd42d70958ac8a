//! Locale error types.

use std::time::Duration;

use thiserror::Error;

/// Why the locale-aware formatter declined an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Amount is not finite")]
    NonFinite,

    #[error("Amount out of range")]
    OutOfRange,
}

impl FormatError {
    /// Get error code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            FormatError::UnsupportedLocale(_) => "UNSUPPORTED_LOCALE",
            FormatError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            FormatError::NonFinite => "NON_FINITE",
            FormatError::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

/// Failures reported by platform location services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Location services unavailable: {0}")]
    Unavailable(String),

    #[error("Reverse geocoding failed: {0}")]
    Geocode(String),
}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;
