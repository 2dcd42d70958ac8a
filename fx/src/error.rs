//! FX error types.

use pricelens_common::CurrencyCode;
use thiserror::Error;

/// Errors a rate provider can report. None of these reach engine callers:
/// the fetcher recovers from every one of them with the static snapshot.
#[derive(Debug, Clone, Error)]
pub enum FxError {
    /// Transport-level failure (DNS, connect, TLS, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Rate request timed out after {0}ms")]
    Timeout(u64),

    /// The endpoint answered with a non-2xx status.
    #[error("Rate endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// The body could not be parsed or did not describe the requested base.
    #[error("Malformed rate table: {0}")]
    MalformedBody(String),

    /// Provider has no table for this base.
    #[error("Rates not available for base {0}")]
    RateNotAvailable(CurrencyCode),
}

impl FxError {
    /// Check if a later attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FxError::Network(_) | FxError::Timeout(_) => true,
            FxError::HttpStatus(status) => *status >= 500 || *status == 429,
            FxError::MalformedBody(_) | FxError::RateNotAvailable(_) => false,
        }
    }

    /// Get error code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::Network(_) => "NETWORK_ERROR",
            FxError::Timeout(_) => "TIMEOUT",
            FxError::HttpStatus(_) => "HTTP_STATUS",
            FxError::MalformedBody(_) => "MALFORMED_BODY",
            FxError::RateNotAvailable(_) => "RATE_NOT_AVAILABLE",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;

/// Why a conversion produced no number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No quote has been committed yet.
    #[error("No exchange-rate quote loaded")]
    NoQuote,

    /// The committed quote has no rate for this currency.
    #[error("No rate for {0}")]
    MissingRate(CurrencyCode),

    /// Arithmetic produced NaN or infinity.
    #[error("Conversion produced a non-finite value")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(FxError::Timeout(5000).is_retryable());
        assert!(FxError::HttpStatus(503).is_retryable());
        assert!(FxError::HttpStatus(429).is_retryable());
        assert!(!FxError::HttpStatus(404).is_retryable());
        assert!(!FxError::MalformedBody("eof".into()).is_retryable());
    }
}
