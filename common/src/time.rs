//! Time utilities and constants for PriceLens.

use chrono::{DateTime, Duration, Utc};

/// Engine timing constants.
pub mod constants {
    use super::Duration;

    /// How long a fetched quote satisfies requests for the same base (5 minutes).
    pub fn quote_freshness_window() -> Duration {
        Duration::minutes(5)
    }

    /// Periodic refresh interval (3 minutes).
    pub fn refresh_interval() -> Duration {
        Duration::minutes(3)
    }

    /// Rate endpoint request timeout (5 seconds).
    pub fn fetch_timeout() -> Duration {
        Duration::seconds(5)
    }

    /// Geolocation position timeout (10 seconds).
    pub fn geolocation_timeout() -> Duration {
        Duration::seconds(10)
    }
}

/// A timestamp with timezone (always UTC).
pub type Timestamp = DateTime<Utc>;

/// Get the current timestamp.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Check whether `timestamp` lies less than `window` in the past.
pub fn is_within(timestamp: Timestamp, window: Duration) -> bool {
    now().signed_duration_since(timestamp) < window
}

/// Build a timestamp from epoch milliseconds, if representable.
pub fn from_epoch_millis(ms: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(ms)
}

/// Duration extensions for convenient construction.
pub trait DurationExt {
    fn as_std(&self) -> std::time::Duration;
}

impl DurationExt for Duration {
    fn as_std(&self) -> std::time::Duration {
        self.to_std().unwrap_or(std::time::Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_within() {
        let recent = now() - Duration::seconds(10);
        assert!(is_within(recent, constants::quote_freshness_window()));

        let old = now() - Duration::minutes(10);
        assert!(!is_within(old, constants::quote_freshness_window()));
    }

    #[test]
    fn test_from_epoch_millis() {
        let ts = from_epoch_millis(1_700_000_000_000).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_negative_duration_as_std_is_zero() {
        assert_eq!(Duration::seconds(-5).as_std(), std::time::Duration::ZERO);
        assert_eq!(Duration::seconds(3).as_std(), std::time::Duration::from_secs(3));
    }
}
