//! Engine configuration.

use std::time::Duration;

use pricelens_common::{constants, CurrencyCode, DurationExt};
use pricelens_fx::FetcherConfig;
use pricelens_registry::lookup;

/// Configuration for the currency engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// URL prefix of the rate endpoint (`{endpoint}/rates?base=CODE`).
    pub rate_endpoint: String,
    /// Rate request timeout.
    pub fetch_timeout: Duration,
    /// How long a network quote is reused for the same base.
    pub freshness_window: Duration,
    /// Periodic refresh interval.
    pub refresh_interval: Duration,
    /// Bound on the GPS position request during detection.
    pub geolocation_timeout: Duration,
    /// Primary currency when detection is disabled.
    pub default_currency: CurrencyCode,
    /// Locale passed to the locale-aware formatter when callers give none.
    pub default_locale: Option<String>,
    /// Whether a first run detects the user's currency.
    pub auto_detect: bool,
    /// Key preferences are persisted under.
    pub preferences_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate_endpoint: "https://rates.pricelens.local".to_string(),
            fetch_timeout: constants::fetch_timeout().as_std(),
            freshness_window: constants::quote_freshness_window().as_std(),
            refresh_interval: constants::refresh_interval().as_std(),
            geolocation_timeout: constants::geolocation_timeout().as_std(),
            default_currency: CurrencyCode::usd(),
            default_locale: None,
            auto_detect: true,
            preferences_key: "currency_preferences".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("PRICELENS_RATE_ENDPOINT") {
            config.rate_endpoint = endpoint;
        }

        if let Some(ms) = env_parse::<u64>("PRICELENS_FETCH_TIMEOUT_MS") {
            config.fetch_timeout = Duration::from_millis(ms);
        }

        if let Some(secs) = env_parse::<u64>("PRICELENS_REFRESH_SECS") {
            config.refresh_interval = Duration::from_secs(secs);
        }

        if let Ok(code) = std::env::var("PRICELENS_DEFAULT_CURRENCY") {
            config.default_currency = CurrencyCode::new(code);
        }

        if let Ok(locale) = std::env::var("PRICELENS_LOCALE") {
            if !locale.trim().is_empty() {
                config.default_locale = Some(locale);
            }
        }

        if let Some(flag) = std::env::var("PRICELENS_AUTO_DETECT").ok().as_deref().and_then(parse_flag) {
            config.auto_detect = flag;
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rate_endpoint.is_empty() {
            return Err("Rate endpoint cannot be empty".to_string());
        }

        if !self.rate_endpoint.starts_with("http://") && !self.rate_endpoint.starts_with("https://") {
            return Err(format!("Rate endpoint must be an http(s) URL: {}", self.rate_endpoint));
        }

        if self.fetch_timeout.is_zero() {
            return Err("Fetch timeout cannot be zero".to_string());
        }

        if self.refresh_interval.is_zero() {
            return Err("Refresh interval cannot be zero".to_string());
        }

        if self.preferences_key.is_empty() {
            return Err("Preferences key cannot be empty".to_string());
        }

        match lookup(self.default_currency.as_str()) {
            None => Err(format!("Unknown default currency: {}", self.default_currency)),
            Some(meta) if !meta.is_selectable() => Err(format!(
                "Default currency {} is display-only",
                self.default_currency
            )),
            Some(_) => Ok(()),
        }
    }

    /// Settings for the quote fetcher.
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            fetch_timeout: self.fetch_timeout,
            freshness_window: chrono::Duration::from_std(self.freshness_window)
                .unwrap_or_else(|_| constants::quote_freshness_window()),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.refresh_interval, Duration::from_secs(180));
        assert_eq!(config.freshness_window, Duration::from_secs(300));
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.geolocation_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EngineConfig {
            rate_endpoint: "ftp://rates".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            default_currency: CurrencyCode::new("BTC"),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            default_currency: CurrencyCode::new("ZZZ"),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            refresh_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fetcher_config() {
        let config = EngineConfig {
            freshness_window: Duration::from_secs(60),
            ..Default::default()
        };

        let fetcher = config.fetcher_config();

        assert_eq!(fetcher.freshness_window, chrono::Duration::seconds(60));
        assert_eq!(fetcher.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
