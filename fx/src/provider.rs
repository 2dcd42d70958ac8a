//! Rate provider trait and test double.

use async_trait::async_trait;
use pricelens_common::{CurrencyCode, FxQuote};

use crate::error::FxResult;

/// Source of rate tables relative to a requested base.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch the full rate table expressed in `base`.
    async fn fetch(&self, base: &CurrencyCode) -> FxResult<FxQuote>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockRateProvider;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use dashmap::DashMap;
    use parking_lot::Mutex;
    use pricelens_common::{CurrencyCode, FxQuote, QuoteSource};

    use super::RateProvider;
    use crate::error::{FxError, FxResult};

    /// Scripted provider: fixed tables per base, optional delays and failures,
    /// and a call counter for cache assertions.
    pub struct MockRateProvider {
        name: String,
        tables: DashMap<CurrencyCode, HashMap<CurrencyCode, f64>>,
        delays: DashMap<CurrencyCode, Duration>,
        failure: Mutex<Option<FxError>>,
        calls: AtomicUsize,
        calls_by_base: DashMap<CurrencyCode, usize>,
    }

    impl MockRateProvider {
        /// Create a new mock provider with no tables.
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                tables: DashMap::new(),
                delays: DashMap::new(),
                failure: Mutex::new(None),
                calls: AtomicUsize::new(0),
                calls_by_base: DashMap::new(),
            }
        }

        /// Set the table returned for `base`.
        pub fn set_rates(&self, base: &str, rates: &[(&str, f64)]) {
            let table = rates
                .iter()
                .map(|(code, rate)| (CurrencyCode::new(*code), *rate))
                .collect();
            self.tables.insert(CurrencyCode::new(base), table);
        }

        /// Builder form of [`set_rates`](Self::set_rates).
        pub fn with_rates(self, base: &str, rates: &[(&str, f64)]) -> Self {
            self.set_rates(base, rates);
            self
        }

        /// Delay every fetch for `base` by `delay`.
        pub fn set_delay(&self, base: &str, delay: Duration) {
            self.delays.insert(CurrencyCode::new(base), delay);
        }

        /// Make every fetch fail with `error` (or succeed again with `None`).
        pub fn fail_with(&self, error: Option<FxError>) {
            *self.failure.lock() = error;
        }

        /// Total fetches issued.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Fetches issued for one base.
        pub fn calls_for(&self, base: &str) -> usize {
            self.calls_by_base
                .get(&CurrencyCode::new(base))
                .map(|c| *c)
                .unwrap_or(0)
        }
    }

    #[async_trait]
    impl RateProvider for MockRateProvider {
        fn name(&self) -> &str {
            &self.name
        }

        async fn fetch(&self, base: &CurrencyCode) -> FxResult<FxQuote> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.calls_by_base.entry(base.clone()).or_insert(0) += 1;

            let delay = self.delays.get(base).map(|d| *d);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let failure = self.failure.lock().clone();
            if let Some(error) = failure {
                return Err(error);
            }

            let table = self
                .tables
                .get(base)
                .map(|t| t.clone())
                .ok_or_else(|| FxError::RateNotAvailable(base.clone()))?;

            Ok(FxQuote::new(base.clone(), Utc::now(), table, QuoteSource::Network))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;

    #[tokio::test]
    async fn test_mock_provider() {
        let provider = MockRateProvider::new("test").with_rates("USD", &[("EUR", 0.85)]);

        let quote = provider.fetch(&CurrencyCode::usd()).await.unwrap();

        assert_eq!(quote.base, CurrencyCode::usd());
        assert_eq!(quote.rate(&CurrencyCode::eur()), Some(0.85));
        assert_eq!(provider.calls(), 1);
        assert_eq!(provider.calls_for("USD"), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_unknown_base() {
        let provider = MockRateProvider::new("test");

        let result = provider.fetch(&CurrencyCode::gbp()).await;

        assert!(matches!(result, Err(FxError::RateNotAvailable(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_failure_injection() {
        let provider = MockRateProvider::new("test").with_rates("USD", &[("EUR", 0.85)]);
        provider.fail_with(Some(FxError::HttpStatus(502)));

        assert!(provider.fetch(&CurrencyCode::usd()).await.is_err());

        provider.fail_with(None);
        assert!(provider.fetch(&CurrencyCode::usd()).await.is_ok());
        assert_eq!(provider.calls(), 2);
    }
}
