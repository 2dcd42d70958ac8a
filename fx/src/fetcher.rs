//! Quote fetching with freshness reuse, snapshot fallback and a stale-base guard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use parking_lot::Mutex;
use pricelens_common::{constants, CurrencyCode, DurationExt, FxQuote};
use tracing::{debug, info, instrument, warn};

use crate::cache::QuoteCache;
use crate::error::FxError;
use crate::provider::RateProvider;
use crate::snapshot::StaticSnapshot;

/// Configuration for the quote fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Per-request timeout for the provider.
    pub fetch_timeout: Duration,
    /// How long a network quote satisfies requests for the same base.
    pub freshness_window: ChronoDuration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: constants::fetch_timeout().as_std(),
            freshness_window: constants::quote_freshness_window(),
        }
    }
}

/// Which base a commit must match, and the newest request already committed.
#[derive(Debug, Default)]
struct RaceGuard {
    desired: Option<CurrencyCode>,
    committed_seq: u64,
}

/// Obtains quotes for a base currency. Never fails: network errors degrade
/// to the static snapshot.
pub struct QuoteFetcher {
    provider: Arc<dyn RateProvider>,
    cache: QuoteCache,
    snapshot: StaticSnapshot,
    guard: Mutex<RaceGuard>,
    seq: AtomicU64,
    config: FetcherConfig,
}

impl QuoteFetcher {
    /// Create a fetcher with default configuration.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_config(provider, FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(provider: Arc<dyn RateProvider>, config: FetcherConfig) -> Self {
        Self {
            provider,
            cache: QuoteCache::with_window(config.freshness_window),
            snapshot: StaticSnapshot::new(),
            guard: Mutex::new(RaceGuard::default()),
            seq: AtomicU64::new(0),
            config,
        }
    }

    /// Get a quote expressed in `base`.
    ///
    /// A fresh network quote for the same base is reused without a request.
    /// Otherwise the provider is asked, and any failure is answered from the
    /// static snapshot. The result is committed only if `base` is the desired
    /// base when the request finishes. Asking does not change the desired
    /// base; only [`retarget`](Self::retarget) does, except that the first
    /// request on an untargeted fetcher claims it.
    #[instrument(skip_all, fields(base = %base, provider = self.provider.name()))]
    pub async fn get_quote(&self, base: &CurrencyCode) -> Arc<FxQuote> {
        if let Some(quote) = self.cache.fresh(base) {
            debug!("Using cached quote");
            return quote;
        }

        self.fetch_and_commit(base).await
    }

    /// Like [`get_quote`](Self::get_quote) but always asks the provider.
    #[instrument(skip_all, fields(base = %base, provider = self.provider.name()))]
    pub async fn refresh(&self, base: &CurrencyCode) -> Arc<FxQuote> {
        self.fetch_and_commit(base).await
    }

    async fn fetch_and_commit(&self, base: &CurrencyCode) -> Arc<FxQuote> {
        let ticket = self.begin(base);

        let quote = match tokio::time::timeout(self.config.fetch_timeout, self.provider.fetch(base)).await {
            Ok(Ok(quote)) => {
                info!(rates = quote.len(), timestamp = %quote.timestamp, "Fetched quote");
                quote
            }
            Ok(Err(e)) => self.fallback(base, &e),
            Err(_) => {
                let e = FxError::Timeout(self.config.fetch_timeout.as_millis() as u64);
                self.fallback(base, &e)
            }
        };

        self.finish(base, ticket, quote)
    }

    /// Change the desired base without fetching. Responses for any other base
    /// are returned to their callers but not committed.
    pub fn retarget(&self, base: &CurrencyCode) {
        let mut guard = self.guard.lock();
        if guard.desired.as_ref() != Some(base) {
            debug!(base = %base, "Retargeted fetcher");
            guard.desired = Some(base.clone());
        }
    }

    /// The base the next commit must match.
    pub fn desired_base(&self) -> Option<CurrencyCode> {
        self.guard.lock().desired.clone()
    }

    /// The last committed quote, whatever its age or base.
    pub fn current(&self) -> Option<Arc<FxQuote>> {
        self.cache.current()
    }

    /// Whether no fresh network quote exists for `base`.
    pub fn is_stale(&self, base: &CurrencyCode) -> bool {
        self.cache.fresh(base).is_none()
    }

    /// The underlying cache.
    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    fn begin(&self, base: &CurrencyCode) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut guard = self.guard.lock();
        if guard.desired.is_none() {
            debug!(base = %base, "Fetcher targeted by first request");
            guard.desired = Some(base.clone());
        }
        ticket
    }

    fn fallback(&self, base: &CurrencyCode, error: &FxError) -> FxQuote {
        warn!(
            error = %error,
            error_code = error.error_code(),
            retryable = error.is_retryable(),
            "Quote fetch failed, using static snapshot"
        );
        self.snapshot.quote_for(base)
    }

    fn finish(&self, base: &CurrencyCode, ticket: u64, quote: FxQuote) -> Arc<FxQuote> {
        let mut guard = self.guard.lock();

        if guard.desired.as_ref() != Some(base) {
            debug!(
                desired = ?guard.desired,
                "Discarding quote for a base that is no longer desired"
            );
            return Arc::new(quote);
        }

        if ticket < guard.committed_seq {
            debug!(ticket, committed = guard.committed_seq, "Discarding superseded quote");
            return Arc::new(quote);
        }

        guard.committed_seq = ticket;
        let source = quote.source;
        let committed = self.cache.commit(quote);
        debug!(source = %source, "Committed quote");
        committed
    }
}
