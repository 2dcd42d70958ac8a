//! Single-slot quote cache with a freshness window.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use pricelens_common::{constants, CurrencyCode, FxQuote};
use tracing::debug;

/// The committed quote and when it was committed.
#[derive(Debug, Clone)]
struct CacheEntry {
    quote: Arc<FxQuote>,
    cached_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(quote: FxQuote) -> Self {
        Self {
            quote: Arc::new(quote),
            cached_at: Utc::now(),
        }
    }

    /// Fresh means: same base, fetched from the network, and younger than `window`.
    fn is_fresh_for(&self, base: &CurrencyCode, window: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);
        &self.quote.base == base && self.quote.is_live() && age < window
    }
}

/// Holds at most one quote. A new commit replaces the previous one.
pub struct QuoteCache {
    slot: RwLock<Option<CacheEntry>>,
    window: Duration,
}

impl QuoteCache {
    /// Create a cache using the default freshness window.
    pub fn new() -> Self {
        Self::with_window(constants::quote_freshness_window())
    }

    /// Create a cache with a custom freshness window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            window,
        }
    }

    /// The committed quote, if it is fresh for `base`.
    pub fn fresh(&self, base: &CurrencyCode) -> Option<Arc<FxQuote>> {
        let slot = self.slot.read();
        match slot.as_ref() {
            Some(entry) if entry.is_fresh_for(base, self.window) => {
                debug!(base = %base, "Cache hit");
                Some(entry.quote.clone())
            }
            Some(_) => {
                debug!(base = %base, "Cache entry stale or for another base");
                None
            }
            None => {
                debug!(base = %base, "Cache miss");
                None
            }
        }
    }

    /// The committed quote regardless of age or base.
    pub fn current(&self) -> Option<Arc<FxQuote>> {
        self.slot.read().as_ref().map(|entry| entry.quote.clone())
    }

    /// Replace the committed quote.
    pub fn commit(&self, quote: FxQuote) -> Arc<FxQuote> {
        let entry = CacheEntry::new(quote);
        let quote = entry.quote.clone();
        *self.slot.write() = Some(entry);
        quote
    }

    /// Drop the committed quote.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Base of the committed quote.
    pub fn base(&self) -> Option<CurrencyCode> {
        self.slot.read().as_ref().map(|entry| entry.quote.base.clone())
    }

    /// When the committed quote was stored.
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().as_ref().map(|entry| entry.cached_at)
    }

    /// Freshness window in effect.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}
