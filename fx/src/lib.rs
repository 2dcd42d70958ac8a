//! PriceLens FX
//!
//! Exchange-rate quotes for display-currency conversion.
//!
//! # Features
//!
//! - Pluggable rate providers (HTTP endpoint, scripted mock)
//! - Single-slot quote cache with a freshness window
//! - Static snapshot fallback when the network fails
//! - Stale-base guard for concurrent fetches
//! - Pivot conversion through the quote's base
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pricelens_fx::{convert, HttpRateProvider, QuoteFetcher};
//! use pricelens_common::CurrencyCode;
//!
//! let provider = Arc::new(HttpRateProvider::new("https://fx.example.com", timeout));
//! let fetcher = QuoteFetcher::new(provider);
//!
//! let quote = fetcher.get_quote(&CurrencyCode::usd()).await;
//! let eur = convert(Some(&quote), 100.0, &CurrencyCode::usd(), &CurrencyCode::eur());
//! ```

pub mod cache;
pub mod conversion;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod provider;
pub mod snapshot;

pub use cache::QuoteCache;
pub use conversion::{convert, try_convert};
pub use error::{ConversionError, FxError, FxResult};
pub use fetcher::{FetcherConfig, QuoteFetcher};
pub use http::{parse_rate_table, HttpRateProvider};
pub use provider::RateProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
pub use snapshot::StaticSnapshot;
