//! Exchange-rate quote types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::identifiers::CurrencyCode;

/// Where a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    /// Fetched from the rate endpoint.
    Network,
    /// Synthesized from the compiled-in snapshot table.
    StaticSnapshot,
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteSource::Network => f.write_str("network"),
            QuoteSource::StaticSnapshot => f.write_str("static_snapshot"),
        }
    }
}

/// A rate table relative to one base currency.
///
/// `rates[code]` is "units of `code` per 1 unit of `base`". The base always
/// maps to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    /// Currency the table is expressed in.
    pub base: CurrencyCode,
    /// When the rates were published (or fetched, if the source gave no time).
    pub timestamp: DateTime<Utc>,
    /// Target currency to rate.
    pub rates: HashMap<CurrencyCode, f64>,
    /// Origin of the table.
    pub source: QuoteSource,
}

impl FxQuote {
    /// Create a new quote. Entries that are not finite and positive are
    /// dropped, and the base is pinned to parity.
    pub fn new(
        base: CurrencyCode,
        timestamp: DateTime<Utc>,
        rates: impl IntoIterator<Item = (CurrencyCode, f64)>,
        source: QuoteSource,
    ) -> Self {
        let mut rates: HashMap<CurrencyCode, f64> = rates
            .into_iter()
            .filter(|(_, rate)| is_usable_rate(*rate))
            .collect();
        rates.insert(base.clone(), 1.0);

        Self {
            base,
            timestamp,
            rates,
            source,
        }
    }

    /// Rate for a currency, if present.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Whether the quote carries a rate for `code`.
    pub fn has_rate(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Whether the quote came from the network rather than the snapshot.
    pub fn is_live(&self) -> bool {
        self.source == QuoteSource::Network
    }

    /// Number of currencies in the table, base included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// A quote always contains at least its base.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// A rate is usable only if it is finite and strictly positive.
pub fn is_usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_pins_base_to_parity() {
        let quote = FxQuote::new(
            CurrencyCode::usd(),
            Utc::now(),
            vec![(CurrencyCode::usd(), 0.5), (CurrencyCode::eur(), 0.85)],
            QuoteSource::Network,
        );

        assert_eq!(quote.rate(&CurrencyCode::usd()), Some(1.0));
        assert_eq!(quote.rate(&CurrencyCode::eur()), Some(0.85));
    }

    #[test]
    fn test_quote_drops_unusable_rates() {
        let quote = FxQuote::new(
            CurrencyCode::usd(),
            Utc::now(),
            vec![
                (CurrencyCode::eur(), f64::NAN),
                (CurrencyCode::gbp(), 0.0),
                (CurrencyCode::jpy(), -3.0),
            ],
            QuoteSource::StaticSnapshot,
        );

        assert_eq!(quote.len(), 1);
        assert!(!quote.has_rate(&CurrencyCode::eur()));
        assert!(!quote.is_live());
    }
}
