//! Compiled-in fallback rate table.

use chrono::{DateTime, Utc};
use pricelens_common::{CurrencyCode, FxQuote, QuoteSource};
use tracing::warn;

/// Publication time of [`USD_RATES`] (2025-06-01T00:00:00Z).
const SNAPSHOT_EPOCH_SECS: i64 = 1_748_736_000;

/// Units of each currency per 1 USD.
static USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("CAD", 1.37),
    ("MXN", 19.2),
    ("BRL", 5.6),
    ("ARS", 1150.0),
    ("CLP", 940.0),
    ("COP", 4150.0),
    ("PEN", 3.6),
    ("UYU", 41.0),
    ("PYG", 7980.0),
    ("BOB", 6.91),
    ("VES", 95.0),
    ("GTQ", 7.68),
    ("HNL", 26.1),
    ("NIO", 36.8),
    ("CRC", 505.0),
    ("PAB", 1.0),
    ("DOP", 59.0),
    ("JMD", 159.0),
    ("TTD", 6.78),
    ("BBD", 2.0),
    ("BSD", 1.0),
    ("BZD", 2.0),
    ("HTG", 131.0),
    ("CUP", 24.0),
    ("XCD", 2.7),
    ("AWG", 1.79),
    ("ANG", 1.79),
    ("KYD", 0.82),
    ("BMD", 1.0),
    ("GYD", 209.0),
    ("SRD", 37.0),
    ("FKP", 0.74),
    ("EUR", 0.88),
    ("GBP", 0.74),
    ("CHF", 0.82),
    ("SEK", 9.6),
    ("NOK", 10.1),
    ("DKK", 6.56),
    ("ISK", 127.0),
    ("PLN", 3.75),
    ("CZK", 21.9),
    ("HUF", 356.0),
    ("RON", 4.4),
    ("BGN", 1.72),
    ("RSD", 103.0),
    ("MKD", 54.2),
    ("ALL", 86.0),
    ("BAM", 1.72),
    ("MDL", 17.2),
    ("UAH", 41.5),
    ("BYN", 3.27),
    ("RUB", 79.0),
    ("TRY", 39.0),
    ("GIP", 0.74),
    ("ZAR", 17.9),
    ("NGN", 1560.0),
    ("KES", 129.0),
    ("EGP", 49.7),
    ("GHS", 10.3),
    ("MAD", 9.1),
    ("TND", 2.98),
    ("DZD", 132.0),
    ("LYD", 5.45),
    ("ETB", 134.0),
    ("TZS", 2650.0),
    ("UGX", 3610.0),
    ("RWF", 1410.0),
    ("BIF", 2960.0),
    ("XAF", 577.0),
    ("XOF", 577.0),
    ("MUR", 45.5),
    ("SCR", 14.3),
    ("MGA", 4450.0),
    ("MZN", 63.9),
    ("ZMW", 26.5),
    ("MWK", 1735.0),
    ("BWP", 13.5),
    ("NAD", 17.9),
    ("SZL", 17.9),
    ("LSL", 17.9),
    ("AOA", 917.0),
    ("CDF", 2870.0),
    ("SDG", 600.0),
    ("SSP", 4500.0),
    ("SOS", 571.0),
    ("DJF", 177.7),
    ("ERN", 15.0),
    ("GMD", 71.0),
    ("GNF", 8650.0),
    ("SLE", 22.7),
    ("LRD", 199.0),
    ("CVE", 97.0),
    ("STN", 21.6),
    ("KMF", 433.0),
    ("MRU", 39.7),
    ("ZWL", 322.0),
    ("SHP", 0.74),
    ("JPY", 144.0),
    ("CNY", 7.19),
    ("INR", 85.5),
    ("KRW", 1370.0),
    ("HKD", 7.85),
    ("SGD", 1.29),
    ("TWD", 30.0),
    ("IDR", 16300.0),
    ("MYR", 4.25),
    ("THB", 32.7),
    ("VND", 26000.0),
    ("PHP", 55.8),
    ("PKR", 282.0),
    ("BDT", 122.0),
    ("LKR", 299.0),
    ("NPR", 136.8),
    ("BTN", 85.5),
    ("MVR", 15.4),
    ("MMK", 2100.0),
    ("KHR", 4010.0),
    ("LAK", 21600.0),
    ("BND", 1.29),
    ("MOP", 8.08),
    ("MNT", 3580.0),
    ("KZT", 510.0),
    ("UZS", 12800.0),
    ("KGS", 87.4),
    ("TJS", 10.0),
    ("TMT", 3.5),
    ("AFN", 70.0),
    ("GEL", 2.73),
    ("AMD", 387.0),
    ("AZN", 1.7),
    ("KPW", 900.0),
    ("AED", 3.6725),
    ("SAR", 3.75),
    ("ILS", 3.55),
    ("QAR", 3.64),
    ("KWD", 0.3065),
    ("BHD", 0.376),
    ("OMR", 0.3845),
    ("JOD", 0.709),
    ("IQD", 1310.0),
    ("LBP", 89500.0),
    ("SYP", 13000.0),
    ("YER", 243.0),
    ("IRR", 42000.0),
    ("AUD", 1.55),
    ("NZD", 1.67),
    ("FJD", 2.25),
    ("PGK", 4.1),
    ("WST", 2.74),
    ("TOP", 2.36),
    ("VUV", 119.0),
    ("SBD", 8.35),
    ("XPF", 105.0),
    ("BTC", 0.0000095),
    ("ETH", 0.00038),
    ("USDT", 1.0),
    ("USDC", 1.0),
    ("BNB", 0.0015),
    ("SOL", 0.0065),
    ("XRP", 0.45),
];

/// The static USD-based table, re-expressible in any base it contains.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSnapshot;

impl StaticSnapshot {
    /// Create a snapshot handle.
    pub fn new() -> Self {
        Self
    }

    /// When the table was published.
    pub fn published_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(SNAPSHOT_EPOCH_SECS, 0).unwrap_or_else(Utc::now)
    }

    /// USD rate for `code`, if the table has one.
    pub fn usd_rate(&self, code: &CurrencyCode) -> Option<f64> {
        USD_RATES
            .iter()
            .find(|(c, _)| *c == code.as_str())
            .map(|(_, rate)| *rate)
    }

    /// Codes covered by the table.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        USD_RATES.iter().map(|(code, _)| *code)
    }

    /// The table re-expressed relative to `base`: every USD rate divided by
    /// the USD rate of `base`. An unknown base yields the USD table as is.
    pub fn quote_for(&self, base: &CurrencyCode) -> FxQuote {
        let (quote_base, divisor) = match self.usd_rate(base) {
            Some(rate) => (base.clone(), rate),
            None => {
                warn!(base = %base, "Base not in static snapshot, using USD table");
                (CurrencyCode::usd(), 1.0)
            }
        };

        let rates = USD_RATES
            .iter()
            .map(|(code, rate)| (CurrencyCode::new(*code), rate / divisor));

        FxQuote::new(
            quote_base,
            self.published_at(),
            rates,
            QuoteSource::StaticSnapshot,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_quote_matches_table() {
        let quote = StaticSnapshot::new().quote_for(&CurrencyCode::usd());

        assert_eq!(quote.base, CurrencyCode::usd());
        assert_eq!(quote.source, QuoteSource::StaticSnapshot);
        assert_eq!(quote.rate(&CurrencyCode::eur()), Some(0.88));
        assert_eq!(quote.len(), USD_RATES.len());
    }

    #[test]
    fn test_rebased_quote() {
        let quote = StaticSnapshot::new().quote_for(&CurrencyCode::eur());

        assert_eq!(quote.base, CurrencyCode::eur());
        assert_eq!(quote.rate(&CurrencyCode::eur()), Some(1.0));

        let usd = quote.rate(&CurrencyCode::usd()).unwrap();
        assert!((usd - 1.0 / 0.88).abs() < 1e-12);

        let jpy = quote.rate(&CurrencyCode::jpy()).unwrap();
        assert!((jpy - 144.0 / 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_base_falls_back_to_usd_table() {
        let quote = StaticSnapshot::new().quote_for(&CurrencyCode::new("XYZ"));

        assert_eq!(quote.base, CurrencyCode::usd());
        assert_eq!(quote.rate(&CurrencyCode::gbp()), Some(0.74));
    }

    #[test]
    fn test_table_rates_are_positive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (code, rate) in USD_RATES {
            assert!(*rate > 0.0, "{code}");
            assert!(seen.insert(*code), "duplicate {code}");
        }
    }

    #[test]
    fn test_published_at() {
        assert_eq!(
            StaticSnapshot::new().published_at().to_rfc3339(),
            "2025-06-01T00:00:00+00:00"
        );
    }
}
