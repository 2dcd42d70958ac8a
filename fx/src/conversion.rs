//! Cross-currency conversion through the quote's base.

use pricelens_common::{CurrencyCode, FxQuote};

use crate::error::ConversionError;

/// Convert `amount` from `from` to `to` using `quote`.
///
/// Same-currency conversion returns `amount` unchanged, even without a quote.
/// Otherwise the amount is taken to the quote's base and then out to `to`.
pub fn try_convert(
    quote: Option<&FxQuote>,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(amount);
    }

    let quote = quote.ok_or(ConversionError::NoQuote)?;

    let to_base = if from == &quote.base {
        amount
    } else {
        let rate = quote
            .rate(from)
            .ok_or_else(|| ConversionError::MissingRate(from.clone()))?;
        amount / rate
    };

    if !to_base.is_finite() {
        return Err(ConversionError::NonFinite);
    }

    let rate = quote
        .rate(to)
        .ok_or_else(|| ConversionError::MissingRate(to.clone()))?;
    let result = to_base * rate;

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::NonFinite)
    }
}

/// [`try_convert`] without the failure reason.
pub fn convert(
    quote: Option<&FxQuote>,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Option<f64> {
    try_convert(quote, amount, from, to).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pricelens_common::QuoteSource;
    use proptest::prelude::*;

    fn usd_quote() -> FxQuote {
        FxQuote::new(
            CurrencyCode::usd(),
            Utc::now(),
            [
                (CurrencyCode::eur(), 0.85),
                (CurrencyCode::jpy(), 149.5),
                (CurrencyCode::gbp(), 0.79),
            ],
            QuoteSource::Network,
        )
    }

    #[test]
    fn test_convert_from_base() {
        let quote = usd_quote();

        let eur = convert(Some(&quote), 100.0, &CurrencyCode::usd(), &CurrencyCode::eur()).unwrap();

        assert!((eur - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_to_base() {
        let quote = usd_quote();

        let usd = convert(Some(&quote), 85.0, &CurrencyCode::eur(), &CurrencyCode::usd()).unwrap();

        assert!((usd - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_cross() {
        let quote = usd_quote();

        let jpy = convert(Some(&quote), 85.0, &CurrencyCode::eur(), &CurrencyCode::jpy()).unwrap();

        assert!((jpy - 14950.0).abs() < 1e-6);
    }

    #[test]
    fn test_identity_without_quote() {
        let result = try_convert(None, 42.5, &CurrencyCode::eur(), &CurrencyCode::eur());

        assert_eq!(result, Ok(42.5));
    }

    #[test]
    fn test_no_quote() {
        let result = try_convert(None, 10.0, &CurrencyCode::usd(), &CurrencyCode::eur());

        assert_eq!(result, Err(ConversionError::NoQuote));
        assert!(convert(None, 10.0, &CurrencyCode::usd(), &CurrencyCode::eur()).is_none());
    }

    #[test]
    fn test_missing_rate() {
        let quote = usd_quote();
        let chf = CurrencyCode::new("CHF");

        assert_eq!(
            try_convert(Some(&quote), 10.0, &chf, &CurrencyCode::eur()),
            Err(ConversionError::MissingRate(chf.clone()))
        );
        assert_eq!(
            try_convert(Some(&quote), 10.0, &CurrencyCode::eur(), &chf),
            Err(ConversionError::MissingRate(chf))
        );
    }

    #[test]
    fn test_non_finite_amount() {
        let quote = usd_quote();

        let result = try_convert(
            Some(&quote),
            f64::INFINITY,
            &CurrencyCode::usd(),
            &CurrencyCode::eur(),
        );

        assert_eq!(result, Err(ConversionError::NonFinite));
    }

    proptest! {
        #[test]
        fn identity_returns_amount(amount in -1.0e12f64..1.0e12f64) {
            let quote = usd_quote();
            let code = CurrencyCode::gbp();
            prop_assert_eq!(convert(Some(&quote), amount, &code, &code), Some(amount));
        }

        #[test]
        fn round_trip_stays_close(amount in 0.01f64..1.0e9f64) {
            let quote = usd_quote();
            let there = convert(Some(&quote), amount, &CurrencyCode::eur(), &CurrencyCode::jpy()).unwrap();
            let back = convert(Some(&quote), there, &CurrencyCode::jpy(), &CurrencyCode::eur()).unwrap();
            prop_assert!((back - amount).abs() <= amount * 1e-9);
        }
    }
}
