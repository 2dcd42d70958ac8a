//! Currency amount rendering.

use std::sync::Arc;

use pricelens_common::CurrencyCode;
use pricelens_registry::{lookup, CurrencyMetadata, SymbolPosition};
use tracing::debug;

use crate::error::FormatResult;
use crate::locale_rules::LocaleFormatter;
use crate::rounding::{render_digits, round_amount, NumberStyle};

/// A rendered amount plus its UI hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAmount {
    pub text: String,
    /// `≈ USD` for pegged currencies, `DISPLAY ONLY` for display-only assets.
    pub annotation: Option<String>,
}

/// Renders amounts, preferring a locale-aware formatter and falling back to
/// the registry's own rules.
#[derive(Clone, Default)]
pub struct Formatter {
    locale_formatter: Option<Arc<dyn LocaleFormatter>>,
    default_locale: Option<String>,
}

impl Formatter {
    /// Formatter using registry rules only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try `formatter` first whenever a locale is known.
    pub fn with_locale_formatter(mut self, formatter: Arc<dyn LocaleFormatter>) -> Self {
        self.locale_formatter = Some(formatter);
        self
    }

    /// Locale used when the caller passes none.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Locale used when the caller passes none.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Render `amount` of `code`. Never fails.
    pub fn format(&self, amount: f64, code: &CurrencyCode, locale: Option<&str>) -> String {
        let locale = locale.or(self.default_locale.as_deref());

        if let (Some(locale), Some(formatter)) = (locale, self.locale_formatter.as_ref()) {
            match formatter.format_currency(amount, code, locale) {
                Ok(text) => return text,
                Err(e) => {
                    debug!(
                        code = %code,
                        locale,
                        error_code = e.error_code(),
                        "Locale formatter declined, using registry rules"
                    );
                }
            }
        }

        format_manual(amount, code)
    }

    /// [`format`](Self::format) plus the currency's annotation.
    pub fn format_annotated(&self, amount: f64, code: &CurrencyCode, locale: Option<&str>) -> FormattedAmount {
        FormattedAmount {
            text: self.format(amount, code, locale),
            annotation: annotation(code),
        }
    }
}

/// Render with registry rules, or the generic `"{CODE} {amount:.2}"` form for
/// unknown codes and amounts that cannot be rounded.
pub fn format_manual(amount: f64, code: &CurrencyCode) -> String {
    let Some(meta) = lookup(code.as_str()) else {
        return fallback_string(amount, code);
    };

    match format_with_metadata(amount, meta) {
        Ok(text) => text,
        Err(_) => fallback_string(amount, code),
    }
}

/// The generic rendering used when no rules apply.
pub fn fallback_string(amount: f64, code: &CurrencyCode) -> String {
    format!("{} {:.2}", code, amount)
}

/// UI hint for pegged and display-only currencies.
pub fn annotation(code: &CurrencyCode) -> Option<String> {
    let meta = lookup(code.as_str())?;
    if meta.display_only {
        Some("DISPLAY ONLY".to_string())
    } else {
        meta.pegged_to.map(|peg| format!("≈ {peg}"))
    }
}

fn format_with_metadata(amount: f64, meta: &CurrencyMetadata) -> FormatResult<String> {
    let rounded = round_amount(amount, meta.decimals, meta.rounding)?;
    let style = NumberStyle::new(meta.decimal_separator, meta.group_separator);
    let digits = render_digits(rounded, meta.decimals, style);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    Ok(place_symbol(negative, meta.symbol, meta.symbol_position, &digits))
}

/// Attach sign and symbol. Symbols ending in a letter get a space before the
/// number; trailing symbols always do.
pub(crate) fn place_symbol(negative: bool, symbol: &str, position: SymbolPosition, digits: &str) -> String {
    let sign = if negative { "-" } else { "" };
    match position {
        SymbolPosition::Before => {
            let spacer = if symbol.chars().last().is_some_and(char::is_alphabetic) {
                " "
            } else {
                ""
            };
            format!("{sign}{symbol}{spacer}{digits}")
        }
        SymbolPosition::After => format!("{sign}{digits} {symbol}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::locale_rules::LocaleTableFormatter;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s)
    }

    struct Refusing;

    impl LocaleFormatter for Refusing {
        fn format_currency(&self, _: f64, _: &CurrencyCode, locale: &str) -> FormatResult<String> {
            Err(FormatError::UnsupportedLocale(locale.to_string()))
        }
    }

    #[test]
    fn test_zero_decimal_currency() {
        assert_eq!(format_manual(1234567.0, &code("JPY")), "¥1,234,567");
        assert_eq!(format_manual(1234567.4, &code("JPY")), "¥1,234,567");
    }

    #[test]
    fn test_three_decimal_currency() {
        let text = format_manual(1.5, &code("KWD"));

        assert_eq!(text, "KD 1.500");
        let fraction = text.rsplit('.').next().unwrap();
        assert_eq!(fraction.len(), 3);
    }

    #[test]
    fn test_symbol_after_with_european_separators() {
        assert_eq!(format_manual(1234.56, &code("EUR")), "1.234,56 €");
        assert_eq!(format_manual(1234.5, &code("SEK")), "1 234,50 kr");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_manual(-42.5, &code("USD")), "-$42.50");
        assert_eq!(format_manual(-42.5, &code("EUR")), "-42,50 €");
        assert_eq!(format_manual(-0.001, &code("USD")), "$0.00");
    }

    #[test]
    fn test_bankers_vs_standard_at_midpoint() {
        // CHF rounds half to even, USD half away from zero.
        assert_eq!(format_manual(0.125, &code("CHF")), "CHF 0.12");
        assert_eq!(format_manual(0.125, &code("USD")), "$0.13");
    }

    #[test]
    fn test_unknown_code_fallback() {
        assert_eq!(format_manual(12.5, &code("ZZZ")), "ZZZ 12.50");
        assert_eq!(format_manual(f64::INFINITY, &code("USD")), "USD inf");
    }

    #[test]
    fn test_annotation() {
        assert_eq!(annotation(&code("AED")).as_deref(), Some("≈ USD"));
        assert_eq!(annotation(&code("BTC")).as_deref(), Some("DISPLAY ONLY"));
        assert_eq!(annotation(&code("GBP")), None);
        assert_eq!(annotation(&code("ZZZ")), None);
    }

    #[test]
    fn test_format_annotated() {
        let formatter = Formatter::new();

        let formatted = formatter.format_annotated(1000.0, &code("XOF"), None);

        assert_eq!(formatted.text, "1 000 CFA");
        assert_eq!(formatted.annotation.as_deref(), Some("≈ EUR"));
    }

    #[test]
    fn test_locale_formatter_preferred() {
        let formatter = Formatter::new().with_locale_formatter(Arc::new(LocaleTableFormatter::new()));

        assert_eq!(formatter.format(1234.56, &code("EUR"), Some("en-US")), "€1,234.56");
        // No locale, no default: registry rules.
        assert_eq!(formatter.format(1234.56, &code("EUR"), None), "1.234,56 €");
    }

    #[test]
    fn test_default_locale_is_used() {
        let formatter = Formatter::new()
            .with_locale_formatter(Arc::new(LocaleTableFormatter::new()))
            .with_default_locale("de-DE");

        assert_eq!(formatter.format(1234.56, &code("USD"), None), "1.234,56 $");
    }

    #[test]
    fn test_locale_formatter_error_falls_back() {
        let formatter = Formatter::new().with_locale_formatter(Arc::new(Refusing));

        assert_eq!(formatter.format(1234567.0, &code("JPY"), Some("xx-YY")), "¥1,234,567");
    }
}
