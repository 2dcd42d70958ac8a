//! Country to currency and language to country tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pricelens_common::CurrencyCode;

use crate::metadata::all;

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    all()
        .iter()
        .filter(|m| !m.display_only)
        .flat_map(|m| m.countries.iter().map(move |c| (*c, m.code)))
        .collect()
});

/// Language subtag to the country most associated with it.
static LANGUAGE_COUNTRIES: &[(&str, &str)] = &[
    ("en", "US"),
    ("es", "ES"),
    ("fr", "FR"),
    ("de", "DE"),
    ("it", "IT"),
    ("pt", "BR"),
    ("nl", "NL"),
    ("sv", "SE"),
    ("nb", "NO"),
    ("no", "NO"),
    ("da", "DK"),
    ("fi", "FI"),
    ("is", "IS"),
    ("pl", "PL"),
    ("cs", "CZ"),
    ("sk", "SK"),
    ("hu", "HU"),
    ("ro", "RO"),
    ("bg", "BG"),
    ("el", "GR"),
    ("ru", "RU"),
    ("uk", "UA"),
    ("tr", "TR"),
    ("ar", "SA"),
    ("he", "IL"),
    ("fa", "IR"),
    ("ur", "PK"),
    ("hi", "IN"),
    ("bn", "BD"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("zh", "CN"),
    ("th", "TH"),
    ("vi", "VN"),
    ("id", "ID"),
    ("ms", "MY"),
    ("tl", "PH"),
    ("sw", "KE"),
    ("am", "ET"),
    ("zu", "ZA"),
    ("af", "ZA"),
];

/// Currency used in `country`, if the registry knows one.
pub fn currency_for_country(country: &str) -> Option<&'static str> {
    let country = country.trim().to_ascii_uppercase();
    COUNTRY_INDEX.get(country.as_str()).copied()
}

/// Currency used in `country`, defaulting to USD for unmapped countries.
pub fn get_currency_for_country(country: &str) -> CurrencyCode {
    CurrencyCode::new(currency_for_country(country).unwrap_or("USD"))
}

/// Heuristic country for a bare language subtag such as `ja` or `ar`.
pub fn country_for_language(language: &str) -> Option<&'static str> {
    let language = language.trim().to_ascii_lowercase();
    LANGUAGE_COUNTRIES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, country)| *country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_for_country() {
        assert_eq!(currency_for_country("JP"), Some("JPY"));
        assert_eq!(currency_for_country("de"), Some("EUR"));
        assert_eq!(currency_for_country("SN"), Some("XOF"));
        assert_eq!(currency_for_country("ZZ"), None);
    }

    #[test]
    fn test_get_currency_for_country_defaults_to_usd() {
        assert_eq!(get_currency_for_country("GB"), CurrencyCode::gbp());
        assert_eq!(get_currency_for_country("ZZ"), CurrencyCode::usd());
    }

    #[test]
    fn test_country_for_language() {
        assert_eq!(country_for_language("ja"), Some("JP"));
        assert_eq!(country_for_language("AR"), Some("SA"));
        assert_eq!(country_for_language("xx"), None);
    }

    #[test]
    fn test_every_language_country_is_mapped() {
        for (lang, country) in LANGUAGE_COUNTRIES {
            assert!(
                currency_for_country(country).is_some(),
                "{lang} -> {country} has no currency"
            );
        }
    }
}
