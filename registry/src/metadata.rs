//! Currency metadata types and lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pricelens_common::Region;
use serde::Serialize;

use crate::currencies::CURRENCIES;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// How amounts are rounded to the currency's minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Round half away from zero.
    Standard,
    /// Round half to even.
    Bankers,
}

/// Display rules for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyMetadata {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Minor unit digits. 0–3 for fiat; display-only crypto assets may use more.
    pub decimals: u32,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: char,
    pub group_separator: char,
    /// ISO 3166-1 alpha-2 codes of countries using this currency.
    pub countries: &'static [&'static str],
    pub region: Region,
    pub rounding: RoundingPolicy,
    pub pegged_to: Option<&'static str>,
    pub display_only: bool,
}

impl CurrencyMetadata {
    /// Two decimals, symbol first, `1,234.56` separators, standard rounding.
    pub const fn new(
        code: &'static str,
        symbol: &'static str,
        name: &'static str,
        region: Region,
        countries: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            symbol,
            name,
            decimals: 2,
            symbol_position: SymbolPosition::Before,
            decimal_separator: '.',
            group_separator: ',',
            countries,
            region,
            rounding: RoundingPolicy::Standard,
            pegged_to: None,
            display_only: false,
        }
    }

    pub const fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub const fn after(mut self) -> Self {
        self.symbol_position = SymbolPosition::After;
        self
    }

    pub const fn separators(mut self, decimal: char, group: char) -> Self {
        self.decimal_separator = decimal;
        self.group_separator = group;
        self
    }

    /// `1.234,56`
    pub const fn comma_decimal(self) -> Self {
        self.separators(',', '.')
    }

    /// `1 234,56`
    pub const fn space_grouped(self) -> Self {
        self.separators(',', ' ')
    }

    pub const fn bankers(mut self) -> Self {
        self.rounding = RoundingPolicy::Bankers;
        self
    }

    pub const fn pegged(mut self, to: &'static str) -> Self {
        self.pegged_to = Some(to);
        self
    }

    pub const fn display_only(mut self) -> Self {
        self.display_only = true;
        self
    }

    /// Whether the currency can be chosen as a primary or secondary currency.
    pub fn is_selectable(&self) -> bool {
        !self.display_only
    }
}

static INDEX: Lazy<HashMap<&'static str, &'static CurrencyMetadata>> =
    Lazy::new(|| CURRENCIES.iter().map(|m| (m.code, m)).collect());

/// Look up display rules for a code. Case-insensitive; `None` for unknown codes.
pub fn lookup(code: &str) -> Option<&'static CurrencyMetadata> {
    INDEX
        .get(code)
        .or_else(|| INDEX.get(code.trim().to_ascii_uppercase().as_str()))
        .copied()
}

/// The full table in declaration order.
pub fn all() -> &'static [CurrencyMetadata] {
    CURRENCIES
}

/// Whether the registry has an entry for `code`.
pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

/// Whether `code` is a display-only asset.
pub fn is_display_only(code: &str) -> bool {
    lookup(code).map(|m| m.display_only).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_and_unknown() {
        let jpy = lookup("JPY").unwrap();
        assert_eq!(jpy.symbol, "¥");
        assert_eq!(jpy.decimals, 0);

        assert!(lookup("eur").is_some());
        assert!(lookup("XYZ").is_none());
        assert!(!is_known(""));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut seen = HashSet::new();
        for meta in all() {
            assert!(seen.insert(meta.code), "duplicate code {}", meta.code);
        }
        assert!(all().len() >= 160);
    }

    #[test]
    fn test_fiat_decimals_in_range() {
        for meta in all().iter().filter(|m| !m.display_only) {
            assert!(meta.decimals <= 3, "{} has {} decimals", meta.code, meta.decimals);
        }
    }

    #[test]
    fn test_crypto_decimals_bounded() {
        for meta in all().iter().filter(|m| m.display_only) {
            assert!(meta.decimals <= 8, "{} has {} decimals", meta.code, meta.decimals);
        }
        assert_eq!(lookup("BTC").unwrap().decimals, 8);
    }

    #[test]
    fn test_covers_circulating_iso_currencies() {
        let fiat = all().iter().filter(|m| !m.display_only).count();
        assert!(fiat >= 150, "only {fiat} fiat currencies");
    }

    #[test]
    fn test_separators_differ() {
        for meta in all() {
            assert_ne!(meta.decimal_separator, meta.group_separator, "{}", meta.code);
        }
    }

    #[test]
    fn test_three_decimal_currencies() {
        for code in ["KWD", "BHD", "OMR", "JOD", "IQD", "TND"] {
            assert_eq!(lookup(code).unwrap().decimals, 3, "{code}");
        }
    }

    #[test]
    fn test_pegs_point_at_known_currencies() {
        for meta in all() {
            if let Some(peg) = meta.pegged_to {
                assert!(is_known(peg), "{} pegged to unknown {}", meta.code, peg);
                assert_ne!(peg, meta.code);
            }
        }
    }

    #[test]
    fn test_crypto_is_display_only() {
        assert!(is_display_only("BTC"));
        assert!(!is_display_only("USD"));
        assert!(!is_display_only("NOPE"));
        for meta in all() {
            assert_eq!(meta.display_only, meta.region == Region::Crypto, "{}", meta.code);
        }
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(lookup("AED").unwrap()).unwrap();
        assert_eq!(json["peggedTo"], "USD");
        assert_eq!(json["symbolPosition"], "before");
        assert_eq!(json["region"], "middleEast");
    }
}
