//! Locale-aware currency formatting and locale tag parsing.

use pricelens_common::CurrencyCode;
use pricelens_registry::{lookup, SymbolPosition};

use crate::error::{FormatError, FormatResult};
use crate::formatter::place_symbol;
use crate::rounding::{render_digits, round_amount, NumberStyle};

/// A generic currency formatter keyed by locale (ICU-style "currency" style).
pub trait LocaleFormatter: Send + Sync {
    /// Render `amount` of `code` for `locale`, or explain why not.
    fn format_currency(&self, amount: f64, code: &CurrencyCode, locale: &str) -> FormatResult<String>;
}

/// Where a locale puts the currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// `€1,234.56` (a space is added after alphabetic symbols).
    Prefix,
    /// `R$ 1.234,56`
    PrefixSpaced,
    /// `1.234,56 €`
    Suffix,
}

#[derive(Debug, Clone, Copy)]
struct LocaleRule {
    tag: &'static str,
    style: NumberStyle,
    placement: Placement,
}

const fn rule(tag: &'static str, style: NumberStyle, placement: Placement) -> LocaleRule {
    LocaleRule { tag, style, placement }
}

const DOT: NumberStyle = NumberStyle::new('.', ',');
const COMMA: NumberStyle = NumberStyle::new(',', '.');
const COMMA_NBSP: NumberStyle = NumberStyle::new(',', '\u{a0}');
const COMMA_NNBSP: NumberStyle = NumberStyle::new(',', '\u{202f}');

static RULES: &[LocaleRule] = &[
    rule("en-US", DOT, Placement::Prefix),
    rule("en-GB", DOT, Placement::Prefix),
    rule("en-CA", DOT, Placement::Prefix),
    rule("en-AU", DOT, Placement::Prefix),
    rule("en-IN", DOT.indian(), Placement::Prefix),
    rule("hi-IN", DOT.indian(), Placement::Prefix),
    rule("de-DE", COMMA, Placement::Suffix),
    rule("de-AT", COMMA_NBSP, Placement::PrefixSpaced),
    rule("de-CH", NumberStyle::new('.', '\u{2019}'), Placement::PrefixSpaced),
    rule("fr-FR", COMMA_NNBSP, Placement::Suffix),
    rule("fr-CA", COMMA_NBSP, Placement::Suffix),
    rule("es-ES", COMMA, Placement::Suffix),
    rule("es-MX", DOT, Placement::Prefix),
    rule("it-IT", COMMA, Placement::Suffix),
    rule("nl-NL", COMMA, Placement::PrefixSpaced),
    rule("pt-BR", COMMA, Placement::PrefixSpaced),
    rule("pt-PT", COMMA_NBSP, Placement::Suffix),
    rule("ja-JP", DOT, Placement::Prefix),
    rule("zh-CN", DOT, Placement::Prefix),
    rule("ko-KR", DOT, Placement::Prefix),
    rule("ar-SA", DOT, Placement::Suffix),
    rule("ru-RU", COMMA_NBSP, Placement::Suffix),
    rule("sv-SE", COMMA_NBSP, Placement::Suffix),
    rule("pl-PL", COMMA_NBSP, Placement::Suffix),
    rule("tr-TR", COMMA, Placement::Prefix),
];

/// Formats with a built-in table of common locales.
///
/// Unsupported locales and codes missing from the registry are errors, so a
/// caller can fall back to registry rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleTableFormatter;

impl LocaleTableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Whether `locale` (or its language) has a rule.
    pub fn supports(&self, locale: &str) -> bool {
        find_rule(locale).is_some()
    }

    /// All supported locale tags.
    pub fn locales(&self) -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|r| r.tag)
    }
}

impl LocaleFormatter for LocaleTableFormatter {
    fn format_currency(&self, amount: f64, code: &CurrencyCode, locale: &str) -> FormatResult<String> {
        let rule = find_rule(locale).ok_or_else(|| FormatError::UnsupportedLocale(locale.to_string()))?;
        let meta = lookup(code.as_str()).ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))?;

        let rounded = round_amount(amount, meta.decimals, meta.rounding)?;
        let digits = render_digits(rounded, meta.decimals, rule.style);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        Ok(match rule.placement {
            Placement::Prefix => place_symbol(negative, meta.symbol, SymbolPosition::Before, &digits),
            Placement::Suffix => place_symbol(negative, meta.symbol, SymbolPosition::After, &digits),
            Placement::PrefixSpaced => {
                let sign = if negative { "-" } else { "" };
                format!("{sign}{} {digits}", meta.symbol)
            }
        })
    }
}

/// Exact tag match first, then the first rule sharing the language.
fn find_rule(locale: &str) -> Option<&'static LocaleRule> {
    let tag = parse_locale_tag(locale)?;

    if let Some(region) = tag.region.as_deref() {
        let full = format!("{}-{}", tag.language, region);
        if let Some(rule) = RULES.iter().find(|r| r.tag == full) {
            return Some(rule);
        }
    }

    RULES
        .iter()
        .find(|r| r.tag.split('-').next() == Some(tag.language.as_str()))
}

/// Language and region pulled from a locale string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    /// Lower-case language subtag, e.g. `en`.
    pub language: String,
    /// Upper-case two-letter region subtag, e.g. `US`.
    pub region: Option<String>,
}

/// Parse BCP 47 (`en-US`, `zh-Hant-TW`) and POSIX (`en_US.UTF-8`) forms.
/// Returns `None` when no language subtag is present (`C`, `POSIX`, empty).
pub fn parse_locale_tag(raw: &str) -> Option<LocaleTag> {
    let raw = raw.split(['.', '@']).next().unwrap_or_default().trim();
    let mut subtags = raw.split(['-', '_']).filter(|s| !s.is_empty());

    let language = subtags.next()?;
    let valid_language = (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
    if !valid_language {
        return None;
    }

    let region = subtags
        .find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|s| s.to_ascii_uppercase());

    Some(LocaleTag {
        language: language.to_ascii_lowercase(),
        region,
    })
}
