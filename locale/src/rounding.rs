//! Minor-unit rounding and digit layout.

use pricelens_registry::RoundingPolicy;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FormatError, FormatResult};

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Every three digits: `1,234,567`.
    Thousands,
    /// Last three, then every two: `12,34,567`.
    Indian,
}

/// Separators and grouping used to lay out a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub group_separator: char,
    pub grouping: Grouping,
}

impl NumberStyle {
    /// Thousands grouping with the given separators.
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
            grouping: Grouping::Thousands,
        }
    }

    /// Use Indian digit grouping.
    pub const fn indian(mut self) -> Self {
        self.grouping = Grouping::Indian;
        self
    }
}

/// Rounding strategy for a currency policy.
pub fn strategy(policy: RoundingPolicy) -> RoundingStrategy {
    match policy {
        RoundingPolicy::Standard => RoundingStrategy::MidpointAwayFromZero,
        RoundingPolicy::Bankers => RoundingStrategy::MidpointNearestEven,
    }
}

/// Round `amount` to `decimals` places under `policy`.
pub fn round_amount(amount: f64, decimals: u32, policy: RoundingPolicy) -> FormatResult<Decimal> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite);
    }

    let value = Decimal::from_f64(amount).ok_or(FormatError::OutOfRange)?;
    Ok(value.round_dp_with_strategy(decimals, strategy(policy)))
}

/// Lay out the magnitude of `value` with exactly `decimals` fractional digits.
/// The sign is left to the caller.
pub fn render_digits(value: Decimal, decimals: u32, style: NumberStyle) -> String {
    let mut magnitude = value.abs();
    magnitude.rescale(decimals);
    let text = magnitude.to_string();

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = group_integer(integer, style.group_separator, style.grouping);
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        out.push(style.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_integer(digits: &str, separator: char, grouping: Grouping) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && is_boundary(remaining, grouping) {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn is_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Thousands => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const US: NumberStyle = NumberStyle::new('.', ',');

    #[test]
    fn test_midpoint_strategies() {
        let standard = round_amount(2.5, 0, RoundingPolicy::Standard).unwrap();
        let bankers = round_amount(2.5, 0, RoundingPolicy::Bankers).unwrap();
        assert_eq!(standard, Decimal::from(3));
        assert_eq!(bankers, Decimal::from(2));

        let standard = round_amount(0.125, 2, RoundingPolicy::Standard).unwrap();
        let bankers = round_amount(0.125, 2, RoundingPolicy::Bankers).unwrap();
        assert_eq!(standard, Decimal::from_str("0.13").unwrap());
        assert_eq!(bankers, Decimal::from_str("0.12").unwrap());
    }

    #[test]
    fn test_negative_midpoint() {
        let standard = round_amount(-2.5, 0, RoundingPolicy::Standard).unwrap();
        assert_eq!(standard, Decimal::from(-3));
    }

    #[test]
    fn test_round_rejects_non_finite() {
        assert_eq!(
            round_amount(f64::NAN, 2, RoundingPolicy::Standard),
            Err(FormatError::NonFinite)
        );
        assert_eq!(
            round_amount(f64::MAX, 2, RoundingPolicy::Standard),
            Err(FormatError::OutOfRange)
        );
    }

    #[test]
    fn test_render_digits_grouping() {
        assert_eq!(render_digits(Decimal::from(1234567), 0, US), "1,234,567");
        assert_eq!(render_digits(Decimal::from(123), 0, US), "123");
        assert_eq!(render_digits(Decimal::from(-1000), 2, US), "1,000.00");
    }

    #[test]
    fn test_render_digits_pads_fraction() {
        let value = Decimal::from_str("1.5").unwrap();
        assert_eq!(render_digits(value, 3, US), "1.500");
    }

    #[test]
    fn test_render_digits_european() {
        let value = Decimal::from_str("1234.56").unwrap();
        assert_eq!(render_digits(value, 2, NumberStyle::new(',', '.')), "1.234,56");
    }

    #[test]
    fn test_render_digits_indian() {
        let style = US.indian();
        assert_eq!(render_digits(Decimal::from(1234567), 0, style), "12,34,567");
        assert_eq!(render_digits(Decimal::from(12345), 0, style), "12,345");
        assert_eq!(render_digits(Decimal::from(999), 0, style), "999");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stripping_separators_gives_plain_digits(n in 0i64..1_000_000_000_000) {
                let plain = n.to_string();
                for style in [US, US.indian(), NumberStyle::new(',', '.')] {
                    let grouped = render_digits(Decimal::from(n), 0, style);
                    let stripped: String = grouped.chars().filter(|c| c.is_ascii_digit()).collect();
                    prop_assert_eq!(&stripped, &plain);
                }
            }

            #[test]
            fn rounding_respects_decimals(amount in -1.0e9f64..1.0e9, decimals in 0u32..4) {
                let rounded = round_amount(amount, decimals, RoundingPolicy::Standard).unwrap();
                prop_assert!(rounded.scale() <= decimals);
            }
        }
    }
}
