//! # Number Formatting
//!
//! Renders a [`Money`] total as a fixed-point string after truncating it.
//!
//! ```text
//!   1234.5678 ──truncate(2)──► 1234.56 ──group──► "1,234.56"
//! ```

use serde::{Deserialize, Serialize};

use crate::money::{Money, FRACTION_DIGITS};
use crate::validation::{validate_decimals, ValidationResult};
use crate::DEFAULT_DECIMALS;

/// Formatting rules for customer-facing totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Digits after the decimal point.
    pub decimals: u32,

    /// Decimal separator.
    pub decimal_point: String,

    /// Separator between groups of three integer digits. Empty disables grouping.
    pub thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimals: DEFAULT_DECIMALS,
            decimal_point: ".".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl NumberFormat {
    /// Rejects more than [`crate::MAX_DECIMALS`] decimal places.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_decimals(self.decimals)
    }

    /// Truncates `amount` to [`Self::decimals`] places and renders it.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::format::NumberFormat;
    /// use acme_core::money::Money;
    ///
    /// let format = NumberFormat::default();
    /// let total: Money = "54.375".parse().unwrap();
    /// assert_eq!(format.format(total), "54.37");
    /// assert_eq!(format.format(Money::from_cents(123_456_789)), "1,234,567.89");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let truncated = amount.truncate(self.decimals);
        let sign = if truncated.is_negative() { "-" } else { "" };
        let whole = group_thousands(
            &truncated.whole_units().abs().to_string(),
            &self.thousands_separator,
        );

        if self.decimals == 0 {
            return format!("{sign}{whole}");
        }

        format!(
            "{sign}{whole}{}{}",
            self.decimal_point,
            fraction_digits(truncated, self.decimals)
        )
    }
}

/// First `decimals` fractional digits, zero-padded past the stored precision.
fn fraction_digits(amount: Money, decimals: u32) -> String {
    let stored = format!("{:04}", amount.fraction());
    if decimals <= FRACTION_DIGITS {
        stored[..decimals as usize].to_string()
    } else {
        format!("{stored:0<width$}", width = decimals as usize)
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    #[rstest]
    #[case("37.85", "37.85")]
    #[case("54.375", "54.37")]
    #[case("98.275", "98.27")]
    #[case("12.999", "12.99")]
    #[case("0", "0.00")]
    #[case("5", "5.00")]
    #[case("1000", "1,000.00")]
    #[case("999.999", "999.99")]
    #[case("1234567.891", "1,234,567.89")]
    #[case("-1234.5", "-1,234.50")]
    #[case("-0.004", "0.00")]
    fn test_default_format(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(NumberFormat::default().format(money(input)), expected);
    }

    #[test]
    fn test_custom_separators() {
        let format = NumberFormat {
            decimals: 2,
            decimal_point: ",".to_string(),
            thousands_separator: ".".to_string(),
        };
        assert_eq!(format.format(money("1234.567")), "1.234,56");
    }

    #[test]
    fn test_zero_decimals_omits_point() {
        let format = NumberFormat {
            decimals: 0,
            ..NumberFormat::default()
        };
        assert_eq!(format.format(money("1999.99")), "1,999");
    }

    #[test]
    fn test_validate_bounds_decimals() {
        assert!(NumberFormat::default().validate().is_ok());

        let format = NumberFormat {
            decimals: 4_000_000_000,
            ..NumberFormat::default()
        };
        assert!(format.validate().is_err());
    }

    #[test]
    fn test_decimals_beyond_stored_precision() {
        let format = NumberFormat {
            decimals: 6,
            thousands_separator: String::new(),
            ..NumberFormat::default()
        };
        assert_eq!(format.format(money("1234.5")), "1234.500000");
    }
}
