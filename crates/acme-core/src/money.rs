//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    7.95 + 24.95 + 4.95 = 37.849999999999994  ❌ truncates to 37.84!     │
//! │                                                                         │
//! │  Half-price offers produce half cents:                                  │
//! │    32.95 / 2 = 16.475                                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer ten-thousandths                                  │
//! │    329500 / 2 = 164750  (exactly 16.475)                                │
//! │    79500 + 249500 + 49500 = 378500 (exactly 37.85)                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::Money;
//!
//! // Create from cents or from a decimal string
//! let price = Money::from_cents(3295);          // $32.95
//! let same: Money = "32.95".parse().unwrap();
//! assert_eq!(price, same);
//!
//! // Half of an odd cent amount stays exact
//! assert_eq!(price.half().to_decimal_string(), "16.475");
//!
//! // Truncation never rounds up
//! let total: Money = "54.375".parse().unwrap();
//! assert_eq!(total.truncate(2), Money::from_cents(5437));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of decimal digits held below the major unit.
pub const FRACTION_DIGITS: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in ten-thousandths of the currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are subtracted, intermediate values may be negative
/// - **Four fractional digits**: half of any cent amount is representable, so
///   the half-price offer never loses precision
/// - **Serde**: reads numbers or decimal strings, writes decimal strings
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► Cart subtotal ──► OfferStrategy ──► DeliveryStrategy
///                                                              │
///                         "54.37" ◄── NumberFormat ◄── total ◄─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "String")]
pub struct Money(i64);

impl Money {
    /// Scaled units per major unit (dollar).
    pub const SCALE: i64 = 10_000;

    /// Creates a Money value from raw ten-thousandths.
    #[inline]
    pub const fn from_scaled(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(795); // $7.95
    /// assert_eq!(price.scaled(), 79_500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * (Self::SCALE / 100))
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * Self::SCALE)
    }

    /// Returns the raw value in ten-thousandths.
    #[inline]
    pub const fn scaled(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollar) portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).whole_units(), 10);
    /// assert_eq!(Money::from_cents(-550).whole_units(), -5);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Returns the fractional portion in ten-thousandths (always 0-9999).
    #[inline]
    pub const fn fraction(&self) -> i64 {
        (self.0 % Self::SCALE).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(795);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(1590));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Checked addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Returns half of the value.
    ///
    /// Exact for anything expressed in cents or half cents; below that the
    /// last ten-thousandth is dropped toward zero.
    #[inline]
    pub const fn half(&self) -> Self {
        Money(self.0 / 2)
    }

    /// Truncates to `decimals` places: `sign · floor(|x| · 10^d) / 10^d`.
    ///
    /// ## Truncation, Not Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │   54.375  ──truncate(2)──►  54.37     (not 54.38)                   │
    /// │   98.275  ──truncate(2)──►  98.27     (not 98.28)                   │
    /// │  -12.999  ──truncate(2)──► -12.99     (toward zero)                 │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Values already at or below the requested precision are returned as is.
    pub fn truncate(&self, decimals: u32) -> Money {
        if decimals >= FRACTION_DIGITS {
            return *self;
        }

        let step = 10_i64.pow(FRACTION_DIGITS - decimals);
        let magnitude = (self.0.abs() / step) * step;
        if self.0 < 0 {
            Money(-magnitude)
        } else {
            Money(magnitude)
        }
    }

    /// Plain decimal rendering with at least two fractional digits and no
    /// trailing zeros beyond them (`"16.475"`, `"90.00"`, `"-4.95"`).
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let fraction = format!("{:04}", self.fraction());
        let fraction = fraction.trim_end_matches('0');
        write_decimal(sign, self.whole_units().abs(), fraction)
    }
}

fn write_decimal(sign: &str, whole: i64, fraction: &str) -> String {
    if fraction.len() >= 2 {
        format!("{sign}{whole}.{fraction}")
    } else {
        format!("{sign}{whole}.{fraction:0<2}")
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses a plain decimal such as `"32.95"`, `"-4.5"`, `"90"` or `".5"`.
    ///
    /// At most four fractional digits are accepted; no exponent, no currency
    /// symbol, no grouping separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a decimal number"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected a decimal number"));
        }
        if fraction.len() > FRACTION_DIGITS as usize {
            return Err(invalid("at most 4 decimal places are supported"));
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let fraction_units: i64 = format!("{fraction:0<4}")
            .parse()
            .map_err(|_| invalid("expected a decimal number"))?;

        let scaled = whole_units
            .checked_mul(Money::SCALE)
            .and_then(|v| v.checked_add(fraction_units))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -scaled } else { scaled }))
    }
}

/// Wire shapes accepted when deserializing: `90`, `32.95` or `"32.95"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<MoneyRepr> for Money {
    type Error = ValidationError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        match repr {
            MoneyRepr::Integer(major) => major
                .checked_mul(Money::SCALE)
                .map(Money)
                .ok_or_else(|| ValidationError::InvalidFormat {
                    field: "amount".to_string(),
                    reason: "amount is too large".to_string(),
                }),
            // Shortest round-trip rendering: 32.95_f64 prints as "32.95".
            MoneyRepr::Float(value) if value.is_finite() => value.to_string().parse(),
            MoneyRepr::Float(_) => Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "amount must be finite".to_string(),
            }),
            MoneyRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_decimal_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$32.95` / `-$4.95` / `$16.475`.
///
/// ## Note
/// This is for logs and debugging. Customer-facing totals go through
/// [`crate::format::NumberFormat`], which truncates first.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_decimal_string();
        match text.strip_prefix('-') {
            Some(magnitude) => write!(f, "-${magnitude}"),
            None => write!(f, "${text}"),
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
