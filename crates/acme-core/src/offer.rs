//! # Offer Rules
//!
//! An offer turns the raw subtotal into a discounted subtotal.
//!
//! ## Buy One, Get the Second Half Price
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart: R01 R01 R01        eligible: R01 @ $32.95                        │
//! │                                                                         │
//! │  count(R01) = 3 ──► pairs = 3 / 2 = 1                                   │
//! │                                                                         │
//! │  discount = 1 × $32.95 / 2 = $16.475                                    │
//! │                                                                         │
//! │  subtotal $98.85 ──► $82.375                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_product_code, validate_unit_price};

/// A pricing rule that discounts the cart subtotal.
///
/// `apply` must be a pure function of its arguments. Implementations are
/// shared between carts, hence `Send + Sync`.
pub trait OfferStrategy: Send + Sync {
    /// Returns the subtotal after the offer.
    ///
    /// `product_codes` holds one entry per unit, in insertion order.
    fn apply(&self, product_codes: &[String], subtotal: Money) -> Money;
}

// =============================================================================
// BuyOneGetHalfOff
// =============================================================================

/// Every second unit of an eligible product is half price.
///
/// The half is taken from the configured reference price, never from the
/// catalog, so the two may differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetHalfOff {
    eligible: BTreeMap<String, Money>,
}

impl BuyOneGetHalfOff {
    /// Builds the offer from eligible code → reference price pairs.
    ///
    /// ## Errors
    /// Malformed codes and reference prices outside `0..=MAX_UNIT_PRICE` are
    /// rejected, which keeps every discount at or above zero and in range.
    pub fn new(eligible: impl IntoIterator<Item = (String, Money)>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        for (code, reference_price) in eligible {
            validate_product_code(&code)?;
            validate_unit_price("reference price", reference_price)?;
            map.insert(code, reference_price);
        }
        Ok(BuyOneGetHalfOff { eligible: map })
    }

    /// Reference price configured for `code`, if eligible.
    pub fn reference_price(&self, code: &str) -> Option<Money> {
        self.eligible.get(code).copied()
    }

    /// Total discount for the given units: Σ `(count / 2) × reference / 2`.
    pub fn discount(&self, product_codes: &[String]) -> Money {
        self.eligible
            .iter()
            .map(|(code, reference_price)| {
                let count = product_codes.iter().filter(|c| *c == code).count() as i64;
                reference_price.multiply_quantity(count / 2).half()
            })
            .sum()
    }
}

impl OfferStrategy for BuyOneGetHalfOff {
    fn apply(&self, product_codes: &[String], subtotal: Money) -> Money {
        subtotal - self.discount(product_codes)
    }
}

// =============================================================================
// NoOffer
// =============================================================================

/// Leaves the subtotal untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOffer;

impl OfferStrategy for NoOffer {
    fn apply(&self, _product_codes: &[String], subtotal: Money) -> Money {
        subtotal
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
