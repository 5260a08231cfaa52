//! # Cart
//!
//! Collects product codes and runs the pricing pipeline.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  codes ──► Σ catalog.get_price ──► subtotal                             │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                           offer.apply(codes, subtotal)                  │
//! │                                       │                                 │
//! │                                       ▼ discounted                      │
//! │                     delivery.calculate_delivery(discounted)             │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                 discounted + fee ──truncate──► "54.37"                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart borrows its catalog and rules, so one catalog and one set of
//! rules can serve any number of carts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::delivery::DeliveryStrategy;
use crate::error::{CoreError, CoreResult};
use crate::format::NumberFormat;
use crate::money::Money;
use crate::offer::OfferStrategy;
use crate::MAX_CART_UNITS;

/// A shopping cart priced against a catalog, an offer and a delivery rule.
///
/// ## Invariants
/// - Every stored code was found in `catalog` when it was added
/// - One entry per unit; duplicates are meaningful
/// - At most [`MAX_CART_UNITS`] units, so the subtotal of bounded catalog
///   prices cannot overflow
pub struct Cart<'a> {
    catalog: &'a ProductCatalog,
    offer: &'a dyn OfferStrategy,
    delivery: &'a dyn DeliveryStrategy,
    format: NumberFormat,
    product_codes: Vec<String>,
}

impl<'a> Cart<'a> {
    /// Creates an empty cart using the default two-decimal format.
    pub fn new(
        catalog: &'a ProductCatalog,
        offer: &'a dyn OfferStrategy,
        delivery: &'a dyn DeliveryStrategy,
    ) -> Self {
        Cart {
            catalog,
            offer,
            delivery,
            format: NumberFormat::default(),
            product_codes: Vec::new(),
        }
    }

    /// Replaces the format used by [`Self::total`].
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds one unit of `code`.
    ///
    /// ## Errors
    /// - `CoreError::ProductNotFound` if the catalog does not know `code`
    /// - `CoreError::CartFull` once the cart holds [`MAX_CART_UNITS`] units
    ///
    /// The cart is left unchanged on error.
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        let price = self.catalog.get_price(code)?;
        if self.product_codes.len() >= MAX_CART_UNITS {
            return Err(CoreError::CartFull {
                max: MAX_CART_UNITS,
            });
        }
        self.product_codes.push(code.to_string());
        debug!(code, %price, units = self.product_codes.len(), "added to cart");
        Ok(())
    }

    /// Codes in insertion order, one per unit.
    pub fn product_codes(&self) -> &[String] {
        &self.product_codes
    }

    pub fn len(&self) -> usize {
        self.product_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_codes.is_empty()
    }

    /// Sum of catalog prices before any offer.
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.product_codes
            .iter()
            .map(|code| self.catalog.get_price(code))
            .sum()
    }

    /// Runs the whole pipeline and keeps every intermediate amount.
    ///
    /// ## Errors
    /// `CoreError::AmountOverflow` if an offer or delivery rule pushes an
    /// amount outside `Money`'s range.
    pub fn breakdown(&self) -> CoreResult<PriceBreakdown> {
        let subtotal = self.subtotal()?;
        let discounted = self.offer.apply(&self.product_codes, subtotal);
        let discount = subtotal
            .checked_sub(discounted)
            .ok_or(CoreError::AmountOverflow { stage: "discount" })?;
        let delivery = self.delivery.calculate_delivery(discounted);
        let total = discounted
            .checked_add(delivery)
            .ok_or(CoreError::AmountOverflow { stage: "total" })?;

        debug!(
            %subtotal,
            %discounted,
            %delivery,
            %total,
            "priced cart"
        );

        Ok(PriceBreakdown {
            units: self.product_codes.len(),
            subtotal,
            discount,
            delivery,
            total,
            rounded_total: total.truncate(self.format.decimals),
            formatted_total: self.format.format(total),
        })
    }

    /// Final total, truncated and formatted (`"54.37"`).
    pub fn total(&self) -> CoreResult<String> {
        Ok(self.breakdown()?.formatted_total)
    }

    /// Same as [`Self::total`] with a one-off format.
    pub fn total_with(&self, format: &NumberFormat) -> CoreResult<String> {
        Ok(format.format(self.breakdown()?.total))
    }
}

/// Every stage of a priced cart, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Number of units in the cart.
    pub units: usize,

    /// Sum of catalog prices.
    pub subtotal: Money,

    /// Amount taken off by the offer.
    pub discount: Money,

    /// Delivery fee charged on the discounted subtotal.
    pub delivery: Money,

    /// Discounted subtotal plus delivery, before truncation.
    pub total: Money,

    /// `total` truncated to the format's decimals.
    pub rounded_total: Money,

    /// `rounded_total` rendered with the cart's format.
    pub formatted_total: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::StandardDelivery;
    use crate::offer::{BuyOneGetHalfOff, NoOffer};
    use crate::types::Product;
    use crate::validation::MAX_UNIT_PRICE;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new([
            Product::new("R01", "Red Widget", Money::from_cents(3295)),
            Product::new("G01", "Green Widget", Money::from_cents(2495)),
            Product::new("B01", "Blue Widget", Money::from_cents(795)),
        ])
        .unwrap()
    }

    fn offer() -> BuyOneGetHalfOff {
        BuyOneGetHalfOff::new([("R01".to_string(), Money::from_cents(3295))]).unwrap()
    }

    fn delivery() -> StandardDelivery {
        StandardDelivery::new(
            Money::from_major(90),
            Money::from_major(50),
            Money::from_cents(495),
            Money::from_cents(295),
        )
    }

    #[test]
    fn test_empty_cart() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let cart = Cart::new(&catalog, &offer, &delivery);

        assert!(cart.is_empty());
        // Nothing bought still falls in the under-minimum tier
        assert_eq!(cart.total().unwrap(), "4.95");
    }

    #[test]
    fn test_add_keeps_duplicates_in_order() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut cart = Cart::new(&catalog, &offer, &delivery);

        cart.add("R01").unwrap();
        cart.add("B01").unwrap();
        cart.add("R01").unwrap();

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.product_codes(), ["R01", "B01", "R01"]);
    }

    #[test]
    fn test_add_unknown_code_leaves_cart_unchanged() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut cart = Cart::new(&catalog, &offer, &delivery);
        cart.add("B01").unwrap();

        let err = cart.add("X99").unwrap_err();

        assert!(matches!(err, CoreError::ProductNotFound(ref code) if code == "X99"));
        assert_eq!(cart.product_codes(), ["B01"]);
    }

    #[test]
    fn test_breakdown_two_red_widgets() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut cart = Cart::new(&catalog, &offer, &delivery);
        cart.add("R01").unwrap();
        cart.add("R01").unwrap();

        let breakdown = cart.breakdown().unwrap();

        assert_eq!(breakdown.units, 2);
        assert_eq!(breakdown.subtotal, Money::from_cents(6590));
        assert_eq!(breakdown.discount, "16.475".parse::<Money>().unwrap());
        assert_eq!(breakdown.delivery, Money::from_cents(495));
        assert_eq!(breakdown.total, "54.375".parse::<Money>().unwrap());
        assert_eq!(breakdown.rounded_total, Money::from_cents(5437));
        assert_eq!(breakdown.formatted_total, "54.37");
    }

    #[test]
    fn test_delivery_uses_discounted_subtotal() {
        // 2 × R01 = 65.90 raw (standard tier), 49.425 after the offer (under minimum)
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut discounted = Cart::new(&catalog, &offer, &delivery);
        let mut full_price = Cart::new(&catalog, &NoOffer, &delivery);
        for _ in 0..2 {
            discounted.add("R01").unwrap();
            full_price.add("R01").unwrap();
        }

        assert_eq!(discounted.breakdown().unwrap().delivery, Money::from_cents(495));
        assert_eq!(full_price.breakdown().unwrap().delivery, Money::from_cents(295));
        assert_eq!(full_price.total().unwrap(), "68.85");
    }

    #[test]
    fn test_rules_are_shared_between_carts() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut first = Cart::new(&catalog, &offer, &delivery);
        let mut second = Cart::new(&catalog, &offer, &delivery);

        first.add("B01").unwrap();
        second.add("G01").unwrap();

        assert_eq!(first.total().unwrap(), "12.90");
        assert_eq!(second.total().unwrap(), "29.90");
    }

    #[test]
    fn test_custom_format() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let format = NumberFormat {
            decimals: 2,
            decimal_point: ",".to_string(),
            thousands_separator: ".".to_string(),
        };
        let mut cart = Cart::new(&catalog, &offer, &delivery).with_format(format);
        for _ in 0..40 {
            cart.add("R01").unwrap();
        }

        // 40 × 32.95 = 1318.00, 20 pairs × 16.475 = 329.50 off, free delivery
        assert_eq!(cart.total().unwrap(), "988,50");
        assert_eq!(cart.total_with(&NumberFormat::default()).unwrap(), "988.50");

        for _ in 0..40 {
            cart.add("G01").unwrap();
        }
        // + 40 × 24.95 = 998.00
        assert_eq!(cart.total().unwrap(), "1.986,50");
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let (catalog, offer, delivery) = (catalog(), offer(), delivery());
        let mut cart = Cart::new(&catalog, &offer, &delivery);
        cart.add("R01").unwrap();
        cart.add("R01").unwrap();

        let json = serde_json::to_value(cart.breakdown().unwrap()).unwrap();

        assert_eq!(json["discount"], "16.475");
        assert_eq!(json["roundedTotal"], "54.37");
        assert_eq!(json["formattedTotal"], "54.37");
    }

    #[test]
    fn test_cart_full() {
        let catalog =
            ProductCatalog::new([Product::new("MAX", "Priciest Widget", MAX_UNIT_PRICE)]).unwrap();
        let (offer, delivery) = (offer(), delivery());
        let mut cart = Cart::new(&catalog, &offer, &delivery);
        for _ in 0..MAX_CART_UNITS {
            cart.add("MAX").unwrap();
        }

        let err = cart.add("MAX").unwrap_err();

        assert!(matches!(err, CoreError::CartFull { max } if max == MAX_CART_UNITS));
        assert_eq!(cart.len(), MAX_CART_UNITS);
        // The largest possible subtotal still prices without overflow
        let breakdown = cart.breakdown().unwrap();
        assert_eq!(
            breakdown.subtotal,
            MAX_UNIT_PRICE.multiply_quantity(MAX_CART_UNITS as i64)
        );
        assert_eq!(breakdown.delivery, Money::zero());
    }

    #[test]
    fn test_extreme_delivery_fee_is_an_error() {
        let catalog = catalog();
        let offer = offer();
        let delivery = StandardDelivery::new(
            Money::from_scaled(i64::MAX),
            Money::from_scaled(i64::MAX),
            Money::from_scaled(i64::MAX),
            Money::zero(),
        );
        let mut cart = Cart::new(&catalog, &offer, &delivery);
        cart.add("B01").unwrap();

        let err = cart.total().unwrap_err();

        assert!(matches!(err, CoreError::AmountOverflow { stage: "total" }));
    }
}
