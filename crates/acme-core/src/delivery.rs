//! # Delivery Rules
//!
//! A delivery rule maps the discounted subtotal to a delivery fee.
//!
//! ## Standard Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   under_min_cost   │      standard_cost       │        free             │
//! │  ──────────────────┼──────────────────────────┼──────────────────────   │
//! │  0            min_spend (inclusive)     free_threshold (inclusive)      │
//! │                                                                         │
//! │   subtotal == min_spend       ──► standard_cost                         │
//! │   subtotal == free_threshold  ──► 0                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;

/// A pricing rule that charges for delivery.
pub trait DeliveryStrategy: Send + Sync {
    /// Delivery fee for an already-discounted subtotal.
    fn calculate_delivery(&self, subtotal: Money) -> Money;
}

/// Three-tier delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDelivery {
    free_threshold: Money,
    min_spend: Money,
    under_min_cost: Money,
    standard_cost: Money,
}

impl StandardDelivery {
    /// `min_spend <= free_threshold` is expected but not enforced; see
    /// [`Self::is_well_ordered`].
    pub const fn new(
        free_threshold: Money,
        min_spend: Money,
        under_min_cost: Money,
        standard_cost: Money,
    ) -> Self {
        StandardDelivery {
            free_threshold,
            min_spend,
            under_min_cost,
            standard_cost,
        }
    }

    /// Whether the minimum spend sits at or below the free threshold.
    pub fn is_well_ordered(&self) -> bool {
        self.min_spend <= self.free_threshold
    }

    pub fn free_threshold(&self) -> Money {
        self.free_threshold
    }

    pub fn min_spend(&self) -> Money {
        self.min_spend
    }
}

impl DeliveryStrategy for StandardDelivery {
    fn calculate_delivery(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else if subtotal < self.min_spend {
            self.under_min_cost
        } else {
            self.standard_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn acme_delivery() -> StandardDelivery {
        StandardDelivery::new(
            Money::from_major(90),
            Money::from_major(50),
            Money::from_cents(495),
            Money::from_cents(295),
        )
    }

    #[rstest]
    #[case("0", "4.95")]
    #[case("32.90", "4.95")]
    #[case("49.425", "4.95")]
    #[case("49.9999", "4.95")]
    #[case("50", "2.95")]
    #[case("57.90", "2.95")]
    #[case("89.9999", "2.95")]
    #[case("90", "0")]
    #[case("98.275", "0")]
    fn test_delivery_tiers(#[case] subtotal: &str, #[case] fee: &str) {
        let delivery = acme_delivery();
        assert_eq!(
            delivery.calculate_delivery(subtotal.parse().unwrap()),
            fee.parse::<Money>().unwrap()
        );
    }

    #[test]
    fn test_ordering_check() {
        assert!(acme_delivery().is_well_ordered());

        let inverted = StandardDelivery::new(
            Money::from_major(40),
            Money::from_major(50),
            Money::from_cents(495),
            Money::from_cents(295),
        );
        assert!(!inverted.is_well_ordered());
        assert_eq!(inverted.free_threshold(), Money::from_major(40));
        assert_eq!(inverted.min_spend(), Money::from_major(50));
        // Free threshold is checked first
        assert_eq!(inverted.calculate_delivery(Money::from_major(45)), Money::zero());
    }
}
