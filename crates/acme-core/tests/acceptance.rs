//! End-to-end pricing for the Acme reference catalog and rules.

use acme_core::{
    BuyOneGetHalfOff, Cart, CoreError, Money, Product, ProductCatalog, StandardDelivery,
};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

struct Acme {
    catalog: ProductCatalog,
    offer: BuyOneGetHalfOff,
    delivery: StandardDelivery,
}

#[fixture]
fn acme() -> Acme {
    Acme {
        catalog: ProductCatalog::new([
            Product::new("B01", "Blue Widget", Money::from_cents(795)),
            Product::new("G01", "Green Widget", Money::from_cents(2495)),
            Product::new("R01", "Red Widget", Money::from_cents(3295)),
        ])
        .unwrap(),
        offer: BuyOneGetHalfOff::new([("R01".to_string(), Money::from_cents(3295))]).unwrap(),
        delivery: StandardDelivery::new(
            Money::from_major(90),
            Money::from_major(50),
            Money::from_cents(495),
            Money::from_cents(295),
        ),
    }
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[rstest]
#[case::blue_and_green(&["B01", "G01"], "37.85")]
#[case::two_red_half_price(&["R01", "R01"], "54.37")]
#[case::red_and_green_standard_delivery(&["R01", "G01"], "60.85")]
#[case::mixed_free_delivery(&["B01", "B01", "R01", "R01", "R01"], "98.27")]
fn test_reference_totals(acme: Acme, #[case] codes: &[&str], #[case] expected: &str) {
    let mut cart = Cart::new(&acme.catalog, &acme.offer, &acme.delivery);
    for code in codes {
        cart.add(code).unwrap();
    }

    assert_eq!(cart.total().unwrap(), expected);
}

#[rstest]
fn test_insertion_order_does_not_change_total(acme: Acme) {
    let mut forward = Cart::new(&acme.catalog, &acme.offer, &acme.delivery);
    let mut reversed = Cart::new(&acme.catalog, &acme.offer, &acme.delivery);

    let codes = ["B01", "B01", "R01", "R01", "R01"];
    for code in codes {
        forward.add(code).unwrap();
    }
    for code in codes.iter().rev() {
        reversed.add(code).unwrap();
    }

    assert_eq!(forward.total().unwrap(), reversed.total().unwrap());
}

#[rstest]
fn test_truncation_drops_half_cent(acme: Acme) {
    let mut cart = Cart::new(&acme.catalog, &acme.offer, &acme.delivery);
    for code in ["B01", "B01", "R01", "R01", "R01"] {
        cart.add(code).unwrap();
    }

    let breakdown = cart.breakdown().unwrap();

    assert_eq!(breakdown.subtotal, "114.75".parse::<Money>().unwrap());
    assert_eq!(breakdown.discount, "16.475".parse::<Money>().unwrap());
    assert_eq!(breakdown.delivery, Money::zero());
    assert_eq!(breakdown.total, "98.275".parse::<Money>().unwrap());
    assert_eq!(breakdown.formatted_total, "98.27");
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
#[case("X99")]
#[case("")]
#[case("r01")]
fn test_unknown_code_rejected(acme: Acme, #[case] code: &str) {
    let mut cart = Cart::new(&acme.catalog, &acme.offer, &acme.delivery);
    cart.add("G01").unwrap();

    let err = cart.add(code).unwrap_err();

    assert!(matches!(err, CoreError::ProductNotFound(_)));
    assert_eq!(err.to_string(), format!("Product not found: {code}"));
    assert_eq!(cart.product_codes(), ["G01"]);
    assert_eq!(cart.total().unwrap(), "29.90");
}
