//! # Commands
//!
//! Each command prices carts with [`PricingRules`] and returns the text to
//! print. Nothing here writes to stdout directly.

use acme_core::PriceBreakdown;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::PricingRules;

/// Reference baskets run by `demo`.
pub const DEMO_BASKETS: &[&[&str]] = &[
    &["B01", "G01"],
    &["R01", "R01"],
    &["R01", "G01"],
    &["B01", "B01", "R01", "R01", "R01"],
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PricedBasket<'a> {
    codes: &'a [&'a str],
    #[serde(flatten)]
    breakdown: PriceBreakdown,
}

/// Prices the reference baskets, one `Total: $<amount>` line each.
pub fn demo(rules: &PricingRules, json: bool) -> Result<String> {
    let mut priced = Vec::with_capacity(DEMO_BASKETS.len());
    for codes in DEMO_BASKETS {
        priced.push(PricedBasket {
            codes,
            breakdown: price(rules, codes)?,
        });
    }

    if json {
        return Ok(serde_json::to_string_pretty(&priced)?);
    }

    Ok(priced
        .iter()
        .map(|basket| format!("Total: ${}", basket.breakdown.formatted_total))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Prices a single cart built from `codes`.
pub fn total(rules: &PricingRules, codes: &[String], json: bool) -> Result<String> {
    let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
    let breakdown = price(rules, &codes)?;

    if json {
        return Ok(serde_json::to_string_pretty(&PricedBasket {
            codes: &codes,
            breakdown,
        })?);
    }

    Ok(format!("Total: ${}", breakdown.formatted_total))
}

/// Lists the catalog, one product per line.
pub fn catalog(rules: &PricingRules, json: bool) -> Result<String> {
    let products: Vec<_> = rules.catalog.iter().collect();

    if json {
        return Ok(serde_json::to_string_pretty(&products)?);
    }

    Ok(products
        .iter()
        .map(|p| format!("{:<8} {:<24} {}", p.code, p.name, rules.format.format(p.price)))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn price(rules: &PricingRules, codes: &[&str]) -> Result<PriceBreakdown> {
    let mut cart = rules.cart();
    for code in codes {
        cart.add(code)
            .with_context(|| format!("Cannot add {code} to the cart"))?;
    }

    let breakdown = cart.breakdown()?;
    info!(
        basket = %codes.join(","),
        total = %breakdown.formatted_total,
        "Priced basket"
    );
    Ok(breakdown)
}
