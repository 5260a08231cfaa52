//! # Domain Types
//!
//! Core domain types shared by the catalog, the rules and the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Money       │   │  NumberFormat   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (R01)     │   │  i64 / 10_000   │   │  decimals       │       │
//! │  │  name           │   │  exact halves   │   │  separators     │       │
//! │  │  price (Money)  │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The product `code` is the only identity; there is no separate surrogate id.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{
    validate_product_code, validate_product_name, validate_unit_price, ValidationResult,
};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code - business identifier (`R01`, `G01`, ...).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a product. Nothing is validated until it enters a catalog.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Checks code, name and price.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_code(&self.code)?;
        validate_product_name(&self.name)?;
        validate_unit_price("price", self.price)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
