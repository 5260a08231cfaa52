//! # Validation Module
//!
//! Input validation for catalog entries and pricing rules.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Configuration (acme-cli)                                     │
//! │  └── Type validation (deserialization, amount parsing)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (acme-core)                                     │
//! │  ├── ProductCatalog::new ── THIS MODULE: codes, names, prices          │
//! │  └── BuyOneGetHalfOff::new ── THIS MODULE: reference prices            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart::add                                                    │
//! │  └── Catalog membership (CoreError::ProductNotFound)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_DECIMALS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product code.
pub const MAX_CODE_LEN: usize = 50;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Highest accepted unit price: one billion.
pub const MAX_UNIT_PRICE: Money = Money::from_major(1_000_000_000);

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code such as `R01`.
///
/// ## Rules
/// - Must not be empty or surrounded by whitespace
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_product_code;
///
/// assert!(validate_product_code("R01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a per-unit amount: a catalog price or an offer reference price.
///
/// Zero is allowed (free items). The upper bound keeps a full cart of
/// [`crate::MAX_CART_UNITS`] units within `Money`'s range.
///
/// ## Example
/// ```rust
/// use acme_core::money::Money;
/// use acme_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price("price", Money::from_cents(795)).is_ok());
/// assert!(validate_unit_price("price", Money::zero()).is_ok());
/// assert!(validate_unit_price("price", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_unit_price(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() || amount > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: MAX_UNIT_PRICE.to_decimal_string(),
        });
    }

    Ok(())
}

/// Validates the number of decimal places shown on a total.
pub fn validate_decimals(decimals: u32) -> ValidationResult<()> {
    if decimals > MAX_DECIMALS {
        return Err(ValidationError::OutOfRange {
            field: "decimals".to_string(),
            min: "0".to_string(),
            max: MAX_DECIMALS.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
