//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acme-core errors (this file)                                          │
//! │  ├── CoreError        - Pricing pipeline failures                      │
//! │  └── ValidationError  - Catalog / rule / amount validation failures    │
//! │                                                                         │
//! │  acme-cli errors (separate crate)                                      │
//! │  └── ConfigError      - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (CLI boundary)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code is not in the catalog.
    ///
    /// ## When This Occurs
    /// - `Cart::add` with a code the catalog does not know (cart is unchanged)
    /// - `ProductCatalog::get_price` on an unknown code
    ///
    /// ```text
    /// cart.add("X99")
    ///      │
    ///      ▼
    /// catalog.get_price("X99") ── ProductNotFound("X99") ──► caller
    /// ```
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// `Cart::add` on a cart already holding `MAX_CART_UNITS` units.
    #[error("Cart cannot hold more than {max} units")]
    CartFull { max: usize },

    /// A pricing stage produced an amount outside `Money`'s range.
    ///
    /// Catalog and offer amounts are bounded, so this only comes from a
    /// delivery or offer rule returning an extreme amount.
    #[error("Amount overflow while computing the {stage}")]
    AmountOverflow { stage: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building a catalog or a pricing rule, or while parsing an
/// amount. Never raised from `Cart::total`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount is out of range (e.g. a negative price).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Invalid format (e.g. malformed amount, bad product code characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two catalog entries with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("X99".to_string());
        assert_eq!(err.to_string(), "Product not found: X99");

        let err = CoreError::CartFull { max: 3 };
        assert_eq!(err.to_string(), "Cart cannot hold more than 3 units");

        let err = CoreError::AmountOverflow { stage: "total" };
        assert_eq!(err.to_string(), "Amount overflow while computing the total");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "R01".to_string(),
        };
        assert_eq!(err.to_string(), "code 'R01' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
