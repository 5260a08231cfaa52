//! # acme-core: Pure Pricing Logic for Acme Widget Co
//!
//! This crate prices shopping carts. It contains all pricing logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Acme Widget Pricing                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    acme-cli (apps/acme-cli)                     │   │
//! │  │    config.toml ──► PricingConfig ──► demo / total / catalog     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   offer   │  │ delivery  │  │   cart    │  │   │
//! │  │   │  Product  │  │ BuyOneGet │  │ Standard  │  │   Cart    │  │   │
//! │  │   │  Catalog  │  │  HalfOff  │  │ Delivery  │  │ Breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONFIG FILES • NO GLOBAL STATE • PURE FUNCTIONS  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`money`] - Fixed-point Money (no floating point!)
//! - [`catalog`] - Product catalog lookups
//! - [`offer`] - Offer rules (`OfferStrategy`)
//! - [`delivery`] - Delivery fee rules (`DeliveryStrategy`)
//! - [`cart`] - Cart and the pricing pipeline
//! - [`format`] - Truncating number formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog and rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::{BuyOneGetHalfOff, Cart, Money, Product, ProductCatalog, StandardDelivery};
//!
//! let catalog = ProductCatalog::new([
//!     Product::new("R01", "Red Widget", Money::from_cents(3295)),
//!     Product::new("G01", "Green Widget", Money::from_cents(2495)),
//!     Product::new("B01", "Blue Widget", Money::from_cents(795)),
//! ])?;
//! let offer = BuyOneGetHalfOff::new([("R01".to_string(), Money::from_cents(3295))])?;
//! let delivery = StandardDelivery::new(
//!     Money::from_major(90),
//!     Money::from_major(50),
//!     Money::from_cents(495),
//!     Money::from_cents(295),
//! );
//!
//! let mut cart = Cart::new(&catalog, &offer, &delivery);
//! cart.add("R01")?;
//! cart.add("R01")?;
//!
//! // 65.90 - 16.475 + 4.95 = 54.375, truncated
//! assert_eq!(cart.total()?, "54.37");
//! # Ok::<(), acme_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod format;
pub mod money;
pub mod offer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use acme_core::Cart` instead of
// `use acme_core::cart::Cart`

pub use cart::{Cart, PriceBreakdown};
pub use catalog::ProductCatalog;
pub use delivery::{DeliveryStrategy, StandardDelivery};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::NumberFormat;
pub use money::Money;
pub use offer::{BuyOneGetHalfOff, NoOffer, OfferStrategy};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places shown on customer-facing totals.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Most decimal places a [`NumberFormat`] may request.
pub const MAX_DECIMALS: u32 = 18;

/// Most units a single cart holds.
pub const MAX_CART_UNITS: usize = 100_000;
