//! # Pricing Configuration
//!
//! Loads the catalog, offer, delivery rule and number format.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ACME_*`, `__` between nested keys)
//! 2. Config file (`--config pricing.toml`)
//! 3. Defaults (`config/default.toml`, compiled in)
//!
//! ## Example
//! ```toml
//! [delivery]
//! kind = "standard"
//! free_threshold = 100
//! min_spend = 50
//! under_min_cost = 4.95
//! standard_cost = 2.95
//! ```
//!
//! Amounts may be TOML numbers or decimal strings; both are converted to
//! `Money` exactly.

use std::path::Path;

use acme_core::{
    BuyOneGetHalfOff, Cart, CoreError, DeliveryStrategy, Money, NoOffer, NumberFormat,
    OfferStrategy, Product, ProductCatalog, StandardDelivery,
};
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Compiled-in reference pricing.
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Environment variable prefix.
const ENV_PREFIX: &str = "ACME";

// =============================================================================
// Raw Configuration
// =============================================================================

/// Pricing configuration as read from the sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Catalog entries.
    pub products: Vec<Product>,

    /// Offer rule.
    pub offer: OfferConfig,

    /// Delivery rule.
    pub delivery: DeliveryConfig,

    /// Total formatting.
    #[serde(default)]
    pub format: NumberFormat,
}

/// Offer rule selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OfferConfig {
    /// Every second unit of an eligible product at half its reference price.
    BuyOneGetHalfOff { eligible: Vec<EligibleProduct> },

    /// No discount.
    #[serde(rename = "none")]
    NoOffer,
}

/// One product taking part in an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleProduct {
    pub code: String,
    pub reference_price: Money,
}

/// Delivery rule selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryConfig {
    /// Under-minimum / standard / free tiers.
    Standard {
        free_threshold: Money,
        min_spend: Money,
        under_min_cost: Money,
        standard_cost: Money,
    },
}

impl PricingConfig {
    /// Loads defaults, then `path` if given, then `ACME_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults();
        if let Some(path) = path {
            debug!(path = %path.display(), "Reading pricing configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        Self::finish(builder)
    }

    /// Loads defaults overlaid with an in-memory TOML document.
    pub fn from_toml_str(overrides: &str) -> Result<Self, ConfigError> {
        Self::finish(Self::defaults().add_source(File::from_str(overrides, FileFormat::Toml)))
    }

    fn defaults() -> ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self, ConfigError> {
        let config: PricingConfig = builder.build()?.try_deserialize()?;

        if config.products.is_empty() {
            return Err(ConfigError::MissingRequired("products".to_string()));
        }

        Ok(config)
    }

    /// Validates the configuration and builds the pricing objects.
    pub fn build(&self) -> Result<PricingRules, ConfigError> {
        self.format.validate().map_err(CoreError::from)?;
        let catalog = ProductCatalog::new(self.products.iter().cloned())?;

        let offer: Box<dyn OfferStrategy> = match &self.offer {
            OfferConfig::BuyOneGetHalfOff { eligible } => {
                for entry in eligible.iter().filter(|e| !catalog.contains(&e.code)) {
                    warn!(code = %entry.code, "Offer references a product missing from the catalog");
                }
                Box::new(BuyOneGetHalfOff::new(
                    eligible
                        .iter()
                        .map(|e| (e.code.clone(), e.reference_price)),
                )?)
            }
            OfferConfig::NoOffer => Box::new(NoOffer),
        };

        let delivery: Box<dyn DeliveryStrategy> = match &self.delivery {
            DeliveryConfig::Standard {
                free_threshold,
                min_spend,
                under_min_cost,
                standard_cost,
            } => {
                let rule = StandardDelivery::new(
                    *free_threshold,
                    *min_spend,
                    *under_min_cost,
                    *standard_cost,
                );
                if !rule.is_well_ordered() {
                    warn!(
                        free_threshold = %rule.free_threshold(),
                        min_spend = %rule.min_spend(),
                        "Minimum spend is above the free delivery threshold"
                    );
                }
                Box::new(rule)
            }
        };

        debug!(products = catalog.len(), "Pricing rules ready");

        Ok(PricingRules {
            catalog,
            offer,
            delivery,
            format: self.format.clone(),
        })
    }
}

// =============================================================================
// Built Rules
// =============================================================================

/// Validated catalog and rules; hands out carts that borrow them.
pub struct PricingRules {
    pub catalog: ProductCatalog,
    pub offer: Box<dyn OfferStrategy>,
    pub delivery: Box<dyn DeliveryStrategy>,
    pub format: NumberFormat,
}

impl PricingRules {
    /// A new empty cart priced with these rules.
    pub fn cart(&self) -> Cart<'_> {
        Cart::new(&self.catalog, self.offer.as_ref(), self.delivery.as_ref())
            .with_format(self.format.clone())
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid pricing configuration: {0}")]
    Invalid(#[from] CoreError),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
