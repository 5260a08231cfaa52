//! # Product Catalog
//!
//! Immutable map from product code to [`Product`].
//!
//! ```text
//! get_price("R01") ──► Ok($32.95)
//! get_price("X99") ──► Err(ProductNotFound("X99"))
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

/// Product codes mapped to products. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    /// Builds a catalog, validating every product.
    ///
    /// ## Errors
    /// - `ValidationError::Required` / `InvalidFormat` / `TooLong` for bad codes or names
    /// - `ValidationError::OutOfRange` for a negative price or one above
    ///   `MAX_UNIT_PRICE`
    /// - `ValidationError::Duplicate` when two products share a code
    pub fn new(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();

        for product in products {
            product.validate()?;
            if map.contains_key(&product.code) {
                return Err(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: product.code,
                }
                .into());
            }
            map.insert(product.code.clone(), product);
        }

        Ok(ProductCatalog { products: map })
    }

    /// Unit price for `code`.
    pub fn get_price(&self, code: &str) -> CoreResult<Money> {
        self.get(code)
            .map(|product| product.price)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))
    }

    /// Looks up the full product entry.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
