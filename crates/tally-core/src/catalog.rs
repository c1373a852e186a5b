//! # Catalog Module
//!
//! Declarative store bootstrap: a list of product descriptors with
//! promotion assignments, built into a live [`Store`] once at startup.
//!
//! The descriptors are plain serde data, so a catalog can be assembled
//! in code or shipped as JSON:
//!
//! ```json
//! {
//!   "products": [
//!     { "kind": "standard", "name": "MacBook Air M2", "price": 1450.0,
//!       "quantity": 100,
//!       "promotion": { "type": "percentage_discount", "percentage": 10.0 } },
//!     { "kind": "non_stocked", "name": "Windows License", "price": 125.0 },
//!     { "kind": "limited", "name": "Shipping", "price": 10.0,
//!       "quantity": 250, "maximum": 1 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::product::{Product, ProductHandle};
use crate::promotion::Promotion;
use crate::store::Store;

// =============================================================================
// Product Descriptors
// =============================================================================

/// One product entry in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductConfig {
    /// Quantity-tracked product.
    Standard {
        name: String,
        price: f64,
        quantity: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<Promotion>,
    },

    /// Product without a stock concept.
    NonStocked {
        name: String,
        price: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<Promotion>,
    },

    /// Quantity-tracked product with a per-purchase maximum.
    Limited {
        name: String,
        price: f64,
        quantity: i64,
        maximum: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<Promotion>,
    },
}

impl ProductConfig {
    /// Builds the live product this entry describes, with its promotion
    /// attached. Construction validation applies (empty names, negative
    /// prices and quantities are rejected).
    pub fn build(&self) -> CoreResult<ProductHandle> {
        let (mut product, promotion) = match self {
            ProductConfig::Standard {
                name,
                price,
                quantity,
                promotion,
            } => (Product::new(name, *price, *quantity)?, promotion),
            ProductConfig::NonStocked {
                name,
                price,
                promotion,
            } => (Product::non_stocked(name, *price)?, promotion),
            ProductConfig::Limited {
                name,
                price,
                quantity,
                maximum,
                promotion,
            } => (
                Product::limited(name, *price, *quantity, *maximum)?,
                promotion,
            ),
        };

        product.set_promotion(promotion.clone());
        Ok(ProductHandle::new(product))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A full store catalog: the product list assembled once at process
/// start by the entry point and handed to the engine as a [`Store`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<ProductConfig>,
}

impl Catalog {
    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the store this catalog describes.
    ///
    /// Fails on the first invalid descriptor; no partially-built store
    /// is returned.
    pub fn build(&self) -> CoreResult<Store> {
        let products = self
            .products
            .iter()
            .map(ProductConfig::build)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Store::new(products))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
