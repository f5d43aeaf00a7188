//! The catalog store: a fixed, read-only product list.
//!
//! The catalog is constructed once at startup and never mutated. It ships
//! with a built-in demo catalog; an alternative list can be loaded from a
//! TOML file with `[[products]]` entries (prices quoted as strings, e.g.
//! `price = "59.99"`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A single purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stable for the session.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Category label; the distinct set across products drives the filter.
    pub category: String,
    /// Non-negative price in the store currency.
    pub price: Decimal,
    /// Image URL, subject to lazy loading in interactive views.
    pub image: String,
}

/// Errors raised while loading a catalog from a file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate product id '{id}'")]
    DuplicateId { id: String },
    #[error("product '{id}' has a negative price")]
    NegativePrice { id: String },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// The read-only product list plus derived category data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating id uniqueness and price sign.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] or [`CatalogError::NegativePrice`]
    /// when the product list violates the catalog invariants.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
            if product.price.is_sign_negative() {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                });
            }
        }
        Ok(Self { products })
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            demo_product(
                "p1",
                "Wireless Headphones",
                "Audio",
                Decimal::new(5999, 2),
                "https://images.unsplash.com/photo-1518441902110-0f1ab3d42e4a?q=80&w=800&auto=format&fit=crop",
            ),
            demo_product(
                "p2",
                "Smart Watch",
                "Wearables",
                Decimal::new(7999, 2),
                "https://images.unsplash.com/photo-1518085250887-2f903c200fee?q=80&w=800&auto=format&fit=crop",
            ),
            demo_product(
                "p3",
                "Gaming Mouse",
                "Accessories",
                Decimal::new(2999, 2),
                "https://images.unsplash.com/photo-1585079542156-2755d9c4d04b?q=80&w=800&auto=format&fit=crop",
            ),
            demo_product(
                "p4",
                "Portable Speaker",
                "Audio",
                Decimal::new(4999, 2),
                "https://images.unsplash.com/photo-1526178613714-0a88f1a6c5fb?q=80&w=800&auto=format&fit=crop",
            ),
            demo_product(
                "p5",
                "4K Action Camera",
                "Cameras",
                Decimal::new(11999, 2),
                "https://images.unsplash.com/photo-1519183071298-a2962be96f83?q=80&w=800&auto=format&fit=crop",
            ),
            demo_product(
                "p6",
                "Mechanical Keyboard",
                "Accessories",
                Decimal::new(8999, 2),
                "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=800&auto=format&fit=crop",
            ),
        ];
        Self { products }
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the file cannot be read or parsed,
    /// or when the parsed products violate the catalog invariants.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: CatalogFile =
            toml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::new(file.products)
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns true if a product with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Distinct category values in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Category filter options: the `all` sentinel followed by the
    /// distinct categories in first-seen order.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![ALL_CATEGORIES.to_string()];
        options.extend(self.categories());
        options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn demo_product(id: &str, title: &str, category: &str, price: Decimal, image: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        price,
        image: image.to_string(),
    }
}
