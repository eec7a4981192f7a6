//! Static product catalog.
//!
//! The catalog is the read-only product list the storefront renders from:
//! loaded once at startup from a JSON file, ordered as authored, never
//! mutated afterwards. Collections hold snapshots of its records.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use souq_core::{Product, ProductId};

/// Catalog loading error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog content is not the expected JSON array of products.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share an identifier.
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// The static product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not a JSON array
    /// of products, or contains duplicate ids.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// All products, ordered as authored.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up one product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products shown in the featured row, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_featured)
    }

    /// Products shown in the recommendation feed, in catalog order.
    pub fn ai_suggested(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.ai_suggested)
    }
}
