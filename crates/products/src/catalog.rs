//! Immutable, process-wide product catalog.
//!
//! Built once at startup (from the built-in seed or a JSON file) and only read
//! afterwards, so it can be shared across request handlers behind an `Arc`
//! without locking.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;
use crate::seed;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog seed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode catalog seed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Ordered product collection with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, enforcing per-record rules and id uniqueness.
    ///
    /// Listing order is the order of `products`.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id(), position).is_some() {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// The built-in default catalog, checked like any other seed.
    pub fn seeded() -> DomainResult<Self> {
        Self::new(seed::default_products())
    }

    /// Build from a JSON array of product objects.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        Ok(Self::new(products)?)
    }

    /// Read and build from a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let catalog = Self::from_json_slice(&bytes)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog seed loaded");
        Ok(catalog)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category equals `category`, ignoring case.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(category))
            .collect()
    }

    /// Listing with an optional category filter.
    ///
    /// A missing, empty, or whitespace-only filter lists everything; otherwise
    /// the trimmed filter is matched case-insensitively.
    pub fn list(&self, category: Option<&str>) -> Vec<&Product> {
        match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => self.by_category(category),
            None => self.products.iter().collect(),
        }
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.index
            .get(&id)
            .map(|&position| &self.products[position])
            .ok_or_else(DomainError::not_found)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
