//! Products domain module (read-only catalog).
//!
//! This crate holds the product record and the immutable catalog built from it,
//! implemented as deterministic domain logic (no HTTP).

pub mod catalog;
pub mod product;
pub mod seed;

pub use catalog::{Catalog, CatalogLoadError};
pub use product::Product;
