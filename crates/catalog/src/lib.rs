//! `storefront-catalog` — static in-memory product catalog.
//!
//! This crate owns the process-wide, read-only product collection (a
//! curated seed list concatenated with generated filler records) and
//! answers pure queries over it, implemented as plain linear scans
//! (no IO, no HTTP, no storage).

pub mod generate;
pub mod product;
pub mod seed;
pub mod store;

pub use product::Product;
pub use store::Catalog;

pub use storefront_core::{CatalogError, CatalogResult, ProductId};
