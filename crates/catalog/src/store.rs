//! The catalog store: the process-wide collection plus read-only queries.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::Rng;
use tracing::debug;

use storefront_core::{CatalogError, CatalogResult};

use crate::generate::{self, GENERATED_COUNT};
use crate::product::Product;
use crate::seed;

/// Process-wide catalog, built on first access and never mutated after.
///
/// The filler portion draws from the ambient thread-local rng, so it
/// differs across process runs. Callers must not assume reproducibility;
/// tests that need exact records should assemble their own catalog with a
/// seeded rng.
static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::assemble(seed::curated(), GENERATED_COUNT, &mut rand::rng())
});

/// The full in-memory ordered collection of products.
///
/// Write-once at initialization, read-only thereafter; `&Catalog` is safe
/// for unsynchronized concurrent reads. Every query is a linear scan over
/// the collection (~150 records), which is not a performance-critical
/// path.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Build a catalog from explicit records, in the given order.
    ///
    /// No integrity checks run here; see [`Catalog::validate`].
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Concatenate a seed list with `filler` generated records whose ids
    /// continue from the seed's highest decimal id.
    pub fn assemble(seed: Vec<Product>, filler: usize, rng: &mut impl Rng) -> Self {
        let next_id = seed.iter().filter_map(|p| p.id.index()).max().unwrap_or(0) + 1;
        let mut products = seed;
        products.extend(generate::generate(filler, next_id, rng));
        debug!(count = products.len(), filler, "catalog assembled");
        Self { products }
    }

    /// All records in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Records whose `category` equals the argument exactly
    /// (case-sensitive), in catalog order.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Records whose `subcategory` equals the argument exactly
    /// (case-sensitive), independent of category, in catalog order.
    pub fn products_by_subcategory(&self, subcategory: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.subcategory == subcategory)
            .collect()
    }

    /// Case-insensitive substring search over name, description, brand,
    /// and tags. Any one field matching suffices; results keep catalog
    /// order and are not ranked. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products.iter().filter(|p| p.matches(&needle)).collect()
    }

    /// Distinct category values in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Distinct subcategory values among records of `category`, in
    /// first-seen order within that subset. Empty for an absent category.
    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.subcategory.as_str())
            .filter(|subcategory| seen.insert(*subcategory))
            .collect()
    }

    /// Integrity check over the documented record bounds: unique ids, at
    /// least one image, rating within [0, 5].
    ///
    /// Construction deliberately does not run this; the authored data is
    /// trusted and the known markdown/stock inconsistencies are cosmetic.
    /// Returns the first violation found.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut ids = HashSet::new();
        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::duplicate_id(product.id.as_str()));
            }
            if product.images.is_empty() {
                return Err(CatalogError::validation(format!(
                    "product {} has no images",
                    product.id
                )));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::validation(format!(
                    "product {} rating {} outside [0, 5]",
                    product.id, product.rating
                )));
            }
        }
        Ok(())
    }
}
