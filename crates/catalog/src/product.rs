use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// Immutable catalog record.
///
/// Field names serialize in camelCase so the JSON shape matches what the
/// storefront rendering layer consumes (`originalPrice`, `reviewCount`,
/// `inStock`, `stockCount`). The optional markdown fields are omitted
/// entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    /// Pre-markdown price, present only when a markdown applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    /// Primary image, conventionally duplicating the first entry of `images`.
    pub image: String,
    pub images: Vec<String>,
    /// One decimal place, in [0, 5].
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    pub stock_count: u32,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub tags: Vec<String>,
    /// Integer markdown percentage, authored independently of
    /// `original_price` (the two are not reconciled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
}

impl Product {
    /// True when any searchable field contains `needle` as a substring.
    ///
    /// `needle` must already be lower-cased; the fields are lower-cased
    /// here so matching is case-insensitive end to end.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(original_price: Option<u32>, discount: Option<u32>) -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Sample".to_string(),
            price: 100,
            original_price,
            description: "A sample record.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Tablets".to_string(),
            brand: "Acme".to_string(),
            image: "https://example.com/a.jpeg".to_string(),
            images: vec!["https://example.com/a.jpeg".to_string()],
            rating: 4.5,
            review_count: 12,
            in_stock: true,
            stock_count: 3,
            features: vec!["Compact".to_string()],
            specifications: BTreeMap::from([("Weight".to_string(), "1kg".to_string())]),
            tags: vec!["compact".to_string()],
            discount,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample(Some(120), Some(17))).unwrap();
        assert_eq!(value["originalPrice"], 120);
        assert_eq!(value["reviewCount"], 12);
        assert_eq!(value["inStock"], true);
        assert_eq!(value["stockCount"], 3);
        assert_eq!(value["discount"], 17);
    }

    #[test]
    fn omits_absent_markdown_fields() {
        let value = serde_json::to_value(sample(None, None)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("originalPrice"));
        assert!(!object.contains_key("discount"));
    }

    #[test]
    fn matches_is_substring_based_per_field() {
        let product = sample(None, None);
        assert!(product.matches("samp"));
        assert!(product.matches("acme"));
        assert!(product.matches("record"));
        assert!(product.matches("compact"));
        assert!(!product.matches("tablets"));
    }
}
