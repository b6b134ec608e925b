//! Synthetic filler records.
//!
//! Fills the catalog out to its target size with records drawn uniformly
//! from a small fixed taxonomy. Randomness is injected so tests can pin
//! exact records with a seeded rng; the process-wide catalog passes the
//! ambient thread-local rng instead, so its filler portion differs
//! across runs.

use std::collections::BTreeMap;

use rand::Rng;

use storefront_core::ProductId;

use crate::product::Product;

/// Number of filler records in the process-wide catalog.
pub const GENERATED_COUNT: usize = 134;

/// Generator-only category taxonomy. Intentionally not the same set of
/// categories the curated list covers.
const TAXONOMY: &[(&str, &[&str])] = &[
    ("Electronics", &["Tablets", "Smartwatches", "Cameras", "Gaming"]),
    ("Fashion", &["Women's Clothing", "Accessories", "Bags"]),
    ("Home & Garden", &["Furniture", "Decor", "Kitchen"]),
    ("Sports & Outdoors", &["Outdoor Gear", "Sports Equipment"]),
    ("Toys & Games", &["Board Games", "Educational Toys"]),
];

const BRANDS: &[&str] = &[
    "Samsung",
    "Apple",
    "Sony",
    "Nike",
    "Adidas",
    "Amazon",
    "Google",
    "Microsoft",
];

const IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/3945681/pexels-photo-3945681.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/18105/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/205421/pexels-photo-205421.jpeg?auto=compress&cs=tinysrgb&w=400",
];

/// Generate `count` filler records with decimal ids starting at `first_id`.
pub fn generate(count: usize, first_id: u32, rng: &mut impl Rng) -> Vec<Product> {
    (0..count)
        .map(|offset| filler(first_id + offset as u32, rng))
        .collect()
}

fn filler(id: u32, rng: &mut impl Rng) -> Product {
    let (category, subcategories) = TAXONOMY[rng.random_range(0..TAXONOMY.len())];
    let subcategory = subcategories[rng.random_range(0..subcategories.len())];
    let brand = BRANDS[rng.random_range(0..BRANDS.len())];
    let image = IMAGES[rng.random_range(0..IMAGES.len())];

    let price = rng.random_range(20..=2019);
    let rating: f64 = rng.random_range(3.0..5.0);
    // One decimal place, as authored upstream.
    let rating = (rating * 10.0).round() / 10.0;
    let review_count = rng.random_range(100..=5099);
    let stock_count = rng.random_range(10..=209);

    Product {
        id: ProductId::from(id),
        name: format!("{brand} {category} Product {id}"),
        price,
        original_price: None,
        description: format!(
            "High-quality {} from {brand} with premium features and excellent build quality.",
            subcategory.to_lowercase()
        ),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        brand: brand.to_string(),
        image: image.to_string(),
        images: vec![image.to_string()],
        rating,
        review_count,
        in_stock: true,
        stock_count,
        features: vec![
            "Premium Quality".to_string(),
            "Latest Technology".to_string(),
            "Durable Build".to_string(),
            "Great Value".to_string(),
        ],
        specifications: BTreeMap::from([
            ("Brand".to_string(), brand.to_string()),
            ("Category".to_string(), category.to_string()),
            ("Model".to_string(), format!("{brand}-{id}")),
            ("Warranty".to_string(), "1 Year".to_string()),
        ]),
        tags: vec![
            "quality".to_string(),
            "popular".to_string(),
            "trending".to_string(),
            "recommended".to_string(),
        ],
        discount: None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn same_seed_yields_identical_records() {
        let a = generate(25, 17, &mut StdRng::seed_from_u64(7));
        let b = generate(25, 17, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn ids_continue_sequentially_from_first_id() {
        let products = generate(10, 17, &mut StdRng::seed_from_u64(0));
        let ids: Vec<_> = products.iter().filter_map(|p| p.id.index()).collect();
        assert_eq!(ids, (17..27).collect::<Vec<_>>());
    }

    #[test]
    fn derived_fields_stay_within_bounds() {
        let products = generate(200, 1, &mut StdRng::seed_from_u64(42));
        for product in &products {
            assert!((20..=2019).contains(&product.price));
            assert!((3.0..=5.0).contains(&product.rating), "rating {}", product.rating);
            assert_eq!(
                product.rating,
                (product.rating * 10.0).round() / 10.0,
                "rating {} not one decimal place",
                product.rating
            );
            assert!((100..=5099).contains(&product.review_count));
            assert!((10..=209).contains(&product.stock_count));
            assert!(product.in_stock);
        }
    }

    #[test]
    fn picks_come_from_the_fixed_pools() {
        let products = generate(200, 1, &mut StdRng::seed_from_u64(42));
        for product in &products {
            let (_, subcategories) = TAXONOMY
                .iter()
                .find(|(category, _)| *category == product.category)
                .expect("category outside taxonomy");
            assert!(subcategories.contains(&product.subcategory.as_str()));
            assert!(BRANDS.contains(&product.brand.as_str()));
            assert!(IMAGES.contains(&product.image.as_str()));
            assert_eq!(product.images, vec![product.image.clone()]);
        }
    }

    #[test]
    fn identifying_fields_follow_the_template() {
        let products = generate(5, 17, &mut StdRng::seed_from_u64(3));
        for product in &products {
            let id = product.id.index().unwrap();
            assert_eq!(
                product.name,
                format!("{} {} Product {}", product.brand, product.category, id)
            );
            assert_eq!(
                product.specifications.get("Model"),
                Some(&format!("{}-{}", product.brand, id))
            );
            assert!(product.description.contains(&product.subcategory.to_lowercase()));
            assert!(product.original_price.is_none());
            assert!(product.discount.is_none());
        }
    }
}
