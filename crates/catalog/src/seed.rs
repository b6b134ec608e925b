//! Hand-authored seed records.
//!
//! These are the curated storefront entries with real-world attributes.
//! The rest of the catalog is filled out by [`crate::generate`].

use std::collections::BTreeMap;

use storefront_core::ProductId;

use crate::product::Product;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn photo(path: &str) -> String {
    format!("https://images.pexels.com/photos/{path}?auto=compress&cs=tinysrgb&w=400")
}

/// The curated list, in catalog order. Ids "1" through "16".
pub fn curated() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "iPhone 15 Pro Max".to_string(),
            price: 1199,
            original_price: Some(1299),
            description: "The most advanced iPhone with titanium design, A17 Pro chip, and professional camera system.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Smartphones".to_string(),
            brand: "Apple".to_string(),
            image: photo("788946/pexels-photo-788946.jpeg"),
            images: vec![
                photo("788946/pexels-photo-788946.jpeg"),
                photo("1092644/pexels-photo-1092644.jpeg"),
            ],
            rating: 4.8,
            review_count: 2847,
            in_stock: true,
            stock_count: 45,
            features: strings(&["A17 Pro Chip", "48MP Camera", "Titanium Design", "USB-C"]),
            specifications: specs(&[
                ("Display", "6.7-inch Super Retina XDR"),
                ("Storage", "256GB"),
                ("Camera", "48MP Main + 12MP Ultra Wide"),
                ("Battery", "Up to 29 hours video playback"),
            ]),
            tags: strings(&["premium", "flagship", "camera", "performance"]),
            discount: Some(8),
        },
        Product {
            id: ProductId::new("2"),
            name: "Samsung Galaxy S24 Ultra".to_string(),
            price: 1099,
            original_price: None,
            description: "Ultimate Android flagship with S Pen, 200MP camera, and AI features.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Smartphones".to_string(),
            brand: "Samsung".to_string(),
            image: photo("1092644/pexels-photo-1092644.jpeg"),
            images: vec![photo("1092644/pexels-photo-1092644.jpeg")],
            rating: 4.7,
            review_count: 1923,
            in_stock: true,
            stock_count: 32,
            features: strings(&["S Pen", "200MP Camera", "AI Features", "120Hz Display"]),
            specifications: specs(&[
                ("Display", "6.8-inch Dynamic AMOLED 2X"),
                ("Storage", "256GB"),
                ("Camera", "200MP Main + 50MP Periscope"),
                ("RAM", "12GB"),
            ]),
            tags: strings(&["android", "s-pen", "camera", "productivity"]),
            discount: None,
        },
        Product {
            id: ProductId::new("3"),
            name: "Google Pixel 8 Pro".to_string(),
            price: 899,
            original_price: None,
            description: "Pure Android experience with advanced AI photography and Magic Eraser.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Smartphones".to_string(),
            brand: "Google".to_string(),
            image: photo("699122/pexels-photo-699122.jpeg"),
            images: vec![photo("699122/pexels-photo-699122.jpeg")],
            rating: 4.6,
            review_count: 1456,
            in_stock: true,
            stock_count: 28,
            features: strings(&["Tensor G3", "AI Photography", "Magic Eraser", "Pure Android"]),
            specifications: specs(&[
                ("Display", "6.7-inch LTPO OLED"),
                ("Storage", "128GB"),
                ("Camera", "50MP Main + 48MP Ultra Wide"),
                ("OS", "Android 14"),
            ]),
            tags: strings(&["google", "ai", "photography", "android"]),
            discount: None,
        },
        Product {
            id: ProductId::new("4"),
            name: "OnePlus 12".to_string(),
            price: 799,
            original_price: None,
            description: "Flagship killer with Snapdragon 8 Gen 3 and ultra-fast charging.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Smartphones".to_string(),
            brand: "OnePlus".to_string(),
            image: photo("1092644/pexels-photo-1092644.jpeg"),
            images: vec![photo("1092644/pexels-photo-1092644.jpeg")],
            rating: 4.5,
            review_count: 892,
            in_stock: true,
            stock_count: 41,
            features: strings(&[
                "Snapdragon 8 Gen 3",
                "100W Fast Charging",
                "Hasselblad Camera",
                "OxygenOS 14",
            ]),
            specifications: specs(&[
                ("Display", "6.82-inch LTPO AMOLED"),
                ("Storage", "256GB"),
                ("Camera", "50MP Main + 64MP Periscope"),
                ("RAM", "12GB"),
            ]),
            tags: strings(&["flagship-killer", "fast-charging", "performance", "value"]),
            discount: None,
        },
        Product {
            id: ProductId::new("5"),
            name: "Xiaomi 14 Ultra".to_string(),
            price: 1099,
            original_price: None,
            description: "Photography flagship with Leica cameras and premium build quality.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Smartphones".to_string(),
            brand: "Xiaomi".to_string(),
            image: photo("788946/pexels-photo-788946.jpeg"),
            images: vec![photo("788946/pexels-photo-788946.jpeg")],
            rating: 4.6,
            review_count: 743,
            in_stock: true,
            stock_count: 23,
            features: strings(&[
                "Leica Cameras",
                "Snapdragon 8 Gen 3",
                "90W Charging",
                "IP68 Rating",
            ]),
            specifications: specs(&[
                ("Display", "6.73-inch LTPO AMOLED"),
                ("Storage", "512GB"),
                ("Camera", "50MP Main + 50MP Ultra Wide + 50MP Periscope"),
                ("RAM", "16GB"),
            ]),
            tags: strings(&["leica", "photography", "premium", "flagship"]),
            discount: None,
        },
        Product {
            id: ProductId::new("6"),
            name: "MacBook Pro 16-inch M3 Max".to_string(),
            price: 2499,
            original_price: None,
            description: "Professional laptop with M3 Max chip for ultimate performance and creativity.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Laptops".to_string(),
            brand: "Apple".to_string(),
            image: photo("18105/pexels-photo.jpg"),
            images: vec![photo("18105/pexels-photo.jpg")],
            rating: 4.9,
            review_count: 892,
            in_stock: true,
            stock_count: 15,
            features: strings(&[
                "M3 Max Chip",
                "16-inch Liquid Retina XDR",
                "22-hour battery",
                "Studio-quality mics",
            ]),
            specifications: specs(&[
                ("Processor", "Apple M3 Max"),
                ("RAM", "36GB Unified Memory"),
                ("Storage", "1TB SSD"),
                ("Display", "16.2-inch Liquid Retina XDR"),
            ]),
            tags: strings(&["professional", "creative", "performance", "apple"]),
            discount: None,
        },
        Product {
            id: ProductId::new("7"),
            name: "Dell XPS 13 Plus".to_string(),
            price: 1299,
            original_price: None,
            description: "Ultra-thin laptop with InfinityEdge display and premium build quality.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Laptops".to_string(),
            brand: "Dell".to_string(),
            image: photo("205421/pexels-photo-205421.jpeg"),
            images: vec![photo("205421/pexels-photo-205421.jpeg")],
            rating: 4.5,
            review_count: 634,
            in_stock: true,
            stock_count: 22,
            features: strings(&[
                "InfinityEdge Display",
                "12th Gen Intel Core",
                "Premium Materials",
                "Compact Design",
            ]),
            specifications: specs(&[
                ("Processor", "Intel Core i7-1260P"),
                ("RAM", "16GB LPDDR5"),
                ("Storage", "512GB SSD"),
                ("Display", "13.4-inch FHD+"),
            ]),
            tags: strings(&["ultrabook", "portable", "business", "premium"]),
            discount: None,
        },
        Product {
            id: ProductId::new("8"),
            name: "ThinkPad X1 Carbon Gen 11".to_string(),
            price: 1599,
            original_price: None,
            description: "Business laptop with legendary ThinkPad reliability and security features.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Laptops".to_string(),
            brand: "Lenovo".to_string(),
            image: photo("18105/pexels-photo.jpg"),
            images: vec![photo("18105/pexels-photo.jpg")],
            rating: 4.7,
            review_count: 1234,
            in_stock: true,
            stock_count: 18,
            features: strings(&["Carbon Fiber Build", "TrackPoint", "Dolby Atmos", "Rapid Charge"]),
            specifications: specs(&[
                ("Processor", "Intel Core i7-1365U"),
                ("RAM", "32GB LPDDR5"),
                ("Storage", "1TB SSD"),
                ("Display", "14-inch WUXGA"),
            ]),
            tags: strings(&["business", "durable", "security", "professional"]),
            discount: None,
        },
        Product {
            id: ProductId::new("9"),
            name: "Sony WH-1000XM5".to_string(),
            price: 349,
            original_price: Some(399),
            description: "Industry-leading noise canceling headphones with exceptional sound quality.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Headphones".to_string(),
            brand: "Sony".to_string(),
            image: photo("3945681/pexels-photo-3945681.jpeg"),
            images: vec![photo("3945681/pexels-photo-3945681.jpeg")],
            rating: 4.7,
            review_count: 3421,
            in_stock: true,
            stock_count: 67,
            features: strings(&[
                "Industry-leading ANC",
                "30-hour battery",
                "Quick Charge",
                "Multipoint connection",
            ]),
            specifications: specs(&[
                ("Driver", "30mm"),
                ("Battery Life", "30 hours"),
                ("Charging", "USB-C Quick Charge"),
                ("Weight", "250g"),
            ]),
            tags: strings(&["noise-canceling", "wireless", "premium", "travel"]),
            discount: Some(13),
        },
        Product {
            id: ProductId::new("10"),
            name: "AirPods Pro (2nd Gen)".to_string(),
            price: 249,
            original_price: None,
            description: "Advanced noise cancellation with spatial audio and adaptive transparency.".to_string(),
            category: "Electronics".to_string(),
            subcategory: "Headphones".to_string(),
            brand: "Apple".to_string(),
            image: photo("3945681/pexels-photo-3945681.jpeg"),
            images: vec![photo("3945681/pexels-photo-3945681.jpeg")],
            rating: 4.6,
            review_count: 2156,
            in_stock: true,
            stock_count: 89,
            features: strings(&[
                "Active Noise Cancellation",
                "Spatial Audio",
                "MagSafe Charging",
                "Sweat Resistant",
            ]),
            specifications: specs(&[
                ("Driver", "Custom Apple"),
                ("Battery Life", "6 hours + 24 hours case"),
                ("Charging", "Lightning/MagSafe"),
                ("Weight", "5.3g each"),
            ]),
            tags: strings(&["apple", "anc", "spatial-audio", "wireless"]),
            discount: None,
        },
        Product {
            id: ProductId::new("11"),
            name: "Levi's 501 Original Jeans".to_string(),
            price: 89,
            original_price: None,
            description: "Classic straight-leg jeans with authentic fit and timeless style.".to_string(),
            category: "Fashion".to_string(),
            subcategory: "Men's Clothing".to_string(),
            brand: "Levi's".to_string(),
            image: photo("1598505/pexels-photo-1598505.jpeg"),
            images: vec![photo("1598505/pexels-photo-1598505.jpeg")],
            rating: 4.4,
            review_count: 5432,
            in_stock: true,
            stock_count: 156,
            features: strings(&["100% Cotton", "Button Fly", "Straight Leg", "Classic Fit"]),
            specifications: specs(&[
                ("Material", "100% Cotton Denim"),
                ("Fit", "Straight"),
                ("Rise", "Mid Rise"),
                ("Care", "Machine Wash"),
            ]),
            tags: strings(&["classic", "denim", "casual", "timeless"]),
            discount: None,
        },
        Product {
            id: ProductId::new("12"),
            name: "Nike Air Force 1 '07".to_string(),
            price: 110,
            original_price: None,
            description: "Iconic basketball shoe with classic design and all-day comfort.".to_string(),
            category: "Fashion".to_string(),
            subcategory: "Shoes".to_string(),
            brand: "Nike".to_string(),
            image: photo("2529148/pexels-photo-2529148.jpeg"),
            images: vec![photo("2529148/pexels-photo-2529148.jpeg")],
            rating: 4.6,
            review_count: 8765,
            in_stock: true,
            stock_count: 234,
            features: strings(&["Air Cushioning", "Leather Upper", "Rubber Outsole", "Classic Design"]),
            specifications: specs(&[
                ("Upper", "Leather"),
                ("Sole", "Rubber"),
                ("Cushioning", "Nike Air"),
                ("Style", "Low Top"),
            ]),
            tags: strings(&["sneakers", "basketball", "classic", "comfortable"]),
            discount: None,
        },
        Product {
            id: ProductId::new("13"),
            name: "Dyson V15 Detect Absolute".to_string(),
            price: 749,
            original_price: None,
            description: "Advanced cordless vacuum with laser dust detection and powerful suction.".to_string(),
            category: "Home & Garden".to_string(),
            subcategory: "Appliances".to_string(),
            brand: "Dyson".to_string(),
            image: photo("4239091/pexels-photo-4239091.jpeg"),
            images: vec![photo("4239091/pexels-photo-4239091.jpeg")],
            rating: 4.8,
            review_count: 1876,
            in_stock: true,
            stock_count: 43,
            features: strings(&[
                "Laser Dust Detection",
                "60-minute Runtime",
                "5-stage Filtration",
                "LCD Screen",
            ]),
            specifications: specs(&[
                ("Runtime", "Up to 60 minutes"),
                ("Bin Capacity", "0.77L"),
                ("Weight", "3.1kg"),
                ("Filtration", "5-stage HEPA"),
            ]),
            tags: strings(&["cordless", "powerful", "advanced", "cleaning"]),
            discount: None,
        },
        Product {
            id: ProductId::new("14"),
            name: "Peloton Bike+".to_string(),
            price: 2495,
            original_price: None,
            description: "Premium indoor cycling bike with rotating HD touchscreen and live classes.".to_string(),
            category: "Sports & Outdoors".to_string(),
            subcategory: "Fitness Equipment".to_string(),
            brand: "Peloton".to_string(),
            image: photo("4162449/pexels-photo-4162449.jpeg"),
            images: vec![photo("4162449/pexels-photo-4162449.jpeg")],
            rating: 4.7,
            review_count: 3421,
            in_stock: true,
            stock_count: 12,
            features: strings(&[
                "23.8\" HD Touchscreen",
                "Auto-Follow Resistance",
                "Apple GymKit",
                "Dolby Atmos",
            ]),
            specifications: specs(&[
                ("Screen", "23.8-inch HD Touchscreen"),
                ("Resistance", "Magnetic"),
                ("Dimensions", "59\" L x 23\" W x 59\" H"),
                ("Weight", "140 lbs"),
            ]),
            tags: strings(&["fitness", "cycling", "premium", "connected"]),
            discount: None,
        },
        Product {
            id: ProductId::new("15"),
            name: "Atomic Habits by James Clear".to_string(),
            price: 18,
            original_price: None,
            description: "Practical guide to building good habits and breaking bad ones.".to_string(),
            category: "Books".to_string(),
            subcategory: "Self-Help".to_string(),
            brand: "Avery".to_string(),
            image: photo("1029141/pexels-photo-1029141.jpeg"),
            images: vec![photo("1029141/pexels-photo-1029141.jpeg")],
            rating: 4.8,
            review_count: 12456,
            in_stock: true,
            stock_count: 567,
            features: strings(&[
                "Bestseller",
                "Practical Strategies",
                "Evidence-Based",
                "Easy to Read",
            ]),
            specifications: specs(&[
                ("Pages", "320"),
                ("Publisher", "Avery"),
                ("Language", "English"),
                ("Format", "Paperback"),
            ]),
            tags: strings(&["habits", "self-improvement", "bestseller", "practical"]),
            discount: None,
        },
        Product {
            id: ProductId::new("16"),
            name: "Olaplex Hair Perfector No. 3".to_string(),
            price: 28,
            original_price: None,
            description: "At-home hair treatment that reduces breakage and strengthens hair.".to_string(),
            category: "Beauty & Personal Care".to_string(),
            subcategory: "Hair Care".to_string(),
            brand: "Olaplex".to_string(),
            image: photo("3993449/pexels-photo-3993449.jpeg"),
            images: vec![photo("3993449/pexels-photo-3993449.jpeg")],
            rating: 4.5,
            review_count: 8934,
            in_stock: true,
            stock_count: 234,
            features: strings(&[
                "Strengthens Hair",
                "Reduces Breakage",
                "Professional Formula",
                "At-Home Treatment",
            ]),
            specifications: specs(&[
                ("Size", "100ml"),
                ("Type", "Leave-in Treatment"),
                ("Hair Type", "All Hair Types"),
                ("Usage", "Weekly Treatment"),
            ]),
            tags: strings(&["hair-care", "treatment", "professional", "strengthening"]),
            discount: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_list_has_sixteen_records() {
        assert_eq!(curated().len(), 16);
    }

    #[test]
    fn curated_ids_are_sequential_and_unique() {
        let products = curated();
        let ids: Vec<_> = products.iter().filter_map(|p| p.id.index()).collect();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn every_record_has_a_primary_image() {
        for product in curated() {
            assert!(!product.images.is_empty(), "product {} has no images", product.id);
            assert_eq!(
                product.image, product.images[0],
                "product {} primary image does not lead the list",
                product.id
            );
        }
    }

    #[test]
    fn markdowns_are_authored_on_the_expected_records() {
        let products = curated();
        let marked: Vec<_> = products
            .iter()
            .filter(|p| p.original_price.is_some() || p.discount.is_some())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(marked, ["1", "9"]);
    }

    #[test]
    fn flagship_phone_record_is_authored_as_expected() {
        let products = curated();
        let phone = &products[0];
        assert_eq!(phone.id.as_str(), "1");
        assert_eq!(phone.name, "iPhone 15 Pro Max");
        assert_eq!(phone.category, "Electronics");
        assert_eq!(phone.subcategory, "Smartphones");
        assert!(phone.tags.iter().any(|t| t == "flagship"));
        assert_eq!(phone.original_price, Some(1299));
        assert_eq!(phone.discount, Some(8));
    }

    #[test]
    fn self_help_book_record_is_authored_as_expected() {
        let products = curated();
        let book = products.iter().find(|p| p.id.as_str() == "15").unwrap();
        assert_eq!(book.category, "Books");
        assert_eq!(book.subcategory, "Self-Help");
    }
}
