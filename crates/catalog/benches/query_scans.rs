use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rand::SeedableRng;
use rand::rngs::StdRng;

use storefront_catalog::generate::GENERATED_COUNT;
use storefront_catalog::{Catalog, seed};

/// Linear scans over a full-size catalog. Deterministic input via a seeded
/// rng so runs are comparable.
fn bench_query_scans(c: &mut Criterion) {
    let catalog = Catalog::assemble(
        seed::curated(),
        GENERATED_COUNT,
        &mut StdRng::seed_from_u64(99),
    );

    c.bench_function("search_common_term", |b| {
        b.iter(|| catalog.search(black_box("premium")))
    });

    c.bench_function("search_no_match", |b| {
        b.iter(|| catalog.search(black_box("zzzzzz")))
    });

    c.bench_function("products_by_category", |b| {
        b.iter(|| catalog.products_by_category(black_box("Electronics")))
    });

    c.bench_function("categories_first_seen", |b| b.iter(|| catalog.categories()));

    c.bench_function("subcategories_scoped", |b| {
        b.iter(|| catalog.subcategories(black_box("Electronics")))
    });
}

criterion_group!(benches, bench_query_scans);
criterion_main!(benches);
