//! Benchmarks for catalog filtering
//!
//! Run with: cargo bench -p emptynest-core

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emptynest_core::{
    compute_view, CatalogController, CatalogEntry, CatalogStore, CategoryFilter, EntryType,
    FilterState, PageDom, SortOrder, Tier,
};

const CATEGORIES: [&str; 6] = ["Travel", "Home & Garden", "Wellness", "Fashion", "Tech", "Food & Drink"];

fn store_with(count: usize) -> CatalogStore {
    let mut store = CatalogStore::new();
    for i in 0..count {
        let entry = CatalogEntry::new(
            format!("perk-{}", i),
            EntryType::Perk,
            format!("Brand {}", count - i),
            CATEGORIES[i % CATEGORIES.len()],
            "https://example.com",
            NaiveDate::from_ymd_opt(2025, 1, 1 + (i % 28) as u32).unwrap(),
        )
        .with_featured(i % 3 == 0)
        .with_tier(if i % 4 == 0 { Tier::Additional } else { Tier::Featured });
        store.add_entry(entry).unwrap();
    }
    store
}

// ============================================================================
// View Computation Benchmarks
// ============================================================================

fn bench_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");

    for size in [50, 500, 2000] {
        let store = store_with(size);
        let states = [
            ("featured", FilterState::default()),
            (
                "all_alphabetical",
                FilterState {
                    active_category: CategoryFilter::All,
                    is_expanded: true,
                    sort_order: SortOrder::Alphabetical,
                },
            ),
            (
                "category_newest",
                FilterState {
                    active_category: CategoryFilter::Category("travel".to_string()),
                    is_expanded: false,
                    sort_order: SortOrder::Newest,
                },
            ),
        ];
        for (name, state) in states {
            group.bench_with_input(BenchmarkId::new(name, size), &state, |b, state| {
                b.iter(|| black_box(compute_view(&store, state)))
            });
        }
    }

    group.finish();
}

// ============================================================================
// Controller Round-trip Benchmarks
// ============================================================================

fn bench_select_category(c: &mut Criterion) {
    let mut controller = CatalogController::new(store_with(500));
    let mut page = PageDom::full();
    controller.mount(&mut page);

    c.bench_function("select_category_500", |b| {
        b.iter(|| {
            controller.select_category("wellness", &mut page).unwrap();
            controller.select_category("featured", &mut page).unwrap();
        })
    });
}

criterion_group!(benches, bench_compute_view, bench_select_category);
criterion_main!(benches);
