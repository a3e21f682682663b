//! Property-based tests for the filter/disclosure controller
//!
//! Uses proptest to check that the visible set depends only on the final
//! filter state and that the disclosure and filter controls keep their
//! invariants under arbitrary operation sequences.

use chrono::NaiveDate;
use emptynest_core::{
    CatalogController, CatalogEntry, CatalogStore, EntryStatus, EntryType, PageDom, SortOrder,
    Tier,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const CATEGORIES: [&str; 4] = ["Travel", "Home & Garden", "Wellness", "Food & Drink"];

fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop_oneof![Just(Tier::Hero), Just(Tier::Featured), Just(Tier::Additional)]
}

fn sort_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::FeaturedFirst),
        Just(SortOrder::Newest),
        Just(SortOrder::Alphabetical),
    ]
}

/// Generate a catalog of perks with unique ids
fn store_strategy() -> impl Strategy<Value = CatalogStore> {
    prop::collection::vec(
        (
            0..CATEGORIES.len(),
            tier_strategy(),
            any::<bool>(),
            any::<bool>(),
            1..28u32,
            "[a-zA-Z]{1,8}",
        ),
        0..24,
    )
    .prop_map(|rows| {
        let mut store = CatalogStore::new();
        for (i, (category, tier, featured, active, day, brand)) in rows.into_iter().enumerate() {
            let status = if active {
                EntryStatus::Active
            } else {
                EntryStatus::Inactive
            };
            let entry = CatalogEntry::new(
                format!("perk-{:02}", i),
                EntryType::Perk,
                brand,
                CATEGORIES[category],
                "https://example.com",
                NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            )
            .with_tier(tier)
            .with_featured(featured)
            .with_status(status);
            store.add_entry(entry).unwrap();
        }
        store
    })
}

/// User-initiated operations on the codes view
#[derive(Debug, Clone)]
enum Op {
    Select(String),
    Sort(SortOrder),
    ToggleExpanded,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let slugs = prop_oneof![
        Just("all".to_string()),
        Just("featured".to_string()),
        Just("travel".to_string()),
        Just("home-garden".to_string()),
        Just("wellness".to_string()),
        Just("food-drink".to_string()),
        Just("pets".to_string()),
    ];
    prop_oneof![
        3 => slugs.prop_map(Op::Select),
        1 => sort_strategy().prop_map(Op::Sort),
        2 => Just(Op::ToggleExpanded),
    ]
}

fn run(controller: &mut CatalogController, page: &mut PageDom, op: &Op) {
    match op {
        Op::Select(slug) => {
            controller.select_category(slug, page).unwrap();
        }
        Op::Sort(order) => {
            controller.set_sort(*order, page);
        }
        Op::ToggleExpanded => {
            controller.toggle_expanded(page);
        }
    }
}

fn mounted(store: CatalogStore) -> (CatalogController, PageDom) {
    let mut controller = CatalogController::new(store);
    let mut page = PageDom::full();
    controller.mount(&mut page);
    (controller, page)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The visible set depends only on the final state, not the path
    #[test]
    fn visible_set_is_path_independent(
        store in store_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let (mut walked, mut walked_page) = mounted(store.clone());
        for op in &ops {
            run(&mut walked, &mut walked_page, op);
        }
        let final_state = walked.state().clone();

        let (mut direct, mut direct_page) = mounted(store);
        direct.select_category(final_state.active_category.slug(), &mut direct_page).unwrap();
        direct.set_sort(final_state.sort_order, &mut direct_page);
        if final_state.is_expanded {
            direct.toggle_expanded(&mut direct_page);
        }

        prop_assert_eq!(walked.view(), direct.view());
        prop_assert_eq!(walked_page.visible_grid_ids(), direct_page.visible_grid_ids());
        prop_assert_eq!(walked_page.counter(), direct_page.counter());
    }

    /// `all` always shows every active perk
    #[test]
    fn all_yields_total_active_count(store in store_strategy(), expanded in any::<bool>()) {
        let active = store.active_of_type(EntryType::Perk).count();
        let (mut controller, mut page) = mounted(store);
        if expanded {
            controller.toggle_expanded(&mut page);
        }
        let view = controller.select_category("all", &mut page).unwrap();
        prop_assert_eq!(view.visible_count(), active);
        prop_assert_eq!(view.total_count, active);
        prop_assert_eq!(page.visible_grid_ids().len(), active);
    }

    /// Expanding never shrinks the visible set
    #[test]
    fn expanding_is_monotone(store in store_strategy(), op in op_strategy()) {
        let (mut controller, mut page) = mounted(store);
        run(&mut controller, &mut page, &op);
        if controller.state().is_expanded {
            controller.toggle_expanded(&mut page);
        }
        let collapsed = controller.view().visible_count();
        let expanded = controller.toggle_expanded(&mut page).visible_count();
        prop_assert!(expanded >= collapsed);
    }

    /// Exactly one control is active and each operation announces once
    #[test]
    fn one_active_control_one_announcement(
        store in store_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..12),
    ) {
        let (mut controller, mut page) = mounted(store);
        for (i, op) in ops.iter().enumerate() {
            run(&mut controller, &mut page, op);
            let active = page.active_filters();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0], controller.state().active_category.slug());
            prop_assert_eq!(page.announcements().len(), i + 1);
            prop_assert_eq!(page.announcements().last().unwrap(), &controller.view().announcement);
        }
    }

    /// A specific category with no active matches always shows the panel
    #[test]
    fn empty_specific_category_shows_panel(store in store_strategy(), slug in "(travel|wellness|pets)") {
        let (mut controller, mut page) = mounted(store);
        let view = controller.select_category(&slug, &mut page).unwrap().clone();
        if view.visible_count() == 0 {
            prop_assert!(page.empty_state().is_some());
        } else {
            prop_assert!(page.empty_state().is_none());
        }
    }
}
