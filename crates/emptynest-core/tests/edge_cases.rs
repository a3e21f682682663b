//! Edge case and boundary condition tests
//!
//! Empty catalogs, odd category text, sentinel collisions and repeated
//! operations against the in-memory page.

use std::io;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use emptynest_core::{
    CatalogController, CatalogEntry, CatalogError, CatalogStore, CategoryFilter, EntryStatus,
    EntryType, MountPoint, PageDom, RawEntry, Tier,
};

fn perk(id: &str, category: &str) -> CatalogEntry {
    CatalogEntry::new(
        id,
        EntryType::Perk,
        format!("Brand {}", id),
        category,
        "https://example.com",
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    )
    .with_featured(true)
}

fn mounted(store: CatalogStore) -> (CatalogController, PageDom) {
    let mut controller = CatalogController::new(store);
    let mut page = PageDom::full();
    controller.mount(&mut page);
    (controller, page)
}

// ============================================================================
// Empty Catalog
// ============================================================================

/// An empty catalog still renders counters and controls
#[test]
fn test_empty_catalog_default_view() {
    let (controller, page) = mounted(CatalogStore::new());

    assert!(page.cards(MountPoint::Grid).is_empty());
    assert_eq!(page.counter(), "No codes in Featured");
    assert!(page.empty_state().is_none());
    assert!(page.show_more().is_none());
    assert_eq!(page.active_filters(), vec!["featured"]);
    assert_eq!(controller.view().total_count, 0);
}

/// Every perk inactive behaves like an empty catalog
#[test]
fn test_all_perks_inactive() {
    let mut store = CatalogStore::new();
    store
        .add_entry(perk("a", "Travel").with_status(EntryStatus::Inactive))
        .unwrap();
    let (mut controller, mut page) = mounted(store);

    let view = controller.select_category("all", &mut page).unwrap();
    assert_eq!(view.total_count, 0);
    assert_eq!(view.counter_text, "No codes in All");
    assert!(page.cards(MountPoint::Grid).is_empty());
}

// ============================================================================
// Category Text
// ============================================================================

/// Label text, slug and padded input all select the same category
#[test]
fn test_category_spellings_resolve_to_one_slug() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Home & Garden")).unwrap();
    store.add_entry(perk("b", "home-garden")).unwrap();
    let (mut controller, mut page) = mounted(store);

    for input in ["Home & Garden", "home-garden", "  HOME   garden "] {
        let view = controller.select_category(input, &mut page).unwrap();
        assert_eq!(view.category, CategoryFilter::Category("home-garden".into()));
        assert_eq!(view.visible_count(), 2);
        assert_eq!(view.category_name, "Home & Garden");
    }
    assert_eq!(page.announcements().len(), 3);
}

/// Blank and punctuation-only selections are rejected without side effects
#[test]
fn test_blank_category_selection() {
    let (mut controller, mut page) = mounted(CatalogStore::new());

    for input in ["", "   ", "&&", "--"] {
        let err = controller.select_category(input, &mut page).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCategory(_)));
    }
    assert!(page.announcements().is_empty());
    assert_eq!(controller.state().active_category, CategoryFilter::Featured);
}

/// A category literally named "All" is shadowed by the sentinel
#[test]
fn test_category_named_like_sentinel() {
    let mut store = CatalogStore::new();
    store
        .add_entry(perk("a", "All").with_featured(false))
        .unwrap();
    store.add_entry(perk("b", "Travel")).unwrap();
    let (mut controller, mut page) = mounted(store);

    let view = controller.select_category("All", &mut page).unwrap();
    assert_eq!(view.category, CategoryFilter::All);
    assert_eq!(view.visible_count(), 2);
    assert_eq!(page.active_filters(), vec!["all"]);
}

// ============================================================================
// Repeated Operations
// ============================================================================

/// Selecting the same category twice announces twice, nothing else changes
#[test]
fn test_reselecting_category() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Travel")).unwrap();
    let (mut controller, mut page) = mounted(store);

    controller.select_category("travel", &mut page).unwrap();
    let first = controller.view().clone();
    controller.select_category("travel", &mut page).unwrap();

    assert_eq!(controller.view(), &first);
    assert_eq!(page.announcements(), ["1 code shown for Travel", "1 code shown for Travel"]);
}

/// Expanding a specific category changes nothing visible
#[test]
fn test_expand_outside_featured_is_inert() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Travel")).unwrap();
    store
        .add_entry(perk("b", "Travel").with_tier(Tier::Additional))
        .unwrap();
    let (mut controller, mut page) = mounted(store);

    controller.select_category("travel", &mut page).unwrap();
    let before = controller.view().visible_ids.clone();
    controller.toggle_expanded(&mut page);

    assert_eq!(controller.view().visible_ids, before);
    assert!(page.show_more().is_none());
    assert!(controller.state().is_expanded);
}

/// The expanded flag survives a detour through another category
#[test]
fn test_expanded_flag_persists_across_categories() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Travel")).unwrap();
    store
        .add_entry(perk("b", "Wellness").with_tier(Tier::Additional))
        .unwrap();
    let (mut controller, mut page) = mounted(store);

    controller.toggle_expanded(&mut page);
    controller.select_category("all", &mut page).unwrap();
    controller.select_category("featured", &mut page).unwrap();

    assert_eq!(page.visible_grid_ids().len(), 2);
    assert_eq!(page.show_more().unwrap().label, "Show Less");
}

/// Removing the last perk of the selected category empties the grid
#[test]
fn test_remove_last_entry_of_selected_category() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Travel")).unwrap();
    store.add_entry(perk("b", "Wellness")).unwrap();
    let (mut controller, mut page) = mounted(store);

    controller.select_category("wellness", &mut page).unwrap();
    controller.remove_entry("b", &mut page).unwrap();

    assert!(page.empty_state().is_some());
    assert_eq!(page.counter(), "No codes in Wellness");
    assert_eq!(page.active_filters(), vec!["wellness"]);
    // One announcement for the selection, none for the removal
    assert_eq!(page.announcements().len(), 1);
}

/// Setting the status an entry already has is accepted
#[test]
fn test_redundant_status_change() {
    let mut store = CatalogStore::new();
    store.add_entry(perk("a", "Travel")).unwrap();
    let (mut controller, mut page) = mounted(store);

    controller
        .set_status("a", EntryStatus::Active, &mut page)
        .unwrap();
    assert_eq!(page.visible_grid_ids(), vec!["a"]);
}

// ============================================================================
// Logging
// ============================================================================

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rejected records warn and every view operation logs at debug
#[test]
fn test_load_and_operations_are_logged() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let records = [RawEntry {
        id: "no-link",
        entry_type: EntryType::Perk,
        brand_name: "Cedar & Salt",
        category: "Home",
        short_description: "",
        link_url: "",
        discount_code: Some("NEST15"),
        tier: Tier::Featured,
        featured: true,
        status: EntryStatus::Active,
        date_added: "2025-02-10",
    }];

    tracing::subscriber::with_default(subscriber, || {
        let (mut controller, rejected) = CatalogController::from_records(&records);
        assert_eq!(rejected.len(), 1);

        let mut page = PageDom::full();
        controller.mount(&mut page);
        controller.select_category("all", &mut page).unwrap();
    });

    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("Skipping catalog record"));
    assert!(output.contains("no-link"));
    assert!(output.contains("Filter category selected"));
    assert!(output.contains("Catalog view applied"));
}
