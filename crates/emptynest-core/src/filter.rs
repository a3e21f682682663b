//! Filter/disclosure computation.
//!
//! Pure functions from `(store, FilterState)` to a [`CatalogView`]. The
//! controller applies the view to a page; nothing here touches a surface.
//!
//! ```text
//! active perks ──► category match ──► tier gate ──► sort ──► visible ids
//!                        │                 │
//!                        │                 └─ excluded ─► show-more count
//!                        └─ none matched (specific category) ─► empty state
//! ```

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::category::{title_from_slug, CategoryFilter};
use crate::types::{CatalogEntry, EntryType, FilterState, SortOrder, Tier};

pub const SHOW_MORE_LABEL: &str = "Show More";
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// Empty-state panel for a specific category with no matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    /// Shortcut selectors offered by the panel
    pub shortcuts: [CategoryFilter; 2],
}

/// The disclosure control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    pub label: &'static str,
    pub expanded: bool,
    /// Entries the tier gate hides while collapsed
    pub hidden_count: usize,
}

/// Everything a render pass needs for the perk grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub category: CategoryFilter,
    pub category_name: String,
    /// Visible perk ids in display order
    pub visible_ids: Vec<String>,
    /// Active perks not in the visible set, in catalog order
    pub hidden_ids: Vec<String>,
    /// Count of all active perks
    pub total_count: usize,
    pub counter_text: String,
    pub empty_state: Option<EmptyState>,
    pub show_more: Option<ShowMore>,
    pub announcement: String,
}

impl CatalogView {
    pub fn visible_count(&self) -> usize {
        self.visible_ids.len()
    }
}

/// Category match
pub fn matches_category(entry: &CatalogEntry, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Featured => entry.featured,
        CategoryFilter::Category(slug) => entry.category_slug() == *slug,
    }
}

/// Tier gate. The collapsed `featured` view keeps only the `Featured`
/// tier; expanding reveals every tier.
pub fn passes_tier_gate(entry: &CatalogEntry, filter: &CategoryFilter, is_expanded: bool) -> bool {
    match filter {
        CategoryFilter::Featured if !is_expanded => entry.tier == Tier::Featured,
        _ => true,
    }
}

/// Total order for a sort mode; ties always fall back to `id`
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry, order: SortOrder) -> Ordering {
    let primary = match order {
        SortOrder::FeaturedFirst => b
            .featured
            .cmp(&a.featured)
            .then_with(|| b.date_added.cmp(&a.date_added)),
        SortOrder::Newest => b.date_added.cmp(&a.date_added),
        SortOrder::Alphabetical => a
            .brand_name
            .to_lowercase()
            .cmp(&b.brand_name.to_lowercase()),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Active perks that match and pass the gate, sorted
pub fn visible_perks<'a>(store: &'a CatalogStore, state: &FilterState) -> Vec<&'a CatalogEntry> {
    let mut visible: Vec<&CatalogEntry> = store
        .active_of_type(EntryType::Perk)
        .filter(|e| matches_category(e, &state.active_category))
        .filter(|e| passes_tier_gate(e, &state.active_category, state.is_expanded))
        .collect();
    visible.sort_by(|a, b| compare_entries(a, b, state.sort_order));
    visible
}

/// Matching perks the collapsed tier gate hides for this category
pub fn tier_hidden_count(store: &CatalogStore, filter: &CategoryFilter) -> usize {
    store
        .active_of_type(EntryType::Perk)
        .filter(|e| matches_category(e, filter))
        .filter(|e| !passes_tier_gate(e, filter, false))
        .count()
}

/// Display name for announcements and counters.
///
/// Specific categories use the original text of the first entry carrying the
/// slug, falling back to a title-cased slug.
pub fn category_name(store: &CatalogStore, filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Featured => "Featured".to_string(),
        CategoryFilter::Category(slug) => store
            .all()
            .iter()
            .find(|e| e.category_slug() == *slug)
            .map(|e| e.category.trim().to_string())
            .unwrap_or_else(|| title_from_slug(slug)),
    }
}

/// Results counter text
pub fn counter_text(
    filter: &CategoryFilter,
    name: &str,
    is_expanded: bool,
    visible: usize,
    total: usize,
) -> String {
    if visible == 0 {
        return format!("No codes in {}", name);
    }
    match filter {
        CategoryFilter::All => {
            format!("Showing {} of {} {}", visible, total, codes_noun(total))
        }
        CategoryFilter::Featured if is_expanded => format!(
            "Showing {} featured and additional {} of {}",
            visible,
            codes_noun(visible),
            total
        ),
        CategoryFilter::Featured => format!(
            "Showing {} featured {} of {}",
            visible,
            codes_noun(visible),
            total
        ),
        CategoryFilter::Category(_) => format!(
            "Showing {} of {} {} in {}",
            visible,
            total,
            codes_noun(total),
            name
        ),
    }
}

/// Live-region status text
pub fn announcement_text(name: &str, visible: usize) -> String {
    format!("{} {} shown for {}", visible, codes_noun(visible), name)
}

fn codes_noun(count: usize) -> &'static str {
    if count == 1 {
        "code"
    } else {
        "codes"
    }
}

/// Show-more control state; `None` when nothing is tier-hidden
pub fn show_more(hidden_count: usize, is_expanded: bool) -> Option<ShowMore> {
    if hidden_count == 0 {
        return None;
    }
    Some(ShowMore {
        label: if is_expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_MORE_LABEL
        },
        expanded: is_expanded,
        hidden_count,
    })
}

/// Compute the full view for a state
pub fn compute_view(store: &CatalogStore, state: &FilterState) -> CatalogView {
    let filter = &state.active_category;
    let name = category_name(store, filter);

    let visible_ids: Vec<String> = visible_perks(store, state)
        .into_iter()
        .map(|e| e.id.clone())
        .collect();
    let hidden_ids: Vec<String> = store
        .active_of_type(EntryType::Perk)
        .filter(|e| !visible_ids.contains(&e.id))
        .map(|e| e.id.clone())
        .collect();
    let total_count = visible_ids.len() + hidden_ids.len();
    let visible = visible_ids.len();

    let empty_state = (filter.is_specific() && visible == 0).then(|| EmptyState {
        message: format!(
            "No codes in {} right now. Browse our featured picks or see every code.",
            name
        ),
        shortcuts: [CategoryFilter::Featured, CategoryFilter::All],
    });

    CatalogView {
        category: filter.clone(),
        counter_text: counter_text(filter, &name, state.is_expanded, visible, total_count),
        announcement: announcement_text(&name, visible),
        show_more: show_more(tier_hidden_count(store, filter), state.is_expanded),
        category_name: name,
        visible_ids,
        hidden_ids,
        total_count,
        empty_state,
    }
}
