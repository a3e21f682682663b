//! Core types for the Empty Nest catalog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{normalize_category, CategoryFilter};
use crate::error::{CatalogError, CatalogResult};

/// Kind of catalog entry; selects the render adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Brand storefront shown in the shop carousel
    Storefront,
    /// Brand partnership card
    Partnership,
    /// Discount-code perk shown in the codes catalog
    Perk,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Storefront => "storefront",
            EntryType::Partnership => "partnership",
            EntryType::Perk => "perk",
        }
    }
}

/// Coarse visibility class controlling default disclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Hero,
    Featured,
    Additional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Hero => "hero",
            Tier::Featured => "featured",
            Tier::Additional => "additional",
        }
    }
}

/// Whether an entry takes part in rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntryStatus {
    #[default]
    Active,
    Inactive,
}

/// Ordering of the visible perk set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// `featured` first, then newest
    #[default]
    FeaturedFirst,
    /// Newest `date_added` first
    Newest,
    /// Brand name A-Z, case-insensitive
    Alphabetical,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::FeaturedFirst,
        SortOrder::Newest,
        SortOrder::Alphabetical,
    ];

    /// Label for the sort control
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::FeaturedFirst => "Featured",
            SortOrder::Newest => "Newest",
            SortOrder::Alphabetical => "A-Z",
        }
    }
}

/// A storefront, partnership or perk.
///
/// Only `status` changes after creation, and only through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique stable key
    pub id: String,
    pub entry_type: EntryType,
    pub brand_name: String,
    /// Free-text grouping; matched through [`CatalogEntry::category_slug`]
    pub category: String,
    pub short_description: String,
    pub link_url: String,
    pub discount_code: Option<String>,
    pub tier: Tier,
    /// Sort/filter flag independent of tier
    pub featured: bool,
    pub status: EntryStatus,
    pub date_added: NaiveDate,
}

impl CatalogEntry {
    /// Create an active, non-featured, `Featured`-tier entry
    pub fn new(
        id: impl Into<String>,
        entry_type: EntryType,
        brand_name: impl Into<String>,
        category: impl Into<String>,
        link_url: impl Into<String>,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            entry_type,
            brand_name: brand_name.into(),
            category: category.into(),
            short_description: String::new(),
            link_url: link_url.into(),
            discount_code: None,
            tier: Tier::Featured,
            featured: false,
            status: EntryStatus::Active,
            date_added,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    /// Normalized category used for matching and `data-category`
    pub fn category_slug(&self) -> String {
        normalize_category(&self.category)
    }

    pub fn is_active(&self) -> bool {
        self.status == EntryStatus::Active
    }

    /// Check the required-field invariant.
    ///
    /// `id`, `brand_name`, `category` (as a slug) and `link_url` must be
    /// non-blank.
    pub fn validate(&self) -> CatalogResult<()> {
        let missing = |field: &'static str| CatalogError::MissingField {
            id: self.id.clone(),
            field,
        };

        if self.id.trim().is_empty() {
            return Err(missing("id"));
        }
        if self.brand_name.trim().is_empty() {
            return Err(missing("brand_name"));
        }
        if self.category_slug().is_empty() {
            return Err(missing("category"));
        }
        if self.link_url.trim().is_empty() {
            return Err(missing("link_url"));
        }
        Ok(())
    }
}

/// Per-view filter state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub active_category: CategoryFilter,
    /// Whether the `Additional` tier is revealed
    pub is_expanded: bool,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn new_entry_defaults() {
        let entry = CatalogEntry::new(
            "perk-1",
            EntryType::Perk,
            "Nomad Linen",
            "Home & Garden",
            "https://example.com",
            date(),
        );
        assert!(entry.is_active());
        assert!(!entry.featured);
        assert_eq!(entry.tier, Tier::Featured);
        assert_eq!(entry.category_slug(), "home-garden");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let entry = CatalogEntry::new("perk-1", EntryType::Perk, "  ", "Travel", "", date());
        assert_eq!(
            entry.validate(),
            Err(CatalogError::MissingField {
                id: "perk-1".to_string(),
                field: "brand_name"
            })
        );

        let entry = CatalogEntry::new("perk-2", EntryType::Perk, "Brand", "!!", "x", date());
        assert!(matches!(
            entry.validate(),
            Err(CatalogError::MissingField { field: "category", .. })
        ));
    }

    #[test]
    fn filter_state_defaults() {
        let state = FilterState::default();
        assert_eq!(state.active_category, CategoryFilter::Featured);
        assert!(!state.is_expanded);
        assert_eq!(state.sort_order, SortOrder::FeaturedFirst);
    }

    #[test]
    fn filter_state_serializes() {
        let json = serde_json::to_string(&FilterState::default()).unwrap();
        assert!(json.contains("\"is_expanded\":false"));
        assert!(json.contains("FeaturedFirst"));
    }
}
