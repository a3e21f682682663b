//! Category slugs and the filter selector.
//!
//! Entries carry free-text categories ("Home & Garden"). Filter controls
//! carry the normalized slug (`home-garden`) as a data attribute, and
//! matching is always slug against slug.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Slug of the sentinel selector that matches every entry
pub const ALL_SLUG: &str = "all";
/// Slug of the sentinel selector that matches `featured = true` entries
pub const FEATURED_SLUG: &str = "featured";

/// Normalize free-text category into a slug.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every other run of
/// characters into a single `-`. Leading and trailing dashes are dropped.
pub fn normalize_category(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Human-readable fallback for a slug: dashes become spaces, words are
/// capitalized.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Which entries a catalog view selects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every active perk
    All,
    /// Perks flagged `featured`, tier-gated unless expanded
    #[default]
    Featured,
    /// Perks whose category slug equals the contained slug
    Category(String),
}

impl CategoryFilter {
    /// Parse a bound control value. Sentinels are matched exactly, anything
    /// else is normalized to a slug.
    pub fn parse(value: &str) -> CatalogResult<Self> {
        match value {
            ALL_SLUG => Ok(CategoryFilter::All),
            FEATURED_SLUG => Ok(CategoryFilter::Featured),
            other => {
                let slug = normalize_category(other);
                match slug.as_str() {
                    "" => Err(CatalogError::InvalidCategory(other.to_string())),
                    ALL_SLUG => Ok(CategoryFilter::All),
                    FEATURED_SLUG => Ok(CategoryFilter::Featured),
                    _ => Ok(CategoryFilter::Category(slug)),
                }
            }
        }
    }

    /// The slug bound to this selector's filter control
    pub fn slug(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Featured => FEATURED_SLUG,
            CategoryFilter::Category(slug) => slug,
        }
    }

    /// Whether this is a specific category (not a sentinel)
    pub fn is_specific(&self) -> bool {
        matches!(self, CategoryFilter::Category(_))
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_punctuation() {
        assert_eq!(normalize_category("Home & Garden"), "home-garden");
        assert_eq!(normalize_category("  Food + Drink!! "), "food-drink");
        assert_eq!(normalize_category("Wellness"), "wellness");
        assert_eq!(normalize_category("--"), "");
    }

    #[test]
    fn title_from_slug_capitalizes() {
        assert_eq!(title_from_slug("home-garden"), "Home Garden");
        assert_eq!(title_from_slug("travel"), "Travel");
    }

    #[test]
    fn parse_sentinels_and_slugs() {
        assert_eq!(CategoryFilter::parse("all").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("featured").unwrap(),
            CategoryFilter::Featured
        );
        assert_eq!(
            CategoryFilter::parse("Home & Garden").unwrap(),
            CategoryFilter::Category("home-garden".to_string())
        );
        assert_eq!(CategoryFilter::parse("ALL").unwrap(), CategoryFilter::All);
    }

    #[test]
    fn parse_rejects_empty_slug() {
        assert!(matches!(
            CategoryFilter::parse(" & "),
            Err(CatalogError::InvalidCategory(_))
        ));
    }

    #[test]
    fn default_is_featured() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::Featured);
        assert_eq!(CategoryFilter::default().to_string(), "featured");
    }
}
