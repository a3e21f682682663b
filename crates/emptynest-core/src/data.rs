//! Hand-authored site content.
//!
//! Edited manually; loaded once at startup through
//! [`crate::catalog::load_catalog`].

use crate::catalog::RawEntry;
use crate::outbound::Highlight;
use crate::types::{EntryStatus, EntryType, Tier};

const fn perk(
    id: &'static str,
    brand_name: &'static str,
    category: &'static str,
    short_description: &'static str,
    link_url: &'static str,
    code: &'static str,
    tier: Tier,
    featured: bool,
    date_added: &'static str,
) -> RawEntry {
    RawEntry {
        id,
        entry_type: EntryType::Perk,
        brand_name,
        category,
        short_description,
        link_url,
        discount_code: Some(code),
        tier,
        featured,
        status: EntryStatus::Active,
        date_added,
    }
}

pub const PERKS: &[RawEntry] = &[
    perk(
        "perk-cedar-salt",
        "Cedar & Salt",
        "Home & Garden",
        "Small-batch soy candles poured in Maine",
        "https://cedarandsalt.example/shop",
        "NEST15",
        Tier::Featured,
        true,
        "2025-01-12",
    ),
    perk(
        "perk-wanderlust-rail",
        "Wanderlust Rail",
        "Travel",
        "Scenic rail journeys for slow travelers",
        "https://wanderlustrail.example",
        "EMPTYNEST20",
        Tier::Featured,
        true,
        "2025-03-02",
    ),
    perk(
        "perk-still-water",
        "Still Water Spa",
        "Wellness",
        "Day passes and couples retreats",
        "https://stillwaterspa.example/retreats",
        "CALM25",
        Tier::Featured,
        true,
        "2025-02-20",
    ),
    perk(
        "perk-linen-loft",
        "Linen Loft",
        "Fashion",
        "Relaxed linen essentials for every season",
        "https://linenloft.example",
        "LOFT10",
        Tier::Featured,
        true,
        "2024-11-05",
    ),
    perk(
        "perk-hearth-table",
        "Hearth & Table",
        "Food & Drink",
        "Chef-curated dinner kits for two",
        "https://hearthandtable.example",
        "DINNER2",
        Tier::Featured,
        true,
        "2025-04-18",
    ),
    perk(
        "perk-ember-audio",
        "Ember Audio",
        "Tech",
        "Warm-sounding speakers for the reading room",
        "https://emberaudio.example",
        "SAVE10",
        Tier::Featured,
        true,
        "2024-12-01",
    ),
    perk(
        "perk-fernwood",
        "Fernwood Nursery",
        "Home & Garden",
        "Heirloom seeds and potted perennials",
        "https://fernwood.example",
        "GROW12",
        Tier::Additional,
        true,
        "2024-09-14",
    ),
    perk(
        "perk-coastline",
        "Coastline Cottages",
        "Travel",
        "Off-season stays on the Atlantic coast",
        "https://coastlinecottages.example",
        "SHORE15",
        Tier::Additional,
        true,
        "2024-10-22",
    ),
    perk(
        "perk-morning-ritual",
        "Morning Ritual Tea",
        "Wellness",
        "Loose-leaf blends and brewing sets",
        "https://morningritual.example",
        "STEEP10",
        Tier::Additional,
        true,
        "2025-01-30",
    ),
    perk(
        "perk-tidewater-denim",
        "Tidewater Denim",
        "Fashion",
        "Mended and made-to-last denim",
        "https://tidewaterdenim.example",
        "TIDE15",
        Tier::Additional,
        false,
        "2024-08-08",
    ),
    perk(
        "perk-press-pour",
        "Press & Pour",
        "Food & Drink",
        "Single-origin coffee subscriptions",
        "https://pressandpour.example",
        "BREW20",
        Tier::Additional,
        false,
        "2025-02-02",
    ),
    perk(
        "perk-pagebound",
        "Pagebound Tablets",
        "Tech",
        "E-readers with warm front lights",
        "https://pagebound.example",
        "READ15",
        Tier::Additional,
        false,
        "2024-07-19",
    ),
];

pub const STOREFRONTS: &[RawEntry] = &[
    RawEntry {
        id: "store-nest-goods",
        entry_type: EntryType::Storefront,
        brand_name: "Empty Nest Goods",
        category: "Home & Garden",
        short_description: "Our own line of linens, ceramics and candles",
        link_url: "https://emptynest.example/shop",
        discount_code: None,
        tier: Tier::Hero,
        featured: true,
        status: EntryStatus::Active,
        date_added: "2024-06-01",
    },
    RawEntry {
        id: "store-second-chapter",
        entry_type: EntryType::Storefront,
        brand_name: "Second Chapter Books",
        category: "Books",
        short_description: "Staff picks for the next chapter of life",
        link_url: "https://secondchapter.example",
        discount_code: None,
        tier: Tier::Featured,
        featured: true,
        status: EntryStatus::Active,
        date_added: "2024-09-10",
    },
    RawEntry {
        id: "store-trailhead",
        entry_type: EntryType::Storefront,
        brand_name: "Trailhead Outfitters",
        category: "Travel",
        short_description: "Packs and layers for unhurried adventures",
        link_url: "https://trailhead.example",
        discount_code: None,
        tier: Tier::Featured,
        featured: false,
        status: EntryStatus::Active,
        date_added: "2025-01-05",
    },
];

pub const PARTNERSHIPS: &[RawEntry] = &[
    RawEntry {
        id: "partner-harbor-wine",
        entry_type: EntryType::Partnership,
        brand_name: "Harbor Wine Club",
        category: "Food & Drink",
        short_description: "Quarterly tastings hosted with our community",
        link_url: "https://harborwine.example/empty-nest",
        discount_code: None,
        tier: Tier::Featured,
        featured: true,
        status: EntryStatus::Active,
        date_added: "2024-10-01",
    },
    RawEntry {
        id: "partner-open-road",
        entry_type: EntryType::Partnership,
        brand_name: "Open Road Tours",
        category: "Travel",
        short_description: "Small-group itineraries designed for couples",
        link_url: "https://openroadtours.example/partners",
        discount_code: None,
        tier: Tier::Featured,
        featured: false,
        status: EntryStatus::Active,
        date_added: "2025-03-11",
    },
    RawEntry {
        id: "partner-stillpoint",
        entry_type: EntryType::Partnership,
        brand_name: "Stillpoint Yoga",
        category: "Wellness",
        short_description: "Live classes for every body",
        link_url: "https://stillpoint.example",
        discount_code: None,
        tier: Tier::Additional,
        featured: false,
        status: EntryStatus::Inactive,
        date_added: "2024-05-20",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        id: "travel",
        title: "Travel Diaries",
        cover: "Travel",
        web_url: "https://www.instagram.com/stories/highlights/17900000000000001/",
        app_url: "instagram://story?story_id=17900000000000001",
    },
    Highlight {
        id: "home",
        title: "Home Refresh",
        cover: "Home",
        web_url: "https://www.instagram.com/stories/highlights/17900000000000002/",
        app_url: "instagram://story?story_id=17900000000000002",
    },
    Highlight {
        id: "recipes",
        title: "Kitchen Table",
        cover: "Recipes",
        web_url: "https://www.instagram.com/stories/highlights/17900000000000003/",
        app_url: "instagram://story?story_id=17900000000000003",
    },
    Highlight {
        id: "wellness",
        title: "Slow Mornings",
        cover: "Wellness",
        web_url: "https://www.instagram.com/stories/highlights/17900000000000004/",
        app_url: "instagram://story?story_id=17900000000000004",
    },
    Highlight {
        id: "style",
        title: "Style Notes",
        cover: "Style",
        web_url: "https://www.instagram.com/stories/highlights/17900000000000005/",
        app_url: "instagram://story?story_id=17900000000000005",
    },
];

/// Metric strip values as authored
pub const METRICS: &[(&str, &str)] = &[
    ("Partner brands", "40+"),
    ("Community members", "12K+"),
    ("Average savings", "18%"),
    ("Next chapters", "∞"),
];

/// Every catalog record: storefronts, partnerships, then perks
pub fn catalog_records() -> impl Iterator<Item = &'static RawEntry> {
    STOREFRONTS.iter().chain(PARTNERSHIPS).chain(PERKS)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::load_catalog;

    #[test]
    fn static_tables_load_cleanly() {
        let load = load_catalog(catalog_records());
        assert!(load.rejected.is_empty(), "{:?}", load.rejected);
        assert_eq!(load.store.len(), STOREFRONTS.len() + PARTNERSHIPS.len() + PERKS.len());
    }

    #[test]
    fn highlight_ids_are_unique() {
        let ids: HashSet<_> = HIGHLIGHTS.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), HIGHLIGHTS.len());
    }
}
