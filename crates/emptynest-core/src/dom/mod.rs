//! Page surface the catalog controller renders into.
//!
//! The mount points below are the contract between catalog logic and page
//! markup. A page variant may omit any of them; every call that targets a
//! missing mount is a silent no-op.
//!
//! Two implementations exist: [`PageDom`] (headless, in-memory) and the
//! desktop shell's signal-backed surface.

mod page;

pub use page::PageDom;

use serde::Serialize;

use crate::filter::{EmptyState, ShowMore};
use crate::render::Fragment;

/// Named insertion point on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MountPoint {
    /// `#storefront-carousel`
    Storefronts,
    /// `#partnership-grid`
    Partnerships,
    /// `#codes-grid`
    Grid,
    /// `#codes-filters`
    FilterBar,
    /// `#codes-results-count`
    Counter,
    /// `#codes-show-more`
    ShowMore,
    /// `#codes-empty-state`
    EmptyState,
    /// `#codes-status` (aria-live region)
    Announcer,
}

impl MountPoint {
    pub const ALL: [MountPoint; 8] = [
        MountPoint::Storefronts,
        MountPoint::Partnerships,
        MountPoint::Grid,
        MountPoint::FilterBar,
        MountPoint::Counter,
        MountPoint::ShowMore,
        MountPoint::EmptyState,
        MountPoint::Announcer,
    ];

    /// Element id in the page markup
    pub fn element_id(&self) -> &'static str {
        match self {
            MountPoint::Storefronts => "storefront-carousel",
            MountPoint::Partnerships => "partnership-grid",
            MountPoint::Grid => "codes-grid",
            MountPoint::FilterBar => "codes-filters",
            MountPoint::Counter => "codes-results-count",
            MountPoint::ShowMore => "codes-show-more",
            MountPoint::EmptyState => "codes-empty-state",
            MountPoint::Announcer => "codes-status",
        }
    }
}

/// A filter button bound to a category slug via `data-category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub slug: String,
    pub label: String,
}

/// Operations the controller performs on a page.
///
/// Implementations may assume the controller checked
/// [`DomSurface::has_mount`] first.
pub trait DomSurface {
    /// Whether this page variant has the mount point
    fn has_mount(&self, mount: MountPoint) -> bool;

    /// Replace the cards mounted in a section
    fn mount_cards(&mut self, section: MountPoint, cards: Vec<Fragment>);

    /// Hide or show a mounted card without removing it
    fn set_card_hidden(&mut self, id: &str, hidden: bool);

    /// Display order of the visible grid cards
    fn order_cards(&mut self, ids: &[String]);

    /// Replace the filter buttons
    fn mount_filters(&mut self, controls: Vec<FilterControl>);

    /// Mark the control whose bound slug equals `slug` as the only active one
    fn mark_active_filter(&mut self, slug: &str);

    fn set_counter(&mut self, text: &str);

    fn set_empty_state(&mut self, state: Option<&EmptyState>);

    fn set_show_more(&mut self, control: Option<&ShowMore>);

    /// Publish a status message to the live region
    fn announce(&mut self, message: &str);
}
