//! Catalog controller: owns the store and the filter state.
//!
//! Constructed once at startup and passed explicitly to whatever needs
//! catalog access. Every public operation finishes by applying the new view
//! to the surface it was given.
//!
//! ## Announcements
//!
//! Filter, sort and expand operations publish exactly one live-region
//! message each. Store mutations re-render without announcing. A failed
//! operation publishes nothing.

use crate::catalog::{load_catalog, CatalogStore, RawEntry};
use crate::category::CategoryFilter;
use crate::dom::{DomSurface, FilterControl, MountPoint};
use crate::error::{CatalogError, CatalogResult};
use crate::filter::{category_name, compute_view, CatalogView};
use crate::render::render_entry;
use crate::types::{CatalogEntry, EntryStatus, EntryType, FilterState, SortOrder};

/// Whether a render pass publishes to the live region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Announce {
    Yes,
    No,
}

/// Owned catalog plus the state of its single codes view
#[derive(Debug, Clone)]
pub struct CatalogController {
    store: CatalogStore,
    state: FilterState,
    view: CatalogView,
}

impl CatalogController {
    /// Controller over an existing store with default filter state
    pub fn new(store: CatalogStore) -> Self {
        let state = FilterState::default();
        let view = compute_view(&store, &state);
        Self { store, state, view }
    }

    /// Load raw records, returning the controller and the rejected records
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a RawEntry>,
    ) -> (Self, Vec<CatalogError>) {
        let load = load_catalog(records);
        (Self::new(load.store), load.rejected)
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// View produced by the last render pass
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Filter buttons: `featured`, `all`, then each perk category in
    /// first-appearance order. Inactive perks keep their category's button so
    /// an emptied category still offers its empty state. A selected category
    /// with no perks at all gets a trailing button.
    pub fn filter_controls(&self) -> Vec<FilterControl> {
        let mut controls = vec![
            FilterControl {
                slug: CategoryFilter::Featured.slug().to_string(),
                label: "Featured".to_string(),
            },
            FilterControl {
                slug: CategoryFilter::All.slug().to_string(),
                label: "All".to_string(),
            },
        ];
        let perks = self
            .store
            .all()
            .iter()
            .filter(|e| e.entry_type == EntryType::Perk);
        for entry in perks {
            let slug = entry.category_slug();
            if !controls.iter().any(|c| c.slug == slug) {
                controls.push(FilterControl {
                    slug,
                    label: entry.category.trim().to_string(),
                });
            }
        }

        let active = self.state.active_category.slug();
        if !controls.iter().any(|c| c.slug == active) {
            controls.push(FilterControl {
                slug: active.to_string(),
                label: category_name(&self.store, &self.state.active_category),
            });
        }
        controls
    }

    /// Initial render of every section on the page
    pub fn mount(&mut self, surface: &mut dyn DomSurface) {
        self.mount_section(surface, EntryType::Storefront);
        self.mount_section(surface, EntryType::Partnership);
        self.mount_section(surface, EntryType::Perk);
        self.apply(surface, Announce::No);
    }

    /// Select a filter category by its bound slug
    pub fn select_category(
        &mut self,
        value: &str,
        surface: &mut dyn DomSurface,
    ) -> CatalogResult<&CatalogView> {
        let category = CategoryFilter::parse(value)?;
        tracing::debug!(%category, "Filter category selected");
        self.state.active_category = category;
        self.apply(surface, Announce::Yes);
        Ok(&self.view)
    }

    pub fn set_sort(&mut self, order: SortOrder, surface: &mut dyn DomSurface) -> &CatalogView {
        tracing::debug!(?order, "Sort order changed");
        self.state.sort_order = order;
        self.apply(surface, Announce::Yes);
        &self.view
    }

    /// Flip the disclosure of the `Additional` tier
    pub fn toggle_expanded(&mut self, surface: &mut dyn DomSurface) -> &CatalogView {
        self.state.is_expanded = !self.state.is_expanded;
        tracing::debug!(expanded = self.state.is_expanded, "Disclosure toggled");
        self.apply(surface, Announce::Yes);
        &self.view
    }

    pub fn add_entry(
        &mut self,
        entry: CatalogEntry,
        surface: &mut dyn DomSurface,
    ) -> CatalogResult<()> {
        let entry_type = entry.entry_type;
        self.store.add_entry(entry)?;
        self.rerender(entry_type, surface);
        Ok(())
    }

    pub fn remove_entry(
        &mut self,
        id: &str,
        surface: &mut dyn DomSurface,
    ) -> CatalogResult<CatalogEntry> {
        let entry = self.store.remove_entry(id)?;
        self.rerender(entry.entry_type, surface);
        Ok(entry)
    }

    pub fn set_status(
        &mut self,
        id: &str,
        status: EntryStatus,
        surface: &mut dyn DomSurface,
    ) -> CatalogResult<()> {
        self.store.set_status(id, status)?;
        let entry_type = self
            .store
            .get(id)
            .map(|e| e.entry_type)
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;
        self.rerender(entry_type, surface);
        Ok(())
    }

    fn rerender(&mut self, entry_type: EntryType, surface: &mut dyn DomSurface) {
        self.mount_section(surface, entry_type);
        if entry_type == EntryType::Perk {
            self.apply(surface, Announce::No);
        }
    }

    fn mount_section(&self, surface: &mut dyn DomSurface, entry_type: EntryType) {
        let section = match entry_type {
            EntryType::Storefront => MountPoint::Storefronts,
            EntryType::Partnership => MountPoint::Partnerships,
            EntryType::Perk => MountPoint::Grid,
        };
        if !surface.has_mount(section) {
            return;
        }
        let cards = self
            .store
            .active_of_type(entry_type)
            .map(render_entry)
            .collect();
        surface.mount_cards(section, cards);
    }

    /// Recompute the view and push it to the surface
    fn apply(&mut self, surface: &mut dyn DomSurface, announce: Announce) {
        self.view = compute_view(&self.store, &self.state);
        let view = &self.view;

        tracing::debug!(
            category = %view.category,
            visible = view.visible_count(),
            total = view.total_count,
            "Catalog view applied"
        );

        if surface.has_mount(MountPoint::Grid) {
            for id in &view.visible_ids {
                surface.set_card_hidden(id, false);
            }
            for id in &view.hidden_ids {
                surface.set_card_hidden(id, true);
            }
            surface.order_cards(&view.visible_ids);
        }
        if surface.has_mount(MountPoint::FilterBar) {
            surface.mount_filters(self.filter_controls());
            surface.mark_active_filter(view.category.slug());
        }
        if surface.has_mount(MountPoint::Counter) {
            surface.set_counter(&view.counter_text);
        }
        if surface.has_mount(MountPoint::EmptyState) {
            surface.set_empty_state(view.empty_state.as_ref());
        }
        if surface.has_mount(MountPoint::ShowMore) {
            surface.set_show_more(view.show_more.as_ref());
        }
        if announce == Announce::Yes && surface.has_mount(MountPoint::Announcer) {
            surface.announce(&view.announcement);
        }
    }
}
