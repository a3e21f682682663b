//! In-memory page used for headless rendering and tests.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{DomSurface, FilterControl, MountPoint};
use crate::filter::{EmptyState, ShowMore};
use crate::render::Fragment;

/// A filter button as the page holds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub control: FilterControl,
    pub active: bool,
}

/// In-memory page keyed by mount point
#[derive(Debug, Clone, Default)]
pub struct PageDom {
    mounts: BTreeSet<MountPoint>,
    sections: BTreeMap<MountPoint, Vec<Fragment>>,
    hidden: HashSet<String>,
    order: Vec<String>,
    filters: Vec<FilterButton>,
    counter: String,
    empty_state: Option<EmptyState>,
    show_more: Option<ShowMore>,
    announcements: Vec<String>,
}

impl PageDom {
    /// Page with every mount point present
    pub fn full() -> Self {
        Self::with_mounts(&MountPoint::ALL)
    }

    /// Page variant with only the given mount points
    pub fn with_mounts(mounts: &[MountPoint]) -> Self {
        Self {
            mounts: mounts.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Cards mounted in a section, in mount order
    pub fn cards(&self, section: MountPoint) -> &[Fragment] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of grid cards that are not hidden, in display order
    pub fn visible_grid_ids(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| !self.hidden.contains(*id))
            .filter(|id| self.cards(MountPoint::Grid).iter().any(|c| &c.id == *id))
            .map(String::as_str)
            .collect()
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }

    pub fn filters(&self) -> &[FilterButton] {
        &self.filters
    }

    /// Slugs of controls carrying the active indicator
    pub fn active_filters(&self) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|b| b.active)
            .map(|b| b.control.slug.as_str())
            .collect()
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn empty_state(&self) -> Option<&EmptyState> {
        self.empty_state.as_ref()
    }

    pub fn show_more(&self) -> Option<&ShowMore> {
        self.show_more.as_ref()
    }

    /// Every message published to the live region, oldest first
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// Static markup of a section's visible cards
    pub fn section_html(&self, section: MountPoint) -> String {
        let cards = self.cards(section);
        let body: String = if section == MountPoint::Grid {
            self.visible_grid_ids()
                .into_iter()
                .filter_map(|id| cards.iter().find(|c| c.id == id))
                .map(Fragment::to_html)
                .collect()
        } else {
            cards.iter().map(Fragment::to_html).collect()
        };
        format!(r#"<div id="{}">{}</div>"#, section.element_id(), body)
    }
}

impl DomSurface for PageDom {
    fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    fn mount_cards(&mut self, section: MountPoint, cards: Vec<Fragment>) {
        if !self.has_mount(section) {
            return;
        }
        if section == MountPoint::Grid {
            self.order = cards.iter().map(|c| c.id.clone()).collect();
            self.hidden.clear();
        }
        self.sections.insert(section, cards);
    }

    fn set_card_hidden(&mut self, id: &str, hidden: bool) {
        if hidden {
            self.hidden.insert(id.to_string());
        } else {
            self.hidden.remove(id);
        }
    }

    fn order_cards(&mut self, ids: &[String]) {
        let mut order: Vec<String> = ids.to_vec();
        order.extend(self.order.iter().filter(|id| !ids.contains(id)).cloned());
        self.order = order;
    }

    fn mount_filters(&mut self, controls: Vec<FilterControl>) {
        if !self.has_mount(MountPoint::FilterBar) {
            return;
        }
        self.filters = controls
            .into_iter()
            .map(|control| FilterButton {
                control,
                active: false,
            })
            .collect();
    }

    fn mark_active_filter(&mut self, slug: &str) {
        for button in &mut self.filters {
            button.active = button.control.slug == slug;
        }
    }

    fn set_counter(&mut self, text: &str) {
        if self.has_mount(MountPoint::Counter) {
            self.counter = text.to_string();
        }
    }

    fn set_empty_state(&mut self, state: Option<&EmptyState>) {
        if self.has_mount(MountPoint::EmptyState) {
            self.empty_state = state.cloned();
        }
    }

    fn set_show_more(&mut self, control: Option<&ShowMore>) {
        if self.has_mount(MountPoint::ShowMore) {
            self.show_more = control.cloned();
        }
    }

    fn announce(&mut self, message: &str) {
        if self.has_mount(MountPoint::Announcer) {
            self.announcements.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(slug: &str) -> FilterControl {
        FilterControl {
            slug: slug.to_string(),
            label: slug.to_string(),
        }
    }

    #[test]
    fn missing_mounts_ignore_writes() {
        let mut page = PageDom::with_mounts(&[MountPoint::Grid]);
        page.set_counter("Showing 3 of 3 codes");
        page.announce("3 codes shown for All");
        page.mount_filters(vec![control("all")]);
        assert_eq!(page.counter(), "");
        assert!(page.announcements().is_empty());
        assert!(page.filters().is_empty());
    }

    #[test]
    fn mark_active_is_exclusive_and_exact() {
        let mut page = PageDom::full();
        page.mount_filters(vec![control("travel"), control("travel-gear"), control("all")]);
        page.mark_active_filter("travel");
        assert_eq!(page.active_filters(), vec!["travel"]);
        page.mark_active_filter("all");
        assert_eq!(page.active_filters(), vec!["all"]);
    }
}
