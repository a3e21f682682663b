//! Signal-backed page surface.
//!
//! Implements the catalog's `DomSurface` over Dioxus signals: the
//! controller writes, the section components re-render from what changed.

use std::collections::HashSet;

use dioxus::prelude::*;
use emptynest_core::{DomSurface, EmptyState, FilterControl, Fragment, MountPoint, ShowMore};

/// Surface of one page variant.
///
/// `mounts` lists the sections the page renders; writes to any other
/// mount point are dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSurface {
    mounts: &'static [MountPoint],
    pub storefronts: Signal<Vec<Fragment>>,
    pub partnerships: Signal<Vec<Fragment>>,
    pub grid: Signal<Vec<Fragment>>,
    pub hidden: Signal<HashSet<String>>,
    pub order: Signal<Vec<String>>,
    pub filters: Signal<Vec<FilterControl>>,
    pub active_filter: Signal<String>,
    pub counter: Signal<String>,
    pub empty_state: Signal<Option<EmptyState>>,
    pub show_more: Signal<Option<ShowMore>>,
    /// Sequence number and text of the latest announcement
    pub announcement: Signal<(u64, String)>,
}

impl SignalSurface {
    /// Create the signals in the current scope
    pub fn new(mounts: &'static [MountPoint]) -> Self {
        Self {
            mounts,
            storefronts: Signal::new(Vec::new()),
            partnerships: Signal::new(Vec::new()),
            grid: Signal::new(Vec::new()),
            hidden: Signal::new(HashSet::new()),
            order: Signal::new(Vec::new()),
            filters: Signal::new(Vec::new()),
            active_filter: Signal::new(String::new()),
            counter: Signal::new(String::new()),
            empty_state: Signal::new(None),
            show_more: Signal::new(None),
            announcement: Signal::new((0, String::new())),
        }
    }

    /// Grid cards in display order, paired with their hidden flag
    pub fn ordered_grid(&self) -> Vec<(Fragment, bool)> {
        let grid = self.grid.read();
        let hidden = self.hidden.read();
        self.order
            .read()
            .iter()
            .filter_map(|id| grid.iter().find(|c| &c.id == id))
            .map(|card| (card.clone(), hidden.contains(&card.id)))
            .collect()
    }
}

impl DomSurface for SignalSurface {
    fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    fn mount_cards(&mut self, section: MountPoint, cards: Vec<Fragment>) {
        match section {
            MountPoint::Storefronts => self.storefronts.set(cards),
            MountPoint::Partnerships => self.partnerships.set(cards),
            MountPoint::Grid => {
                self.order.set(cards.iter().map(|c| c.id.clone()).collect());
                self.hidden.write().clear();
                self.grid.set(cards);
            }
            _ => {}
        }
    }

    fn set_card_hidden(&mut self, id: &str, hidden: bool) {
        let mut set = self.hidden.write();
        if hidden {
            set.insert(id.to_string());
        } else {
            set.remove(id);
        }
    }

    fn order_cards(&mut self, ids: &[String]) {
        let mut order: Vec<String> = ids.to_vec();
        order.extend(
            self.order
                .peek()
                .iter()
                .filter(|id| !ids.contains(id))
                .cloned(),
        );
        self.order.set(order);
    }

    fn mount_filters(&mut self, controls: Vec<FilterControl>) {
        if *self.filters.peek() != controls {
            self.filters.set(controls);
        }
    }

    fn mark_active_filter(&mut self, slug: &str) {
        self.active_filter.set(slug.to_string());
    }

    fn set_counter(&mut self, text: &str) {
        self.counter.set(text.to_string());
    }

    fn set_empty_state(&mut self, state: Option<&EmptyState>) {
        self.empty_state.set(state.cloned());
    }

    fn set_show_more(&mut self, control: Option<&ShowMore>) {
        self.show_more.set(control.cloned());
    }

    fn announce(&mut self, message: &str) {
        let seq = self.announcement.peek().0 + 1;
        self.announcement.set((seq, message.to_string()));
    }
}
