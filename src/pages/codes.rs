//! Codes page - the catalog on its own, preselected on a category.

use dioxus::prelude::*;
use emptynest_core::MountPoint;

use crate::components::{CatalogSection, MenuLink, NavMenu, ToastHost};
use crate::context::use_catalog;
use crate::surface::SignalSurface;

/// The codes page carries no storefront or partnership sections
const MOUNTS: &[MountPoint] = &[
    MountPoint::Grid,
    MountPoint::FilterBar,
    MountPoint::Counter,
    MountPoint::ShowMore,
    MountPoint::EmptyState,
    MountPoint::Announcer,
];

const CODES_LINKS: [MenuLink; 1] = [MenuLink {
    label: "Member Codes",
    target: "#codes",
}];

/// Codes page component.
///
/// `category` comes from the route and may be a sentinel (`all`,
/// `featured`) or any category slug.
#[component]
pub fn Codes(category: String) -> Element {
    let mut catalog = use_catalog();
    let surface = use_hook(|| SignalSurface::new(MOUNTS));
    use_context_provider(|| surface);

    let mut mounted = use_signal(|| false);

    // Re-run whenever the route's category changes
    use_effect(use_reactive((&category,), move |(category,)| {
        let mut surface = surface;
        if !*mounted.peek() {
            catalog.write().mount(&mut surface);
            mounted.set(true);
        }
        match catalog.write().select_category(&category, &mut surface) {
            Ok(view) => tracing::info!(
                category = %view.category,
                visible = view.visible_count(),
                "Codes page preselected"
            ),
            Err(e) => tracing::warn!("Ignoring route category: {}", e),
        }
    }));

    rsx! {
        NavMenu { links: CODES_LINKS.to_vec() }
        main { class: "page page-codes",
            CatalogSection {}
        }
        ToastHost {}
    }
}
