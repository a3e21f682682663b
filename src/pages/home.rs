//! Home page - the full brand page.

use dioxus::prelude::*;
use emptynest_core::MountPoint;

use crate::components::{
    CatalogSection, Hero, HighlightGallery, NavMenu, PartnershipGrid, StorefrontCarousel,
    ToastHost, HOME_LINKS,
};
use crate::context::use_catalog;
use crate::surface::SignalSurface;

/// Every section is present on the home page
const MOUNTS: &[MountPoint] = &MountPoint::ALL;

#[component]
pub fn Home() -> Element {
    let mut catalog = use_catalog();
    let surface = use_hook(|| SignalSurface::new(MOUNTS));
    use_context_provider(|| surface);

    use_effect(move || {
        let mut surface = surface;
        catalog.write().mount(&mut surface);
        tracing::info!("Home page mounted");
    });

    rsx! {
        NavMenu { links: HOME_LINKS.to_vec() }
        main { class: "page",
            Hero {}
            StorefrontCarousel {}
            PartnershipGrid {}
            CatalogSection {}
            HighlightGallery {}
        }
        footer { class: "site-footer",
            p { "Empty Nest. Made for the next chapter." }
        }
        ToastHost {}
    }
}
