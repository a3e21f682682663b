use dioxus::prelude::*;
use emptynest_core::{data, CatalogController, CatalogStore, SiteConfig, ToastQueue};

use crate::context::{SiteContext, Toasts};
use crate::get_shell_settings;
use crate::pages::{Codes, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Full brand page: hero, storefronts, partnerships, codes, highlights
/// - `/codes/:category` - Codes-only page variant, preselected on a category
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/codes/:category")]
    Codes { category: String },
}

/// Root application component.
///
/// Owns the catalog controller and provides it, the toast queue and the site
/// settings to every page. Each toast schedules its own dismissal when
/// pushed (see `ToastNotifier`).
#[component]
pub fn App() -> Element {
    let config = SiteConfig::default();
    let lifetime = config.toast_lifetime();

    let catalog: Signal<CatalogController> = use_signal(load_catalog);
    let toasts: Toasts = use_signal(|| ToastQueue::new(lifetime));
    let site = SiteContext {
        config,
        mobile: get_shell_settings().mobile,
    };

    use_context_provider(|| catalog);
    use_context_provider(|| toasts);
    use_context_provider(|| site);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Build the controller from the static tables.
///
/// A panic while loading is caught and logged; the page then runs with an
/// empty catalog instead of failing as a whole.
fn load_catalog() -> CatalogController {
    match std::panic::catch_unwind(|| CatalogController::from_records(data::catalog_records())) {
        Ok((controller, rejected)) => {
            if !rejected.is_empty() {
                tracing::warn!(count = rejected.len(), "Catalog records rejected at load");
            }
            tracing::info!(entries = controller.store().len(), "Catalog initialized");
            controller
        }
        Err(_) => {
            tracing::warn!("Catalog initialization failed, continuing with an empty catalog");
            CatalogController::new(CatalogStore::new())
        }
    }
}
