//! Context providers for the Empty Nest shell.
//!
//! The catalog controller is created once in `App` and reached through
//! these hooks; nothing reads it from a global.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = use_catalog();
//! let mut surface = use_surface();
//! catalog.write().toggle_expanded(&mut surface);
//! ```

use dioxus::prelude::*;
use emptynest_core::{CatalogController, SiteConfig, ToastQueue};

use crate::surface::SignalSurface;

/// Toast queue shared by every copy affordance
pub type Toasts = Signal<ToastQueue>;

/// Static site behavior for this window
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContext {
    pub config: SiteConfig,
    /// Whether outbound links act like a mobile user agent
    pub mobile: bool,
}

/// Hook to access the catalog controller.
pub fn use_catalog() -> Signal<CatalogController> {
    use_context::<Signal<CatalogController>>()
}

/// Hook to access the surface of the current page variant.
///
/// Provided by each page; sections render from it.
pub fn use_surface() -> SignalSurface {
    use_context::<SignalSurface>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Hook to access the site settings.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
