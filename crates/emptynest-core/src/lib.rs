//! Empty Nest Core Library
//!
//! Catalog store, filter/disclosure controller and the small state machines
//! behind the Empty Nest brand site.
//!
//! ## Overview
//!
//! The site shows storefronts, brand partnerships and a catalog of discount
//! codes ("perks"). The codes catalog is the only part with real state: a
//! category filter, a sort order and a "show more" disclosure of the
//! additional tier. Everything is loaded once from static tables and lives in
//! memory on the UI thread.
//!
//! ## Quick Start
//!
//! ```
//! use emptynest_core::{data, CatalogController, PageDom, SortOrder};
//!
//! let (mut catalog, rejected) = CatalogController::from_records(data::catalog_records());
//! assert!(rejected.is_empty());
//!
//! let mut page = PageDom::full();
//! catalog.mount(&mut page);
//!
//! catalog.select_category("travel", &mut page).unwrap();
//! catalog.set_sort(SortOrder::Newest, &mut page);
//! println!("{}", page.counter());
//! ```

pub mod catalog;
pub mod category;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod data;
pub mod dom;
pub mod error;
pub mod filter;
pub mod outbound;
pub mod render;
pub mod site;
pub mod types;

// Re-exports
pub use catalog::{load_catalog, CatalogLoad, CatalogStore, RawEntry};
pub use category::{normalize_category, CategoryFilter};
pub use clipboard::{copy_code, Clipboard, CopyOutcome, Notifier, Toast, ToastKind, ToastQueue};
pub use config::SiteConfig;
pub use controller::CatalogController;
pub use dom::{DomSurface, FilterControl, MountPoint, PageDom};
pub use error::{CatalogError, CatalogResult};
pub use filter::{compute_view, CatalogView, EmptyState, ShowMore};
pub use outbound::{plan_outbound, user_agent_is_mobile, Highlight, HighlightDialog, OutboundAction};
pub use render::{render_entry, CardKind, CopyAction, Fragment};
pub use types::*;
