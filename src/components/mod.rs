//! UI Components for the Empty Nest site.
//!
//! Page sections; shared primitives live in `emptynest-ui`.

mod catalog_section;
mod code_card;
mod hero;
mod highlight_gallery;
mod nav_menu;
mod partnership_grid;
mod storefront_carousel;
mod toast_host;

pub use catalog_section::CatalogSection;
pub use code_card::CardView;
pub use hero::Hero;
pub use highlight_gallery::HighlightGallery;
pub use nav_menu::{MenuLink, NavMenu, HOME_LINKS};
pub use partnership_grid::PartnershipGrid;
pub use storefront_carousel::StorefrontCarousel;
pub use toast_host::ToastHost;
