//! Page glue outside the catalog: menu, navigation bar, hero reveal,
//! metric count-up and the storefront carousel.
//!
//! Nothing here shares state with the catalog controller.

mod carousel;
mod menu;
mod metrics;
mod nav;
mod reveal;

pub use carousel::Carousel;
pub use menu::MenuState;
pub use metrics::MetricValue;
pub use nav::NavChrome;
pub use reveal::{reveal_schedule, stagger_delay, RevealStep, REVEAL_SEQUENCE};
