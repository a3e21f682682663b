//! Reusable UI components
//!
//! Serif headings, sans body text and soft blush accents.

mod button;
mod filter_pills;
mod live_region;
mod toast;

pub use button::*;
pub use filter_pills::*;
pub use live_region::*;
pub use toast::*;
