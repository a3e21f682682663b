//! Color constants of the Empty Nest palette.
//!
//! Warm neutrals with a blush accent. `styles.rs` mirrors these as CSS
//! custom properties.

#![allow(dead_code)]

// === BLUSH (Accent) ===
pub const BLUSH: &str = "#d4a4a4";
pub const BLUSH_DEEP: &str = "#b98282";
pub const BLUSH_SOFT: &str = "rgba(212, 164, 164, 0.18)";

// === CHARCOAL (Text) ===
pub const CHARCOAL: &str = "#2f2b2a";
pub const CHARCOAL_SOFT: &str = "#5c5654";
pub const CHARCOAL_MUTED: &str = "rgba(47, 43, 42, 0.6)";

// === CREAM (Backgrounds) ===
pub const CREAM: &str = "rgba(247, 243, 238, 1)";
pub const CREAM_GLASS: &str = "rgba(247, 243, 238, 0.92)";
pub const LINEN: &str = "#efe7de";
pub const WHITE: &str = "#ffffff";

// === SEMANTIC ===
pub const SUCCESS: &str = "#6f8f72";
pub const ERROR: &str = "#b5534a";
