//! Empty Nest UI Components
//!
//! Presentational Dioxus components for the Empty Nest brand site. They know
//! nothing about the catalog; callers pass plain props and event handlers.
//!
//! ## Palette
//!
//! - **Blush (#d4a4a4)**: accents, active states, hover color
//! - **Charcoal (#2f2f2f)**: text and outlines
//! - **Cream (#f7f3ee)**: page and navigation background
//! - **Sage (#9caf88)**: success toasts

pub mod components;

pub use components::*;
