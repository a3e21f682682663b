//! Live Region Component
//!
//! Visually hidden `aria-live` region for status announcements.

use dioxus::prelude::*;

/// Politeness of the announcement
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Screen-reader-only status region.
///
/// `message` changes are what assistive technology announces; pass a new
/// value once per operation.
#[component]
pub fn LiveRegion(
    /// Element id of the region
    id: String,
    /// Current message
    message: String,
    #[props(default)] politeness: Politeness,
) -> Element {
    rsx! {
        div {
            id: "{id}",
            class: "sr-only",
            role: "status",
            "aria-live": politeness.as_str(),
            "aria-atomic": "true",
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn politeness_values() {
        assert_eq!(Politeness::default().as_str(), "polite");
        assert_eq!(Politeness::Assertive.as_str(), "assertive");
    }
}
