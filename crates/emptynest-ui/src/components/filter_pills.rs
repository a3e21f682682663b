//! Filter Pills Component
//!
//! Horizontal row of category filter buttons. Each button carries its
//! category slug in `data-category`; selection is by exact slug match, never
//! by label text.

use dioxus::prelude::*;

/// One filter button
#[derive(Clone, PartialEq, Debug)]
pub struct FilterPill {
    /// Bound category slug
    pub slug: String,
    /// Visible label
    pub label: String,
    /// Whether this pill carries the active indicator
    pub active: bool,
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Buttons in display order
    pub pills: Vec<FilterPill>,
    /// Handler called with the slug of the clicked pill
    pub on_select: EventHandler<String>,
    /// Accessible group label
    #[props(default = "Filter codes by category".to_string())]
    pub label: String,
}

/// Displays a horizontal row of filter pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         pills: pills(),
///         on_select: move |slug: String| select_category(&slug)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-bar",
            role: "group",
            "aria-label": "{props.label}",
            for pill in props.pills.iter() {
                {
                    let slug = pill.slug.clone();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{pill.slug}",
                            class: pill_class(pill.active),
                            r#type: "button",
                            "data-category": "{pill.slug}",
                            "aria-pressed": if pill.active { "true" } else { "false" },
                            onclick: move |_| {
                                tracing::trace!(slug = %slug, "Filter pill pressed");
                                on_select.call(slug.clone());
                            },
                            "{pill.label}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS class of a pill
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pill_class() {
        assert_eq!(pill_class(true), "filter-btn active");
        assert_eq!(pill_class(false), "filter-btn");
    }
}
