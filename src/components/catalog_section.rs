//! Member Codes Section
//!
//! Filter bar, sort control, results counter, the codes grid, the empty
//! state, the "show more" disclosure and the status live region. All of it
//! renders from the page surface; every interaction goes through the
//! catalog controller.

use dioxus::prelude::*;
use emptynest_core::{CategoryFilter, SortOrder};
use emptynest_ui::{Button, ButtonVariant, FilterPill, FilterPills, LiveRegion};

use crate::components::CardView;
use crate::context::{use_catalog, use_surface};

#[component]
pub fn CatalogSection() -> Element {
    let catalog = use_catalog();
    let surface = use_surface();

    // Local copies keep the handlers `Fn` and `Copy`
    let choose_category = move |slug: String| {
        let (mut catalog, mut surface) = (catalog, surface);
        if let Err(e) = catalog.write().select_category(&slug, &mut surface) {
            tracing::warn!("Ignoring filter selection: {}", e);
        }
    };

    let on_sort = move |e: FormEvent| {
        let (mut catalog, mut surface) = (catalog, surface);
        let order = match e.value().as_str() {
            "newest" => SortOrder::Newest,
            "alphabetical" => SortOrder::Alphabetical,
            _ => SortOrder::FeaturedFirst,
        };
        catalog.write().set_sort(order, &mut surface);
    };

    let toggle = move |_| {
        let (mut catalog, mut surface) = (catalog, surface);
        catalog.write().toggle_expanded(&mut surface);
    };

    let active = surface.active_filter.read().clone();
    let pills: Vec<FilterPill> = surface
        .filters
        .read()
        .iter()
        .map(|c| FilterPill {
            slug: c.slug.clone(),
            label: c.label.clone(),
            active: c.slug == active,
        })
        .collect();
    let sort = catalog.read().state().sort_order;
    let cards = surface.ordered_grid();
    let (seq, message) = surface.announcement.read().clone();
    let status = live_message(seq, &message);
    let empty_state = surface.empty_state.read().clone();
    let show_more = surface.show_more.read().clone();

    rsx! {
        section { id: "codes", class: "codes-section",
            h2 { class: "section-title", "Member Codes" }
            p { class: "section-intro",
                "Exclusive savings from brands we love. Tap a code to copy it."
            }

            div { id: "codes-filters",
                FilterPills { pills, on_select: choose_category }
            }

            div { class: "codes-toolbar",
                p { id: "codes-results-count", class: "results-count", "{surface.counter}" }
                label { class: "sort-control",
                    "Sort by "
                    select { onchange: on_sort,
                        for order in SortOrder::ALL {
                            option {
                                value: sort_value(order),
                                selected: order == sort,
                                "{order.label()}"
                            }
                        }
                    }
                }
            }

            div { id: "codes-grid", class: "codes-grid",
                for (card, hidden) in cards {
                    CardView { key: "{card.id}", card: card.clone(), hidden }
                }
            }

            if let Some(panel) = empty_state {
                div { id: "codes-empty-state", class: "empty-state",
                    p { "{panel.message}" }
                    div { class: "empty-state-actions",
                        for shortcut in panel.shortcuts {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: {
                                    let slug = shortcut.slug().to_string();
                                    move |_| choose_category(slug.clone())
                                },
                                "{shortcut_label(&shortcut)}"
                            }
                        }
                    }
                }
            }

            if let Some(control) = show_more {
                div { id: "codes-show-more", class: "show-more",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: show_more_class(control.expanded),
                        onclick: toggle,
                        "{control.label}"
                    }
                }
            }

            LiveRegion { id: "codes-status".to_string(), message: status }
        }
    }
}

/// Text for the one status region. Consecutive announcements differ in a
/// zero-width suffix so an identical message is still read out again.
fn live_message(seq: u64, message: &str) -> String {
    if seq % 2 == 1 {
        format!("{}\u{200B}", message)
    } else {
        message.to_string()
    }
}

fn sort_value(order: SortOrder) -> &'static str {
    match order {
        SortOrder::FeaturedFirst => "featured",
        SortOrder::Newest => "newest",
        SortOrder::Alphabetical => "alphabetical",
    }
}

fn show_more_class(expanded: bool) -> String {
    if expanded {
        "expanded".to_string()
    } else {
        String::new()
    }
}

fn shortcut_label(filter: &CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "See all codes",
        _ => "Back to featured",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_announcements_change_the_region_text() {
        let first = live_message(1, "3 codes shown for Travel");
        let second = live_message(2, "3 codes shown for Travel");
        assert_ne!(first, second);
        assert!(first.starts_with("3 codes shown for Travel"));
        assert_eq!(second, "3 codes shown for Travel");
    }

    #[test]
    fn no_announcement_yet_is_empty() {
        assert_eq!(live_message(0, ""), "");
    }
}
