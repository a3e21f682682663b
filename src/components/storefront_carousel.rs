//! Storefront Carousel Component
//!
//! One storefront card at a time with previous/next controls and slide dots.

use dioxus::prelude::*;
use emptynest_core::site::Carousel;
use emptynest_ui::IconButton;

use crate::components::CardView;
use crate::context::use_surface;

#[component]
pub fn StorefrontCarousel() -> Element {
    let surface = use_surface();
    let mut carousel = use_signal(|| Carousel::new(surface.storefronts.peek().len()));

    // Slides can change after a store mutation
    use_effect(move || {
        let len = surface.storefronts.read().len();
        if carousel.peek().len() != len {
            carousel.write().resize(len);
        }
    });

    let slides = surface.storefronts.read().clone();

    if slides.is_empty() {
        return rsx! {
            section { id: "storefronts", class: "storefronts-section" }
        };
    }

    let current = carousel.read().current();
    let count = slides.len();

    rsx! {
        section { id: "storefronts", class: "storefronts-section",
            h2 { class: "section-title", "Shop Empty Nest" }
            div { id: "storefront-carousel", class: "carousel", "aria-roledescription": "carousel",
                IconButton {
                    aria_label: "Previous storefront".to_string(),
                    class: "carousel-prev".to_string(),
                    onclick: move |_| carousel.write().prev(),
                    "‹"
                }
                div { class: "carousel-track",
                    for (i, card) in slides.into_iter().enumerate() {
                        div {
                            key: "{card.id}",
                            class: if i == current { "carousel-slide active" } else { "carousel-slide" },
                            "aria-hidden": if i == current { "false" } else { "true" },
                            CardView { card, hidden: i != current }
                        }
                    }
                }
                IconButton {
                    aria_label: "Next storefront".to_string(),
                    class: "carousel-next".to_string(),
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
            }
            div { class: "carousel-dots",
                for i in 0..count {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: if i == current { "carousel-dot active" } else { "carousel-dot" },
                        "aria-label": "Go to storefront {i + 1}",
                        onclick: move |_| carousel.write().go_to(i),
                    }
                }
            }
        }
    }
}
