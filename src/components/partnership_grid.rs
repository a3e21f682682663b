//! Partnership Grid Component

use dioxus::prelude::*;

use crate::components::CardView;
use crate::context::use_surface;

#[component]
pub fn PartnershipGrid() -> Element {
    let surface = use_surface();
    let cards = surface.partnerships.read().clone();

    rsx! {
        section { id: "partnerships", class: "partnerships-section",
            h2 { class: "section-title", "Partnerships" }
            p { class: "section-intro", "Collaborations with brands that share our values." }
            div { id: "partnership-grid", class: "partnership-grid",
                for card in cards {
                    CardView { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}
