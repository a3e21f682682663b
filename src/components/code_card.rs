//! Catalog Card Component
//!
//! Renders a card fragment of any kind. Code cards add the copy chip.

use dioxus::prelude::*;
use emptynest_core::{copy_code, CardKind, Fragment};
use emptynest_ui::{Button, ButtonVariant};

use crate::clipboard::{FallbackClipboard, SystemClipboard, ToastNotifier};
use crate::context::use_toasts;

#[derive(Props, Clone, PartialEq)]
pub struct CardViewProps {
    pub card: Fragment,
    /// Kept mounted but not displayed
    #[props(default = false)]
    pub hidden: bool,
}

#[component]
pub fn CardView(props: CardViewProps) -> Element {
    let toasts = use_toasts();
    let card = props.card;

    let class = if props.hidden {
        format!("{} filter-hide", card.class_attr())
    } else {
        format!("{} filter-show", card.class_attr())
    };
    let heading_level_3 = card.kind != CardKind::Storefront;

    let copy_button = card.copy.clone().map(|copy| {
        let code = copy.code.clone();
        let label = copy.label.clone();
        rsx! {
            Button {
                variant: ButtonVariant::Copy,
                aria_label: label,
                onclick: move |_| {
                    let mut notifier = ToastNotifier { toasts };
                    let outcome = copy_code(
                        &mut SystemClipboard::open(),
                        &mut FallbackClipboard,
                        &mut notifier,
                        &copy.code,
                    );
                    tracing::debug!(code = %copy.code, ?outcome, "Copy requested");
                },
                code { "{code}" }
                span { class: "copy-hint", "Copy" }
            }
        }
    });

    rsx! {
        article {
            class: "{class}",
            hidden: props.hidden,
            "data-id": "{card.id}",
            "data-category": "{card.category_slug}",
            "data-tier": card.tier.as_str(),

            if let Some(badge) = card.badge {
                span { class: "card-badge", "{badge}" }
            }
            if heading_level_3 {
                h3 { class: "card-title", "{card.title}" }
            } else {
                h2 { class: "card-title", "{card.title}" }
            }
            p { class: "card-category", "{card.category}" }
            if !card.description.is_empty() {
                p { class: "card-description", "{card.description}" }
            }

            {copy_button}

            a {
                class: "card-link",
                href: "{card.link_url}",
                target: "_blank",
                rel: "noopener",
                "{card.link_label}"
            }
        }
    }
}
