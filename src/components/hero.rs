//! Hero Component
//!
//! Headline block revealed in sequence on load, followed by the brand
//! metrics strip with its count-up.

use std::collections::HashSet;
use std::time::Duration;

use dioxus::prelude::*;
use emptynest_core::data::METRICS;
use emptynest_core::site::{reveal_schedule, MetricValue};

use crate::context::use_site;

/// Frame interval of the metric count-up
const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let mut revealed: Signal<HashSet<&'static str>> = use_signal(HashSet::new);

    let stagger = site.config.reveal_stagger;
    use_effect(move || {
        for (class, delay) in reveal_schedule(stagger) {
            spawn(async move {
                tokio::time::sleep(delay).await;
                revealed.write().insert(class);
            });
        }
    });

    let reveal = move |class: &'static str| {
        if revealed.read().contains(class) {
            format!("{} revealed", class)
        } else {
            class.to_string()
        }
    };

    let eyebrow = reveal("hero-eyebrow");
    let headline = reveal("hero-headline");
    let subtext = reveal("hero-subtext");
    let actions = reveal("hero-actions");
    let gallery = reveal("visual-gallery");

    rsx! {
        header { id: "top", class: "hero",
            p { class: "{eyebrow}", "For the next chapter" }
            h1 { class: "{headline}", "Empty Nest" }
            p { class: "{subtext}",
                "Curated brands, member-only codes and slow-living inspiration for couples "
                "rediscovering life at home and on the road."
            }
            div { class: "{actions}",
                a { class: "btn-primary", href: "#codes", "Browse member codes" }
                a { class: "btn-secondary", href: "#storefronts", "Shop the edit" }
            }
            div { class: "{gallery}",
                div { class: "gallery-item gallery-coast" }
                div { class: "gallery-item gallery-table" }
                div { class: "gallery-item gallery-garden" }
            }
        }

        section { class: "metrics-strip",
            for (label, value) in METRICS.iter().copied() {
                Metric { key: "{label}", label, value }
            }
        }
    }
}

/// One counting metric
#[component]
fn Metric(label: &'static str, value: &'static str) -> Element {
    let site = use_site();
    let frames = site.config.count_up_frames;
    let parsed = MetricValue::parse(value);
    let mut frame = use_signal(|| 0u32);

    let counting = matches!(parsed, MetricValue::Count { .. });
    use_effect(move || {
        if !counting {
            return;
        }
        spawn(async move {
            for i in 1..=frames {
                tokio::time::sleep(FRAME).await;
                frame.set(i);
            }
        });
    });

    let text = parsed.frame(frame(), frames);
    let class = if parsed == MetricValue::Infinite { "metric-value floating" } else { "metric-value" };

    rsx! {
        div { class: "metric-item",
            span { class: "{class}", "{text}" }
            span { class: "metric-label", "{label}" }
        }
    }
}
