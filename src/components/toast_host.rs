//! Toast host: renders the shared toast queue.

use dioxus::prelude::*;
use emptynest_ui::{ToastItem, ToastStack};

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    let items: Vec<ToastItem> = toasts
        .read()
        .toasts()
        .iter()
        .map(|active| ToastItem {
            id: active.id,
            message: active.toast.message.clone(),
            class: active.toast.kind.class(),
        })
        .collect();

    rsx! {
        ToastStack {
            toasts: items,
            on_dismiss: move |id: u64| {
                toasts.write().dismiss(id);
            },
        }
    }
}
