//! Toast Components
//!
//! Stack of short-lived notifications in the bottom corner.

use dioxus::prelude::*;

/// A toast as the stack renders it
#[derive(Clone, PartialEq, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub message: String,
    /// Kind class, e.g. `toast-success`
    pub class: &'static str,
}

/// Properties for the ToastStack component
#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    /// Toasts, oldest first
    pub toasts: Vec<ToastItem>,
    /// Handler called with the id of a dismissed toast
    pub on_dismiss: EventHandler<u64>,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in props.toasts.iter() {
                {
                    let id = toast.id;
                    let on_dismiss = props.on_dismiss;
                    rsx! {
                        div {
                            key: "{toast.id}",
                            class: "toast {toast.class}",
                            span { class: "toast-message", "{toast.message}" }
                            button {
                                class: "toast-dismiss",
                                r#type: "button",
                                "aria-label": "Dismiss notification",
                                onclick: move |_| on_dismiss.call(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
