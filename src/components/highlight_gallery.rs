//! Highlight Gallery Component
//!
//! Cover tiles for the social highlights. A tile opens an interstitial
//! dialog; leaving the site only happens after the visitor confirms.

use dioxus::prelude::*;
use emptynest_core::data::HIGHLIGHTS;
use emptynest_core::{user_agent_is_mobile, HighlightDialog, OutboundAction};
use emptynest_ui::{Button, ButtonVariant, CloseButton};

use crate::context::use_site;

#[component]
pub fn HighlightGallery() -> Element {
    let site = use_site();
    let mut dialog = use_signal(HighlightDialog::default);
    let mut mobile = use_signal(|| site.mobile);

    // The webview's user agent can also mark the session as mobile
    use_effect(move || {
        spawn(async move {
            let mut probe = document::eval("dioxus.send(navigator.userAgent);");
            if let Ok(agent) = probe.recv::<String>().await {
                if user_agent_is_mobile(&agent) {
                    tracing::debug!("Mobile user agent detected");
                    mobile.set(true);
                }
            }
        });
    });

    let confirm = move |_| {
        let is_mobile = *mobile.peek();
        let action = dialog.write().confirm(is_mobile, &site.config);
        if let Some(action) = action {
            spawn(follow_outbound(action));
        }
    };

    let pending = dialog.read().pending().copied();

    rsx! {
        section { id: "highlights", class: "highlights-section",
            h2 { class: "section-title", "Highlights" }
            p { class: "section-intro", "Stories from the nest, saved on Instagram." }
            div { class: "highlight-gallery",
                for highlight in HIGHLIGHTS.iter().copied() {
                    button {
                        key: "{highlight.id}",
                        r#type: "button",
                        class: "highlight-tile",
                        "data-highlight": highlight.id,
                        onclick: move |_| dialog.write().open(highlight),
                        span { class: "highlight-cover", "{highlight.cover}" }
                        span { class: "highlight-title", "{highlight.title}" }
                    }
                }
            }

            if let Some(highlight) = pending {
                div {
                    class: "modal-overlay",
                    onclick: move |_| dialog.write().cancel(),
                    div {
                        class: "highlight-modal",
                        role: "dialog",
                        "aria-modal": "true",
                        "aria-labelledby": "highlight-modal-title",
                        onclick: move |e| e.stop_propagation(),
                        CloseButton { onclick: move |_| dialog.write().cancel() }
                        h2 { id: "highlight-modal-title", class: "modal-title",
                            "{highlight.title}"
                        }
                        p { class: "modal-description",
                            "You're about to leave Empty Nest to view this highlight on Instagram."
                        }
                        div { class: "modal-actions",
                            Button { variant: ButtonVariant::Primary, onclick: confirm, "Continue to Instagram" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| dialog.write().cancel(),
                                "Stay here"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Carry out a confirmed outbound navigation in the webview
async fn follow_outbound(action: OutboundAction) {
    match action {
        OutboundAction::NewWindow { url } => {
            let _ = document::eval(&open_script(&url));
        }
        OutboundAction::DeepLink {
            app_url,
            fallback_url,
            fallback_after,
        } => {
            let _ = document::eval(&format!(
                "window.location.href = {};",
                js_string(&app_url)
            ));
            tokio::time::sleep(fallback_after).await;
            tracing::debug!(url = %fallback_url, "Deep link fallback");
            let _ = document::eval(&open_script(&fallback_url));
        }
    }
}

fn open_script(url: &str) -> String {
    format!("window.open({}, '_blank', 'noopener');", js_string(url))
}

fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_quoted_for_scripts() {
        assert_eq!(
            open_script("https://example.com/a'b"),
            r#"window.open("https://example.com/a'b", '_blank', 'noopener');"#
        );
        assert_eq!(js_string(r#"x"y"#), r#""x\"y""#);
    }
}
