//! Outbound links to externally hosted social highlights.
//!
//! A highlight never navigates directly. It opens an interstitial dialog;
//! confirming yields an [`OutboundAction`] for the shell to carry out.

use std::time::Duration;

use crate::config::SiteConfig;

/// A social-media highlight category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub id: &'static str,
    pub title: &'static str,
    /// Short label shown on the cover tile
    pub cover: &'static str,
    pub web_url: &'static str,
    /// App-scheme deep link
    pub app_url: &'static str,
}

const MOBILE_MARKERS: [&str; 5] = ["Android", "iPhone", "iPad", "iPod", "Mobile"];

/// Whether a user agent string belongs to a mobile device
pub fn user_agent_is_mobile(user_agent: &str) -> bool {
    MOBILE_MARKERS.iter().any(|m| user_agent.contains(m))
}

/// What the shell should do after confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Try the app, then open `fallback_url` if still on the page after
    /// `fallback_after`
    DeepLink {
        app_url: String,
        fallback_url: String,
        fallback_after: Duration,
    },
    /// Open in a new browsing context
    NewWindow { url: String },
}

pub fn plan_outbound(highlight: &Highlight, is_mobile: bool, config: &SiteConfig) -> OutboundAction {
    if is_mobile && !highlight.app_url.is_empty() {
        OutboundAction::DeepLink {
            app_url: highlight.app_url.to_string(),
            fallback_url: highlight.web_url.to_string(),
            fallback_after: config.deep_link_fallback,
        }
    } else {
        OutboundAction::NewWindow {
            url: highlight.web_url.to_string(),
        }
    }
}

/// Interstitial confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightDialog {
    #[default]
    Closed,
    Confirming(Highlight),
}

impl HighlightDialog {
    pub fn open(&mut self, highlight: Highlight) {
        *self = HighlightDialog::Confirming(highlight);
    }

    pub fn cancel(&mut self) {
        *self = HighlightDialog::Closed;
    }

    /// Close the dialog and plan the navigation; `None` if it was not open
    pub fn confirm(&mut self, is_mobile: bool, config: &SiteConfig) -> Option<OutboundAction> {
        match std::mem::take(self) {
            HighlightDialog::Confirming(highlight) => {
                tracing::info!(highlight = highlight.id, is_mobile, "Opening highlight");
                Some(plan_outbound(&highlight, is_mobile, config))
            }
            HighlightDialog::Closed => None,
        }
    }

    pub fn pending(&self) -> Option<&Highlight> {
        match self {
            HighlightDialog::Confirming(h) => Some(h),
            HighlightDialog::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAVEL: Highlight = Highlight {
        id: "travel",
        title: "Travel Diaries",
        cover: "Travel",
        web_url: "https://www.instagram.com/stories/highlights/1/",
        app_url: "instagram://story?id=1",
    };

    #[test]
    fn detects_mobile_agents() {
        assert!(user_agent_is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(user_agent_is_mobile("Mozilla/5.0 (Linux; Android 14)"));
        assert!(!user_agent_is_mobile(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36"
        ));
    }

    #[test]
    fn mobile_confirms_to_deep_link_with_fallback() {
        let config = SiteConfig::default();
        let mut dialog = HighlightDialog::default();
        dialog.open(TRAVEL);
        assert_eq!(dialog.pending().map(|h| h.id), Some("travel"));

        let action = dialog.confirm(true, &config).unwrap();
        assert_eq!(
            action,
            OutboundAction::DeepLink {
                app_url: TRAVEL.app_url.to_string(),
                fallback_url: TRAVEL.web_url.to_string(),
                fallback_after: config.deep_link_fallback,
            }
        );
        assert_eq!(dialog, HighlightDialog::Closed);
    }

    #[test]
    fn desktop_opens_new_window() {
        let action = plan_outbound(&TRAVEL, false, &SiteConfig::default());
        assert_eq!(
            action,
            OutboundAction::NewWindow {
                url: TRAVEL.web_url.to_string()
            }
        );
    }

    #[test]
    fn cancel_and_confirm_closed_dialog() {
        let mut dialog = HighlightDialog::default();
        dialog.open(TRAVEL);
        dialog.cancel();
        assert!(dialog.confirm(false, &SiteConfig::default()).is_none());
    }
}
