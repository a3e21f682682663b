//! System clipboard and toast notifier for the copy affordances.

use std::time::Instant;

use dioxus::prelude::*;
use emptynest_core::{CatalogError, CatalogResult, Clipboard, Notifier, Toast};

use crate::context::Toasts;

/// Clipboard handle opened once per copy request
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn open() -> Self {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Self {
                inner: Some(clipboard),
            },
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                Self { inner: None }
            }
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> CatalogResult<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| CatalogError::Clipboard("clipboard not available".to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CatalogError::Clipboard(e.to_string()))
    }
}

/// Legacy path: a fresh handle per attempt, then read back to confirm
pub struct FallbackClipboard;

impl Clipboard for FallbackClipboard {
    fn copy(&mut self, text: &str) -> CatalogResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CatalogError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CatalogError::Clipboard(e.to_string()))?;
        match clipboard.get_text() {
            Ok(current) if current == text => Ok(()),
            Ok(_) => Err(CatalogError::Clipboard("clipboard contents did not stick".to_string())),
            Err(e) => Err(CatalogError::Clipboard(e.to_string())),
        }
    }
}

/// Pushes toasts onto the shared queue and schedules their dismissal
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub toasts: Toasts,
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, toast: Toast) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(toast, Instant::now());
        let lifetime = toasts.peek().lifetime();

        spawn(async move {
            tokio::time::sleep(lifetime).await;
            toasts.write().dismiss(id);
        });
    }
}
