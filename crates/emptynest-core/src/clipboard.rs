//! Clipboard copy with fallback, and toast notifications.
//!
//! Both capabilities are opaque services: the desktop shell backs them with
//! the system clipboard and a toast stack, tests back them with recorders.

use std::time::{Duration, Instant};

use crate::error::CatalogResult;

/// Write text to a clipboard
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> CatalogResult<()>;
}

/// Show a toast to the user
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// How a copy request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Primary clipboard failed, the legacy path succeeded
    CopiedWithFallback,
    /// Both paths failed; the user was shown the code
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        !matches!(self, CopyOutcome::Failed)
    }
}

/// Copy a discount code and tell the user how it went
pub fn copy_code(
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
    code: &str,
) -> CopyOutcome {
    let outcome = match primary.copy(code) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            tracing::warn!("Clipboard write failed, trying fallback: {}", e);
            match fallback.copy(code) {
                Ok(()) => CopyOutcome::CopiedWithFallback,
                Err(e) => {
                    tracing::warn!("Fallback copy failed: {}", e);
                    CopyOutcome::Failed
                }
            }
        }
    };

    let toast = if outcome.is_copied() {
        Toast::success(format!("Copied \"{}\" to clipboard", code))
    } else {
        Toast::error(format!("Couldn't copy automatically. Your code is {}", code))
    };
    notifier.notify(toast);
    outcome
}

/// A toast on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
    pub expires_at: Instant,
}

/// Timed toast stack.
///
/// Expiry and dismissal are idempotent, so a stale timer firing after a
/// manual dismiss does nothing.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    lifetime: Duration,
    next_id: u64,
    toasts: Vec<ActiveToast>,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Add a toast shown from `now`; returns its id
    pub fn push(&mut self, toast: Toast, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(ActiveToast {
            id,
            toast,
            expires_at: now + self.lifetime,
        });
        id
    }

    /// Drop every toast due at `now`
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Remove one toast; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[derive(Default)]
    struct MemoryClipboard {
        content: Option<String>,
        broken: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn copy(&mut self, text: &str) -> CatalogResult<()> {
            if self.broken {
                return Err(CatalogError::Clipboard("denied".to_string()));
            }
            self.content = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Toast>);

    impl Notifier for Recorder {
        fn notify(&mut self, toast: Toast) {
            self.0.push(toast);
        }
    }

    #[test]
    fn copy_success_toasts_code() {
        let mut primary = MemoryClipboard::default();
        let mut fallback = MemoryClipboard::default();
        let mut toasts = Recorder::default();

        let outcome = copy_code(&mut primary, &mut fallback, &mut toasts, "SAVE10");
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(primary.content.as_deref(), Some("SAVE10"));
        assert!(fallback.content.is_none());
        assert_eq!(toasts.0.len(), 1);
        assert!(toasts.0[0].message.contains("SAVE10"));
        assert_eq!(toasts.0[0].kind, ToastKind::Success);
    }

    #[test]
    fn copy_uses_fallback_when_primary_fails() {
        let mut primary = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        let mut fallback = MemoryClipboard::default();
        let mut toasts = Recorder::default();

        let outcome = copy_code(&mut primary, &mut fallback, &mut toasts, "NEST15");
        assert_eq!(outcome, CopyOutcome::CopiedWithFallback);
        assert_eq!(fallback.content.as_deref(), Some("NEST15"));
    }

    #[test]
    fn copy_failure_shows_code_for_manual_copy() {
        let mut primary = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        let mut fallback = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        let mut toasts = Recorder::default();

        let outcome = copy_code(&mut primary, &mut fallback, &mut toasts, "NEST15");
        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(toasts.0[0].kind, ToastKind::Error);
        assert!(toasts.0[0].message.ends_with("NEST15"));
    }

    #[test]
    fn toast_expires_after_lifetime() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_millis(3300));
        queue.push(Toast::success("Copied"), start);

        queue.expire(start + Duration::from_millis(3299));
        assert_eq!(queue.toasts().len(), 1);
        queue.expire(start + Duration::from_millis(3300));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        let id = queue.push(Toast::error("nope"), Instant::now());
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
    }
}
