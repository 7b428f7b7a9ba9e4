pub use crate::toast_stt::*;
use std::time::Instant;

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a message, immediately replacing any current toast. The
    /// lifetime runs from `now`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        log::debug!("toast [{:?}]: {}", kind, message);
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
    }

    /// The toast to render at `now`, if one is still within its lifetime.
    pub fn active(&self, now: Instant) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|t| now.duration_since(t.shown_at) < TOAST_DURATION)
    }

    /// Drop the current toast once it has outlived [`TOAST_DURATION`].
    pub fn clear_expired(&mut self, now: Instant) {
        if let Some(t) = &self.current {
            if now.duration_since(t.shown_at) >= TOAST_DURATION {
                self.current = None;
            }
        }
    }
}
