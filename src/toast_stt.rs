use std::time::{Duration, Instant};

/// How long a toast stays visible before it expires on its own.
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

/// Visual class of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
    Success,
}

/// A single short-lived status message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// Single-slot notification sink: a new toast replaces whatever is showing,
/// and the replaced toast's expiry timer is moot.
#[derive(Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
}
