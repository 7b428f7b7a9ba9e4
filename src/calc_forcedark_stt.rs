use crate::models::AppRecord;

/// Authoritative per-session force-dark state. Every screen reads it and all
/// mutations go through the operations in `calc_forcedark`, which run to
/// completion on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The global force-dark switch.
    pub is_global_enabled: bool,
    /// Ordered app registry, seeded once at startup.
    pub apps: Vec<AppRecord>,
}
