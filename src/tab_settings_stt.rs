use std::time::Instant;

/// Transient UI state for the preferences screen.
#[derive(Debug, Default)]
pub struct TabSettings {
    /// A simulated update check is in flight.
    pub checking_updates: bool,
    pub check_started: Option<Instant>,
}
