use std::time::{Duration, Instant};

/// Interval between stability ticks while the monitor is armed.
pub const TICK_PERIOD: Duration = Duration::from_secs(20);

/// A tick only reverts an app when the gate draw exceeds this value, so a
/// revert happens on roughly 3% of ticks.
pub const CRASH_THRESHOLD: f64 = 0.97;

/// Source of uniform draws in `[0, 1)`. Production uses the thread-local
/// rng; tests script the sequence.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;
}

/// [`RandomSource`] backed by `rand::thread_rng`.
#[derive(Debug, Default)]
pub struct ThreadRandom;

/// Armed/disarmed state machine that occasionally "crashes" one active app
/// and reverts its override, simulating force-dark instability.
///
/// Armed while the global switch and safe mode are both on. Disarming drops
/// the pending tick, so no revert fires after the guard goes false. The
/// clock is supplied by the caller as `Instant`s, never read internally.
pub struct StabilityMonitor {
    pub armed: bool,
    pub next_tick_at: Option<Instant>,
    pub tick_period: Duration,
    pub crash_threshold: f64,
    pub random: Box<dyn RandomSource>,
}
