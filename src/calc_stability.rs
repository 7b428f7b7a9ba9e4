pub use crate::calc_stability_stt::*;
use crate::calc_forcedark::SessionState;
use crate::toast::{ToastKind, ToastState};
use rand::Rng;
use std::time::{Duration, Instant};

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen()
    }
}

impl Default for StabilityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityMonitor {
    pub fn new() -> Self {
        Self::with_random(TICK_PERIOD, CRASH_THRESHOLD, Box::new(ThreadRandom))
    }

    /// Monitor with an injected random source and custom timing, for tests.
    pub fn with_random(
        tick_period: Duration,
        crash_threshold: f64,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            armed: false,
            next_tick_at: None,
            tick_period,
            crash_threshold,
            random,
        }
    }

    /// Arm or disarm the monitor. Arming schedules the first tick one
    /// period out; disarming cancels whatever tick was pending.
    pub fn sync(&mut self, armed: bool, now: Instant) {
        if armed == self.armed {
            return;
        }
        self.armed = armed;
        if armed {
            self.next_tick_at = Some(now + self.tick_period);
            log::debug!("stability monitor armed");
        } else {
            self.next_tick_at = None;
            log::debug!("stability monitor disarmed");
        }
    }

    /// Fire the due tick, if any. Returns the name of the app that was
    /// auto-reverted, when a revert happened.
    pub fn poll(
        &mut self,
        now: Instant,
        session: &mut SessionState,
        toast: &mut ToastState,
    ) -> Option<String> {
        if !self.armed {
            return None;
        }
        match self.next_tick_at {
            Some(due) if now >= due => {}
            _ => return None,
        }
        self.next_tick_at = Some(now + self.tick_period);
        self.tick(session, toast, now)
    }

    fn tick(
        &mut self,
        session: &mut SessionState,
        toast: &mut ToastState,
        now: Instant,
    ) -> Option<String> {
        let candidates: Vec<usize> = session
            .apps
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_forced && !a.is_crashed && !a.is_excluded)
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let gate = self.random.next_f64();
        if gate <= self.crash_threshold {
            return None;
        }

        let pick = (self.random.next_f64() * candidates.len() as f64) as usize;
        let idx = candidates[pick.min(candidates.len() - 1)];

        let app = &mut session.apps[idx];
        app.is_crashed = true;
        app.is_forced = false;
        let name = app.name.clone();

        log::warn!("auto-reverted {} to prevent UI crash", name);
        toast.show(
            format!("Auto-reverted {} to prevent UI crash", name),
            ToastKind::Error,
            now,
        );
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted draw sequence; panics if a tick draws more than scripted.
    struct Scripted(VecDeque<f64>);

    impl Scripted {
        fn new(draws: &[f64]) -> Box<Self> {
            Box::new(Self(draws.iter().copied().collect()))
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.pop_front().expect("scripted draws exhausted")
        }
    }

    fn armed_session() -> (SessionState, ToastState) {
        let mut session = SessionState::new();
        let mut toast = ToastState::new();
        session.set_global_enabled(true, &mut toast, Instant::now());
        (session, toast)
    }

    #[test]
    fn test_draws_below_threshold_never_change_state() {
        let (mut session, mut toast) = armed_session();
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.5; 50]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        let before = session.clone();
        for i in 1..=50u32 {
            let reverted = monitor.poll(t0 + TICK_PERIOD * i, &mut session, &mut toast);
            assert!(reverted.is_none());
        }
        assert_eq!(session, before);
    }

    #[test]
    fn test_draw_above_threshold_reverts_exactly_one_candidate() {
        let (mut session, mut toast) = armed_session();
        // Gate passes, then pick the first candidate.
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.99, 0.0]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        let reverted = monitor.poll(t0 + TICK_PERIOD, &mut session, &mut toast);

        let name = reverted.expect("a revert was due");
        let crashed: Vec<_> = session.apps.iter().filter(|a| a.is_crashed).collect();
        assert_eq!(crashed.len(), 1);
        assert_eq!(crashed[0].name, name);
        assert!(!crashed[0].is_forced);

        let current = toast.current.as_ref().unwrap();
        assert!(current.message.contains(&name));
        assert_eq!(current.kind, ToastKind::Error);
    }

    #[test]
    fn test_pick_draw_selects_uniformly_indexed_candidate() {
        let (mut session, mut toast) = armed_session();
        // Pick draw lands in the last candidate's bucket.
        let mut monitor = StabilityMonitor::with_random(
            TICK_PERIOD,
            CRASH_THRESHOLD,
            Scripted::new(&[0.98, 0.999]),
        );

        let t0 = Instant::now();
        monitor.sync(true, t0);
        let reverted = monitor.poll(t0 + TICK_PERIOD, &mut session, &mut toast);
        assert_eq!(reverted.as_deref(), Some("Reddit"));
    }

    #[test]
    fn test_empty_candidate_set_skips_random_draws() {
        let mut session = SessionState::new();
        let mut toast = ToastState::new();
        // No draws scripted: a draw would panic, proving none happened.
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        let reverted = monitor.poll(t0 + TICK_PERIOD, &mut session, &mut toast);
        assert!(reverted.is_none());
    }

    #[test]
    fn test_revert_toast_uses_the_polled_clock() {
        let (mut session, mut toast) = armed_session();
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.99, 0.0]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        let due = t0 + TICK_PERIOD;
        monitor.poll(due, &mut session, &mut toast).expect("revert");

        // Toast lifetime starts at the polled instant, not the wall clock.
        assert_eq!(toast.current.as_ref().unwrap().shown_at, due);
    }

    #[test]
    fn test_disarm_cancels_pending_tick() {
        let (mut session, mut toast) = armed_session();
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.99, 0.0]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        // Guard flips off before the tick deadline passes.
        monitor.sync(false, t0 + Duration::from_secs(5));
        assert!(monitor.next_tick_at.is_none());

        let reverted = monitor.poll(t0 + TICK_PERIOD * 3, &mut session, &mut toast);
        assert!(reverted.is_none());
        assert!(session.apps.iter().all(|a| !a.is_crashed));
    }

    #[test]
    fn test_tick_not_due_is_noop() {
        let (mut session, mut toast) = armed_session();
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.99, 0.0]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        assert!(monitor
            .poll(t0 + Duration::from_secs(1), &mut session, &mut toast)
            .is_none());
        // The scheduled tick is still armed for later.
        assert!(monitor.next_tick_at.is_some());
    }

    #[test]
    fn test_rearming_schedules_fresh_tick() {
        let (mut session, mut toast) = armed_session();
        let mut monitor =
            StabilityMonitor::with_random(TICK_PERIOD, CRASH_THRESHOLD, Scripted::new(&[0.99, 0.0]));

        let t0 = Instant::now();
        monitor.sync(true, t0);
        monitor.sync(false, t0 + Duration::from_secs(1));
        monitor.sync(true, t0 + Duration::from_secs(2));

        // Old deadline passed, new one has not.
        assert!(monitor
            .poll(t0 + Duration::from_secs(21), &mut session, &mut toast)
            .is_none());
        let reverted = monitor.poll(t0 + Duration::from_secs(22), &mut session, &mut toast);
        assert!(reverted.is_some());
    }
}
