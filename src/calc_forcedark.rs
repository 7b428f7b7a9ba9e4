pub use crate::calc_forcedark_stt::*;
use crate::models::{initial_apps, AppRecord, FixesPatch};
use crate::toast::{ToastKind, ToastState};
use std::time::Instant;

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            is_global_enabled: false,
            apps: initial_apps(),
        }
    }

    pub fn app(&self, id: &str) -> Option<&AppRecord> {
        self.apps.iter().find(|a| a.id == id)
    }

    fn app_mut(&mut self, id: &str) -> Option<&mut AppRecord> {
        self.apps.iter_mut().find(|a| a.id == id)
    }

    /// Number of apps with the override currently active.
    pub fn forced_count(&self) -> usize {
        self.apps.iter().filter(|a| a.is_forced).count()
    }

    /// Flip the global switch. Every non-excluded app follows it; excluded
    /// apps stay off regardless. Crash flags are cleared either way.
    pub fn set_global_enabled(&mut self, enabled: bool, toast: &mut ToastState, now: Instant) {
        self.is_global_enabled = enabled;
        for app in &mut self.apps {
            app.is_forced = enabled && !app.is_excluded;
            app.is_crashed = false;
        }

        if enabled {
            log::info!("Force Dark enabled system-wide");
            toast.show("Force Dark enabled system-wide", ToastKind::Success, now);
        } else {
            log::info!("Force Dark disabled");
            toast.show("Force Dark disabled", ToastKind::Info, now);
        }
    }

    /// Flip one app's override. Toggling always pulls the app out of the
    /// excluded set and clears any crash flag. Unknown ids are a no-op.
    pub fn toggle_app(&mut self, id: &str) {
        let Some(app) = self.app_mut(id) else {
            log::debug!("toggle_app: unknown app id {}", id);
            return;
        };
        app.is_forced = !app.is_forced;
        app.is_crashed = false;
        app.is_excluded = false;
        log::info!(
            "{} override {}",
            app.name,
            if app.is_forced { "enabled" } else { "disabled" }
        );
    }

    /// Blacklist an app from the global override, or restore it to the
    /// pool. Restoring never re-enables the override; the user has to
    /// toggle the app again. Unknown ids are a no-op.
    pub fn set_exclusion(&mut self, id: &str, excluded: bool, toast: &mut ToastState, now: Instant) {
        let Some(app) = self.app_mut(id) else {
            log::debug!("set_exclusion: unknown app id {}", id);
            return;
        };
        app.is_excluded = excluded;
        app.is_forced = false;
        app.is_crashed = false;

        if excluded {
            toast.show(format!("{} added to blacklist", app.name), ToastKind::Info, now);
        } else {
            toast.show(format!("{} restored to pool", app.name), ToastKind::Success, now);
        }
    }

    /// Merge a sparse rendering-fix patch into one app's flags. Unknown ids
    /// are a no-op.
    pub fn update_fixes(&mut self, id: &str, patch: &FixesPatch) {
        let Some(app) = self.app_mut(id) else {
            log::debug!("update_fixes: unknown app id {}", id);
            return;
        };
        app.advanced_fixes.apply(patch);
    }

    /// `is_excluded` implies `!is_forced`, for every app.
    #[cfg(test)]
    fn exclusion_invariant_holds(&self) -> bool {
        self.apps.iter().all(|a| !a.is_excluded || !a.is_forced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixesPatch;

    fn session() -> (SessionState, ToastState) {
        (SessionState::new(), ToastState::new())
    }

    #[test]
    fn test_global_enable_forces_non_excluded_apps() {
        let (mut session, mut toast) = session();
        session.set_exclusion("2", true, &mut toast, Instant::now());

        session.set_global_enabled(true, &mut toast, Instant::now());
        assert!(session.is_global_enabled);
        for app in &session.apps {
            if app.id == "2" {
                assert!(!app.is_forced);
                assert!(app.is_excluded);
            } else {
                assert!(app.is_forced);
            }
            assert!(!app.is_crashed);
        }
        assert!(session.exclusion_invariant_holds());

        let current = toast.current.as_ref().unwrap();
        assert_eq!(current.message, "Force Dark enabled system-wide");
        assert_eq!(current.kind, ToastKind::Success);
    }

    #[test]
    fn test_global_disable_reverts_everything() {
        let (mut session, mut toast) = session();
        session.set_global_enabled(true, &mut toast, Instant::now());
        session.set_global_enabled(false, &mut toast, Instant::now());

        assert!(!session.is_global_enabled);
        assert!(session.apps.iter().all(|a| !a.is_forced));
        assert_eq!(toast.current.as_ref().unwrap().kind, ToastKind::Info);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_clears_flags() {
        let (mut session, mut toast) = session();
        session.set_exclusion("1", true, &mut toast, Instant::now());
        if let Some(app) = session.apps.iter_mut().find(|a| a.id == "1") {
            app.is_crashed = true;
        }

        session.toggle_app("1");
        let app = session.app("1").unwrap();
        assert!(app.is_forced);
        assert!(!app.is_crashed);
        assert!(!app.is_excluded);

        session.toggle_app("1");
        let app = session.app("1").unwrap();
        assert!(!app.is_forced);
        assert!(!app.is_crashed);
        assert!(!app.is_excluded);
        assert!(session.exclusion_invariant_holds());
    }

    #[test]
    fn test_toggle_does_not_touch_global_flag() {
        let (mut session, mut toast) = session();
        session.set_global_enabled(true, &mut toast, Instant::now());
        session.toggle_app("3");
        assert!(session.is_global_enabled);
    }

    #[test]
    fn test_restore_does_not_rearm_override() {
        let (mut session, mut toast) = session();
        session.toggle_app("4");
        assert!(session.app("4").unwrap().is_forced);

        session.set_exclusion("4", true, &mut toast, Instant::now());
        let app = session.app("4").unwrap();
        assert!(app.is_excluded);
        assert!(!app.is_forced);
        assert_eq!(
            toast.current.as_ref().unwrap().message,
            "Amazon Shopping added to blacklist"
        );

        session.set_exclusion("4", false, &mut toast, Instant::now());
        let app = session.app("4").unwrap();
        assert!(!app.is_excluded);
        assert!(!app.is_forced, "restore must not re-enable the override");
        assert_eq!(
            toast.current.as_ref().unwrap().message,
            "Amazon Shopping restored to pool"
        );
        assert!(session.exclusion_invariant_holds());
    }

    #[test]
    fn test_unknown_ids_are_silent_noops() {
        let (mut session, mut toast) = session();
        let before = session.clone();

        session.toggle_app("nope");
        session.set_exclusion("nope", true, &mut toast, Instant::now());
        session.update_fixes("nope", &FixesPatch::default());

        assert_eq!(session.apps, before.apps);
        assert_eq!(session.is_global_enabled, before.is_global_enabled);
    }

    #[test]
    fn test_update_fixes_merges_partially() {
        let (mut session, _) = session();
        session.update_fixes(
            "5",
            &FixesPatch {
                preserve_images: Some(false),
                ..Default::default()
            },
        );

        let fixes = &session.app("5").unwrap().advanced_fixes;
        assert!(!fixes.preserve_images);
        assert!(fixes.invert_light_only);
        assert!(!fixes.reduce_contrast_artifacts);
        assert!(fixes.fix_white_on_white);
    }

    #[test]
    fn test_invariant_after_every_operation() {
        let (mut session, mut toast) = session();
        session.set_global_enabled(true, &mut toast, Instant::now());
        assert!(session.exclusion_invariant_holds());
        session.set_exclusion("6", true, &mut toast, Instant::now());
        assert!(session.exclusion_invariant_holds());
        session.toggle_app("6");
        assert!(session.exclusion_invariant_holds());
        session.set_global_enabled(false, &mut toast, Instant::now());
        assert!(session.exclusion_invariant_holds());
        session.set_global_enabled(true, &mut toast, Instant::now());
        assert!(session.exclusion_invariant_holds());
    }
}
