use crate::api_analysis_stt::AnalysisQueue;
use crate::calc_forcedark_stt::SessionState;
use crate::calc_stability_stt::StabilityMonitor;
use crate::tab_apps_stt::TabApps;
use crate::tab_home_stt::TabHome;
use crate::tab_settings_stt::TabSettings;
use crate::toast_stt::ToastState;
use crate::Settings;

/// Screens reachable from the bottom navigation (the permission prompt is
/// only shown once, before navigation appears).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Permissions,
    Home,
    AppList,
    Settings,
    Guide,
}

/// Top-level application: owns the session state and hands it to whichever
/// screen is active.
pub struct DarkifyApp {
    pub screen: AppScreen,
    pub session: SessionState,
    pub settings: Settings,
    pub toast: ToastState,
    pub monitor: StabilityMonitor,
    pub tab_apps: TabApps,
    pub tab_home: TabHome,
    pub tab_settings: TabSettings,
    /// Results from analysis worker threads, drained once per frame.
    pub analysis_queue: AnalysisQueue,
}
