use crate::api_analysis_stt::AnalysisStatus;
use std::collections::HashMap;

/// UI state for the app cards screen.
pub struct TabApps {
    /// Case-insensitive name filter.
    pub text_filter: String,
    /// Whether blacklisted apps are shown in the list.
    pub show_excluded: bool,
    /// Card currently expanded to its advanced panel, if any.
    pub expanded_id: Option<String>,
    /// AI analysis progress per app id.
    pub compat_reports: HashMap<String, AnalysisStatus>,
}

impl Default for TabApps {
    fn default() -> Self {
        Self {
            text_filter: String::new(),
            show_excluded: false,
            expanded_id: None,
            compat_reports: HashMap::new(),
        }
    }
}
