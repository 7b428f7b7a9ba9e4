use crossbeam_queue::SegQueue;
use serde::Deserialize;
use std::sync::Arc;

/// Risk classes the analysis model may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Structured result of a dark-mode compatibility analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompatReport {
    #[serde(rename = "hasNativeSupport")]
    pub has_native_support: bool,
    #[serde(rename = "potentialIssues")]
    pub potential_issues: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Per-app analysis progress shown on the app cards screen.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStatus {
    Pending,
    Ready(CompatReport),
    /// The call failed; treated as "unknown / no data", never retried.
    NoData,
}

/// Updates posted from analysis worker threads back to the UI thread.
#[derive(Debug)]
pub enum AnalysisUpdate {
    Completed { app_id: String, report: CompatReport },
    Failed { app_id: String },
}

/// Queue drained by the app once per frame.
pub type AnalysisQueue = Arc<SegQueue<AnalysisUpdate>>;
