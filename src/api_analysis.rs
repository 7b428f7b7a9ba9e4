pub use crate::api_analysis_stt::*;
use std::error::Error;
use std::time::Duration;

/// Environment variable holding the analysis API key.
pub const API_KEY_ENV: &str = "DARKIFY_API_KEY";

const MODEL: &str = "gemini-2.0-flash";

/// Error types for the compatibility analysis API
#[derive(Debug)]
pub enum AnalysisError {
    /// No API key configured in the environment.
    MissingKey,
    HttpError(Box<dyn Error>),
    ParseError(Box<dyn Error>),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::MissingKey => {
                write!(f, "No analysis API key set ({})", API_KEY_ENV)
            }
            AnalysisError::HttpError(e) => write!(f, "HTTP error: {}", e),
            AnalysisError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl Error for AnalysisError {}

/// Ask the model whether an app is dark-mode compatible (blocking).
pub fn analyze_app_compatibility(
    app_name: &str,
    api_key: &str,
) -> Result<CompatReport, AnalysisError> {
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        MODEL, api_key
    );
    let prompt = format!(
        "Analyze Android app \"{}\" for dark mode compatibility. Does it have a \
         native dark mode? If not, what are the common UI breakage issues when \
         using 'Force Dark'? Return JSON with hasNativeSupport (boolean), \
         potentialIssues (string) and riskLevel (one of: low, medium, high).",
        app_name
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    });

    let response = ureq::post(&url)
        .timeout(Duration::from_secs(60))
        .set("content-type", "application/json")
        .send_string(&body.to_string());

    match response {
        Ok(resp) => {
            log::trace!("analysis HTTP response status: {}", resp.status());
            let response_text = resp
                .into_string()
                .map_err(|e| AnalysisError::HttpError(Box::new(e)))?;
            log::trace!("analysis HTTP response body: {}", response_text);
            parse_report(&response_text)
        }
        Err(ureq::Error::Status(code, _)) => {
            log::trace!("analysis HTTP error status: {}", code);
            let err_msg = format!("HTTP error {}", code);
            Err(AnalysisError::HttpError(err_msg.into()))
        }
        Err(e) => Err(AnalysisError::HttpError(Box::new(e))),
    }
}

/// Extract the model's JSON payload from a generateContent envelope.
fn parse_report(body: &str) -> Result<CompatReport, AnalysisError> {
    let envelope: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AnalysisError::ParseError(Box::new(e)))?;
    let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| AnalysisError::ParseError("missing candidate text".into()))?;
    serde_json::from_str(text.trim()).map_err(|e| AnalysisError::ParseError(Box::new(e)))
}

/// Run the analysis on a background thread and post the outcome onto the
/// update queue. Failure degrades to [`AnalysisUpdate::Failed`]; the app
/// registry is never touched from here.
pub fn spawn_analysis(app_id: String, app_name: String, queue: AnalysisQueue) {
    std::thread::spawn(move || {
        let result = std::env::var(API_KEY_ENV)
            .map_err(|_| AnalysisError::MissingKey)
            .and_then(|key| analyze_app_compatibility(&app_name, &key));
        match result {
            Ok(report) => {
                log::info!("compatibility analysis completed for {}", app_name);
                queue.push(AnalysisUpdate::Completed { app_id, report });
            }
            Err(e) => {
                log::warn!("compatibility analysis failed for {}: {}", app_name, e);
                queue.push(AnalysisUpdate::Failed { app_id });
            }
        }
    });
}
