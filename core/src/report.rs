//! Response body of the image analysis endpoint.
//!
//! The page currently simulates analysis; these types describe what a real
//! classifier answers with so it can drive the same [`Outcome`] rendering.

use serde::Deserialize;

use crate::Outcome;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("malformed report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("analysis rejected: {0}")]
    Rejected(String),
    #[error("unknown class label {0:?}")]
    UnknownLabel(String),
    #[error("confidence {0} outside [0, 1]")]
    Confidence(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisReport {
    pub image_url: Option<String>,
    pub class_label: String,
    pub confidence: f64,
    /// Annotated image as base64.
    #[serde(default)]
    pub analyzed_image: Option<String>,
    /// `None` when no notification was attempted.
    #[serde(default)]
    pub email_sent: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Report(AnalysisReport),
    Failure { error: String },
}

impl AnalysisReport {
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        let report = match serde_json::from_str::<Body>(raw) {
            Ok(Body::Report(report)) => report,
            Ok(Body::Failure { error }) => return Err(ReportError::Rejected(error)),
            Err(_) => {
                // Re-parse strictly to surface the field-level error.
                serde_json::from_str::<AnalysisReport>(raw)?
            }
        };
        if !(0.0..=1.0).contains(&report.confidence) {
            return Err(ReportError::Confidence(report.confidence));
        }
        Ok(report)
    }

    pub fn outcome(&self) -> Result<Outcome, ReportError> {
        let label = self.class_label.trim();
        if label.eq_ignore_ascii_case("garbage") {
            Ok(Outcome::GarbageDetected)
        } else if label.eq_ignore_ascii_case("clean") {
            Ok(Outcome::CleanRoad)
        } else {
            Err(ReportError::UnknownLabel(self.class_label.clone()))
        }
    }
}
