//! Wire types for the analysis service contract

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream analysis backend selectable by the caller
///
/// Opaque to the scan lifecycle; the service decides what each value means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Rule-based analyzer running inside the service
    #[default]
    Local,
    /// OpenAI-compatible endpoint configured on the service
    Llm,
    /// Service picks the best available analyzer
    Auto,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::Llm => "llm",
            Provider::Auto => "auto",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Provider::Local),
            "llm" => Ok(Provider::Llm),
            "auto" => Ok(Provider::Auto),
            other => Err(format!(
                "unknown provider '{}' (expected local, llm, or auto)",
                other
            )),
        }
    }
}

/// Body of `POST /analyze`
///
/// Built fresh per submission, immutable once built, discarded after the
/// request resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Text to analyze, trimmed of surrounding whitespace
    pub text: String,

    /// Selected analysis backend
    pub provider: Provider,
}

impl ScanRequest {
    /// Create a new scan request
    pub fn new(text: impl Into<String>, provider: Provider) -> Self {
        Self {
            text: text.into(),
            provider,
        }
    }
}

/// Raw analysis verdict as received
///
/// The service contract does not guarantee any field is present; absent and
/// null are treated alike. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanReport {
    pub risk: Option<String>,
    pub score: Option<f64>,
    pub reasons: Option<Vec<String>>,
    pub detections: Option<Vec<Detection>>,
    pub suggested_rewrites: Option<Vec<String>>,
}

/// A single flagged excerpt, as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detection {
    pub label: Option<String>,

    /// Observed on the wire as either a number or a string
    pub score: Option<RawScore>,

    /// The offending excerpt
    pub span: Option<String>,
}

/// Score value as the service emits it
///
/// Coerced to a number during normalization; see `normalize`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(f64),
    Text(String),
}

/// Body of a non-2xx `/analyze` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReply {
    pub status: String,
}

/// Lifecycle of one submission
///
/// Phases never persist across submissions; the released busy flag is the
/// Idle-equivalent regardless of the terminal phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}
