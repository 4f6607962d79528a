//! Response normalization
//!
//! Converts a partially-populated service verdict into a fully-defaulted
//! render model. Total: any verdict shape produces a displayable model.

use serde::Serialize;

use crate::escape::escape_markup;
use crate::types::{Detection, RawScore, ScanReport};

/// Glyph shown where the service omitted a value
pub const PLACEHOLDER: &str = "—";

/// Label applied to detections the service left unlabeled
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Display-ready verdict
///
/// Rebuilt from scratch on every scan; never merged with a prior model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub risk: String,

    /// Display string, placeholder when absent so a missing score is never
    /// mistaken for zero
    pub score: String,

    pub reasons: Vec<String>,
    pub detections: Vec<DetectionView>,

    /// First suggested rewrite only, even when the service returns several
    pub rewrite: String,
}

/// A detection shaped for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionView {
    /// Markup-escaped label
    pub label: String,

    /// `None` means the service sent no usable score
    pub score: Option<f64>,

    /// Markup-escaped excerpt
    pub span: String,
}

/// Shape a raw verdict for display
///
/// Pure and total: absent fields get documented defaults, detections are
/// normalized independently, and markup-destined text (labels, spans) is
/// escaped here so it never reaches a sink raw.
pub fn normalize(raw: ScanReport) -> RenderModel {
    let rewrite = raw
        .suggested_rewrites
        .unwrap_or_default()
        .into_iter()
        .next()
        .filter(|first| !first.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    RenderModel {
        risk: raw.risk.unwrap_or_else(|| PLACEHOLDER.to_string()),
        score: raw
            .score
            .map(|n| format_score(Some(n)))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        reasons: raw.reasons.unwrap_or_default(),
        detections: raw
            .detections
            .unwrap_or_default()
            .into_iter()
            .map(normalize_detection)
            .collect(),
        rewrite,
    }
}

fn normalize_detection(raw: Detection) -> DetectionView {
    DetectionView {
        label: escape_markup(raw.label.as_deref().unwrap_or(UNKNOWN_LABEL)),
        score: raw.score.and_then(coerce_score),
        span: escape_markup(raw.span.as_deref().unwrap_or_default()),
    }
}

/// Coercion rule for the ambiguously-typed wire score: numbers pass
/// through, strings are parsed, anything else is unknown
fn coerce_score(raw: RawScore) -> Option<f64> {
    match raw {
        RawScore::Number(n) => Some(n),
        RawScore::Text(s) => s.trim().parse().ok(),
    }
}

/// Render a normalized score for display
///
/// Integral values print without a fractional part; the unknown sentinel
/// prints as the placeholder glyph.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{}", n),
        None => PLACEHOLDER.to_string(),
    }
}
