//! Terminal render sinks

use sharecheck_client::RenderSink;
use sharecheck_core::{format_score, RenderModel, PLACEHOLDER};

/// Human-readable report printer
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn render(&self, model: &RenderModel) {
        println!("Risk: {} | Score: {}", model.risk, model.score);

        if !model.reasons.is_empty() {
            println!("Reasons:");
            for reason in &model.reasons {
                println!(" - {}", reason);
            }
        }

        if !model.detections.is_empty() {
            println!("Detections:");
            for detection in &model.detections {
                println!(
                    " - {}: {} ({})",
                    detection.label,
                    detection.span,
                    format_score(detection.score)
                );
            }
        }

        if model.rewrite != PLACEHOLDER {
            println!("Suggested rewrite: {}", model.rewrite);
        }
    }

    fn set_error(&self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("error: {}", message);
        }
    }

    // A terminal has no submission control to disable
    fn set_busy(&self, _busy: bool) {}

    fn show_health(&self, status: &str) {
        println!("API: {}", status);
    }
}

/// Machine-readable sink: prints the normalized model as JSON on stdout
///
/// Everything else goes to stderr so stdout stays parseable.
pub struct JsonSink;

impl RenderSink for JsonSink {
    fn render(&self, model: &RenderModel) {
        match serde_json::to_string_pretty(model) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("error: failed to encode result: {}", err),
        }
    }

    fn set_error(&self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("error: {}", message);
        }
    }

    fn set_busy(&self, _busy: bool) {}

    fn show_health(&self, status: &str) {
        eprintln!("API: {}", status);
    }
}
