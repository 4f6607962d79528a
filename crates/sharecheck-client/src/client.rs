//! Scan request orchestrator

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use sharecheck_core::{
    normalize, Error, ErrorBody, HealthReply, Provider, Result, ScanPhase, ScanReport, ScanRequest,
};

use crate::sink::{RenderSink, HEALTH_DOWN};
use crate::transport::ApiTransport;

/// Message shown when the input is empty after trimming
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some text to scan.";

/// Client-side orchestrator for the scan lifecycle
///
/// Owns the single in-flight flag. All display goes through the injected
/// sink, all network traffic through the injected transport; there is no
/// other shared mutable state.
pub struct ScanClient {
    transport: Arc<dyn ApiTransport>,
    sink: Arc<dyn RenderSink>,
    in_flight: AtomicBool,
    phase: RwLock<ScanPhase>,
}

impl ScanClient {
    /// Create a new orchestrator over the given transport and sink
    pub fn new(transport: Arc<dyn ApiTransport>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            transport,
            sink,
            in_flight: AtomicBool::new(false),
            phase: RwLock::new(ScanPhase::Idle),
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ScanPhase {
        *self.phase.read()
    }

    /// Whether a submission is currently in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit `text` for analysis and route the outcome to the sink
    ///
    /// At most one scan runs at a time; a call made while another is in
    /// flight does nothing. The submission control is re-enabled exactly
    /// once as the final step of every exit path, including the validation
    /// short-circuit. Failures never render partial results. No retries: a
    /// failed attempt is terminal until the user resubmits.
    pub async fn scan(&self, text: &str, provider: Provider) {
        // Claim the flag before the first await so a double trigger cannot
        // race past the disabled control.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("scan already in flight, ignoring submission");
            return;
        }

        self.sink.set_error(None);
        self.sink.set_busy(true);
        *self.phase.write() = ScanPhase::Submitting;

        let _guard = SubmitGuard { client: self };

        match self.run_scan(text, provider).await {
            Ok(()) => {
                *self.phase.write() = ScanPhase::Succeeded;
            }
            Err(err) => {
                *self.phase.write() = ScanPhase::Failed;
                self.sink.set_error(Some(&err.user_message()));
            }
        }
    }

    async fn run_scan(&self, text: &str, provider: Provider) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::validation(EMPTY_INPUT_MESSAGE));
        }

        let request = ScanRequest::new(text, provider);
        debug!(provider = %request.provider, chars = request.text.len(), "submitting scan");

        let reply = self.transport.post_analyze(&request).await?;

        if !reply.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&reply.body)
                .ok()
                .and_then(|body| body.detail)
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| format!("Request failed ({})", reply.status));
            return Err(Error::service(reply.status, message));
        }

        let report: ScanReport = serde_json::from_str(&reply.body)?;
        let model = normalize(report);
        info!(
            risk = %model.risk,
            detections = model.detections.len(),
            "scan complete"
        );
        self.sink.render(&model);
        Ok(())
    }

    /// One-shot liveness check
    ///
    /// Fire-and-forget: runs once at startup, is never retried, and has no
    /// effect on the scan workflow. Every failure kind shows the fixed
    /// "down" text.
    pub async fn probe_health(&self) {
        let status = match self.transport.get_health().await {
            Ok(reply) if reply.is_success() => {
                match serde_json::from_str::<HealthReply>(&reply.body) {
                    Ok(health) => health.status,
                    Err(err) => {
                        debug!(error = %err, "health body undecodable");
                        HEALTH_DOWN.to_string()
                    }
                }
            }
            Ok(reply) => {
                debug!(status = reply.status, "health probe returned non-success");
                HEALTH_DOWN.to_string()
            }
            Err(err) => {
                debug!(error = %err, "health probe failed");
                HEALTH_DOWN.to_string()
            }
        };

        self.sink.show_health(&status);
    }
}

/// Re-enables the submission control and releases the in-flight flag when
/// the scan exits, whichever path it takes
struct SubmitGuard<'a> {
    client: &'a ScanClient,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.client.sink.set_busy(false);
        self.client.in_flight.store(false, Ordering::SeqCst);
    }
}
