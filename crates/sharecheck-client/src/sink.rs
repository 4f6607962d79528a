//! Render sink contract
//!
//! The display layer is injected into the orchestrator behind this trait;
//! the orchestrator never reaches for ambient global state. Methods are
//! synchronous: display updates happen inline between the lifecycle's
//! suspension points.

use sharecheck_core::RenderModel;

/// Fixed liveness text shown when the service cannot be reached
pub const HEALTH_DOWN: &str = "down";

/// Display layer the orchestrator feeds
pub trait RenderSink: Send + Sync {
    /// Display a freshly normalized verdict, replacing any prior output
    ///
    /// Implementations show the risk, the score, the reasons as a list,
    /// each detection as a labeled block (label, score, escaped span), and
    /// the single rewrite with a copy affordance where the medium has one.
    fn render(&self, model: &RenderModel);

    /// Show an error message, or clear the error surface with `None`
    fn set_error(&self, message: Option<&str>);

    /// Disable (`true`) or re-enable (`false`) the submission control
    fn set_busy(&self, busy: bool);

    /// Update the liveness indicator
    fn show_health(&self, status: &str);
}
