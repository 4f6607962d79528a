//! sharecheck Core
//!
//! Shared types and logic for the sharecheck client.
//!
//! This crate provides:
//! - Wire types for the analysis service contract
//! - Error types and result handling
//! - The response normalizer that turns a loosely-shaped verdict into a
//!   fully-defaulted render model
//! - Escaping and formatting helpers for display layers

pub mod error;
pub mod escape;
pub mod normalize;
pub mod types;

pub use error::{Error, Result};
pub use escape::escape_markup;
pub use normalize::{format_score, normalize, DetectionView, RenderModel, PLACEHOLDER, UNKNOWN_LABEL};
pub use types::{
    Detection, ErrorBody, HealthReply, Provider, RawScore, ScanPhase, ScanReport, ScanRequest,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::normalize::{normalize, DetectionView, RenderModel};
    pub use crate::types::{Provider, ScanPhase, ScanReport, ScanRequest};
}
