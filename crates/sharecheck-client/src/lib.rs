//! sharecheck Client
//!
//! Request orchestration for the sharecheck analysis service.
//!
//! This crate provides:
//! - The scan lifecycle orchestrator (`ScanClient`)
//! - The transport seam (`ApiTransport`) with a reqwest-backed implementation
//! - The render-sink contract the display layer implements
//! - The one-shot health probe

pub mod client;
pub mod sink;
pub mod transport;

pub use client::{ScanClient, EMPTY_INPUT_MESSAGE};
pub use sink::{RenderSink, HEALTH_DOWN};
pub use transport::{ApiReply, ApiTransport, HttpTransport, ANALYZE_PATH, HEALTH_PATH};
