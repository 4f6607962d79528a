//! Error types for sharecheck

/// Result type alias using sharecheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fallback shown when an error carries no message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "Unexpected error";

/// Core error type for the scan lifecycle
///
/// Every kind is caught at the orchestrator boundary and converted to a
/// single user-visible message; the distinction between kinds matters only
/// for message construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected before any network activity
    #[error("{0}")]
    Validation(String),

    /// Transport-level failures (connection, timeout, malformed URL)
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response from the analysis service
    ///
    /// `Display` is the message alone so a service-supplied `detail`
    /// surfaces verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new service error
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Message for the error surface, with a fallback when empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
