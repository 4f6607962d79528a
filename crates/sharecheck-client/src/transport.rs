//! Transport seam for the analysis service
//!
//! The orchestrator talks to the service through `ApiTransport` so tests can
//! substitute canned replies; `HttpTransport` is the reqwest-backed
//! implementation real callers use. Status inspection and body decoding
//! stay in the orchestrator; the transport only moves bytes.

use async_trait::async_trait;

use sharecheck_core::{Error, Result, ScanRequest};

/// Path of the analysis endpoint
pub const ANALYZE_PATH: &str = "/analyze";

/// Path of the liveness endpoint
pub const HEALTH_PATH: &str = "/health";

/// Raw reply from the service: status code plus undecoded body
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport the orchestrator is constructed with
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Submit one analysis request as a JSON-encoded POST
    async fn post_analyze(&self, request: &ScanRequest) -> Result<ApiReply>;

    /// Fetch the liveness endpoint
    async fn get_health(&self) -> Result<ApiReply>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for a service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn post_analyze(&self, request: &ScanRequest) -> Result<ApiReply> {
        let response = self
            .client
            .post(self.url(ANALYZE_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        reply_from(response).await
    }

    async fn get_health(&self) -> Result<ApiReply> {
        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        reply_from(response).await
    }
}

async fn reply_from(response: reqwest::Response) -> Result<ApiReply> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| Error::transport(e.to_string()))?;

    Ok(ApiReply { status, body })
}
