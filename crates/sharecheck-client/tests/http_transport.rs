//! HttpTransport tests against a loopback service
//!
//! Spins up a real axum server on an ephemeral port so the reqwest path is
//! exercised end to end, including one full scan through the orchestrator.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use sharecheck_client::{ApiTransport, HttpTransport, RenderSink, ScanClient};
use sharecheck_core::{Provider, RenderModel, ScanPhase, ScanRequest};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn posts_json_body_to_analyze() {
    let app = Router::new().route(
        "/analyze",
        post(|Json(body): Json<Value>| async move {
            // Echo the submitted fields back so the test can check what
            // actually went over the wire.
            Json(json!({
                "risk": "PUBLIC",
                "reasons": [body["text"], body["provider"]],
            }))
        }),
    );
    let base_url = serve(app).await;

    let transport = HttpTransport::new(&base_url);
    let reply = transport
        .post_analyze(&ScanRequest::new("hello", Provider::Llm))
        .await
        .unwrap();

    assert_eq!(reply.status, 200);
    let body: Value = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(body["reasons"][0], "hello");
    assert_eq!(body["reasons"][1], "llm");
}

#[tokio::test]
async fn non_success_status_passes_through_undecoded() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"detail": "rate limited"})),
            )
        }),
    );
    let base_url = serve(app).await;

    let transport = HttpTransport::new(&base_url);
    let reply = transport
        .post_analyze(&ScanRequest::new("hello", Provider::Local))
        .await
        .unwrap();

    assert_eq!(reply.status, 429);
    assert!(reply.body.contains("rate limited"));
    assert!(!reply.is_success());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port.
    let transport = HttpTransport::new("http://127.0.0.1:9");

    let result = transport
        .post_analyze(&ScanRequest::new("hello", Provider::Local))
        .await;

    assert!(matches!(
        result,
        Err(sharecheck_core::Error::Transport(_))
    ));
}

#[tokio::test]
async fn fetches_health() {
    let app = Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) }));
    let base_url = serve(app).await;

    let transport = HttpTransport::new(&base_url);
    let reply = transport.get_health().await.unwrap();

    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("ok"));
}

/// Minimal sink capturing the last rendered model
#[derive(Default)]
struct CaptureSink {
    model: Mutex<Option<RenderModel>>,
    error: Mutex<Option<String>>,
}

impl RenderSink for CaptureSink {
    fn render(&self, model: &RenderModel) {
        *self.model.lock() = Some(model.clone());
    }

    fn set_error(&self, message: Option<&str>) {
        *self.error.lock() = message.map(str::to_string);
    }

    fn set_busy(&self, _busy: bool) {}

    fn show_health(&self, _status: &str) {}
}

#[tokio::test]
async fn full_scan_through_loopback_service() {
    let app = Router::new().route(
        "/analyze",
        post(|| async {
            Json(json!({
                "risk": "CONFIDENTIAL",
                "score": 72,
                "reasons": ["contains credentials"],
                "detections": [
                    {"label": "api_key", "score": "72", "span": "sk-<redacted>"}
                ],
                "suggested_rewrites": ["use a placeholder key"]
            }))
        }),
    );
    let base_url = serve(app).await;

    let sink = Arc::new(CaptureSink::default());
    let client = ScanClient::new(
        Arc::new(HttpTransport::new(&base_url)),
        sink.clone(),
    );

    client.scan("my key is sk-123", Provider::Auto).await;

    assert_eq!(client.phase(), ScanPhase::Succeeded);
    let model = sink.model.lock().clone().unwrap();
    assert_eq!(model.risk, "CONFIDENTIAL");
    assert_eq!(model.score, "72");
    assert_eq!(model.detections[0].score, Some(72.0));
    // Span escaped during normalization, before it reached the sink.
    assert_eq!(model.detections[0].span, "sk-&lt;redacted&gt;");
    assert_eq!(model.rewrite, "use a placeholder key");
    assert!(sink.error.lock().is_none());
}
