use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use critic::reviewer::Reviewer;
use critic::reviewer::TokenUsage;
use critic::reviewer::gemini::GeminiReviewer;

/// What the stub saw, plus what it should answer.
#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

async fn stub_handler(
    State(stub): State<Stub>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.seen.lock().unwrap().push((uri.path().to_string(), key, body));
    (stub.status, Json(stub.reply.clone()))
}

/// Start a fake Gemini API and return its `/v1beta` base URL.
async fn start_stub(status: StatusCode, reply: Value) -> (String, Stub) {
    let stub = Stub {
        status,
        reply,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .fallback(stub_handler)
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1beta"), stub)
}

#[tokio::test]
async fn sends_prompt_key_and_model() {
    let (base, stub) = start_stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "LGTM"}]}, "finishReason": "STOP"}]}),
    )
    .await;

    let reviewer = GeminiReviewer::new("test-key".to_string(), None).with_base_url(base);
    let review = reviewer
        .review("Please review this Python code:\n\nprint('hi')")
        .await
        .unwrap();

    assert_eq!(review.text, "LGTM");

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (path, key, body) = &seen[0];
    assert_eq!(path, "/v1beta/models/gemini-1.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));
    assert_eq!(
        body,
        &json!({"contents": [{"parts": [{"text": "Please review this Python code:\n\nprint('hi')"}]}]})
    );
}

#[tokio::test]
async fn custom_model_changes_path() {
    let (base, stub) = start_stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}),
    )
    .await;

    let reviewer = GeminiReviewer::new("k".to_string(), Some("gemini-2.0-flash".to_string()))
        .with_base_url(base);
    reviewer.review("p").await.unwrap();

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen[0].0, "/v1beta/models/gemini-2.0-flash:generateContent");
}

#[tokio::test]
async fn usage_metadata_is_reported() {
    let (base, _stub) = start_stub(
        StatusCode::OK,
        json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}],
            "usageMetadata": {"promptTokenCount": 20, "candidatesTokenCount": 80, "totalTokenCount": 100}
        }),
    )
    .await;

    let reviewer = GeminiReviewer::new("k".to_string(), None).with_base_url(base);
    let review = reviewer.review("p").await.unwrap();

    assert_eq!(
        review.usage,
        Some(TokenUsage {
            input_tokens: 20,
            output_tokens: 80,
        })
    );
}

#[tokio::test]
async fn http_error_includes_status_and_body() {
    let (base, _stub) = start_stub(
        StatusCode::BAD_REQUEST,
        json!({"error": {"code": 400, "message": "API key not valid"}}),
    )
    .await;

    let reviewer = GeminiReviewer::new("bad".to_string(), None).with_base_url(base);
    let err = reviewer.review("p").await.unwrap_err().to_string();

    assert!(err.contains("400"));
    assert!(err.contains("API key not valid"));
}

#[tokio::test]
async fn blocked_prompt_is_an_error() {
    let (base, _stub) = start_stub(
        StatusCode::OK,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}),
    )
    .await;

    let reviewer = GeminiReviewer::new("k".to_string(), None).with_base_url(base);
    assert!(reviewer.review("p").await.is_err());
}

#[tokio::test]
async fn unreachable_provider_is_an_error() {
    let reviewer =
        GeminiReviewer::new("k".to_string(), None).with_base_url("http://127.0.0.1:9/v1beta");
    assert!(reviewer.review("p").await.is_err());
}
