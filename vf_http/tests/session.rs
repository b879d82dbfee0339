use axum::http::StatusCode;
use serde_json::json;
use common::{app, get, json, FakeUpstream, Reply};

mod common;

#[tokio::test]
async fn missing_key_fails_before_any_upstream_call() {
    let temp = tempfile::tempdir().unwrap();
    let upstream = FakeUpstream::new(Reply::Respond(StatusCode::OK, "{}"));

    let (status, _, body) = get(app(temp.path(), None, upstream.clone()), "/session").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json(&body), json!({"detail": "OPENAI_API_KEY environment variable not set"}));
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn upstream_session_is_relayed_exactly() {
    let temp = tempfile::tempdir().unwrap();
    let session = r#"{"id":"sess_123","client_secret":{"value":"abc"}}"#;
    let upstream = FakeUpstream::new(Reply::Respond(StatusCode::OK, session));

    let (status, headers, body) = get(app(temp.path(), Some("sk-test"), upstream.clone()), "/session").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(String::from_utf8(body).unwrap(), session);
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn upstream_rejection_keeps_status() {
    let temp = tempfile::tempdir().unwrap();
    let upstream = FakeUpstream::new(Reply::Respond(StatusCode::UNAUTHORIZED, "invalid api key"));

    let (status, _, body) = get(app(temp.path(), Some("sk-bad"), upstream), "/session").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let detail = json(&body)["detail"].as_str().unwrap().to_string();
    assert_eq!(detail, "OpenAI API error: invalid api key");
}

#[tokio::test]
#[tracing_test::traced_test]
async fn connection_failure_is_internal_error() {
    let temp = tempfile::tempdir().unwrap();
    let upstream = FakeUpstream::new(Reply::Fail("[Errno 111] Connection refused"));

    let (status, _, body) = get(app(temp.path(), Some("sk-test"), upstream), "/session").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json(&body)["detail"].as_str().unwrap().to_string();
    assert!(detail.starts_with("Failed to connect to OpenAI API: "));
    assert!(detail.contains("Connection refused"));
}

#[tokio::test]
async fn sessions_are_never_cached() {
    let temp = tempfile::tempdir().unwrap();
    let upstream = FakeUpstream::new(Reply::Respond(StatusCode::OK, r#"{"id":"sess_1"}"#));
    let router = app(temp.path(), Some("sk-test"), upstream.clone());

    let (first, _, _) = get(router.clone(), "/session").await;
    let (second, _, _) = get(router, "/session").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(upstream.calls(), 2);

    let payloads = upstream.payloads();
    assert_eq!(payloads[0], payloads[1]);
    assert_eq!(payloads[0].model, "gpt-4o-realtime-preview-2024-12-17");
    assert_eq!(payloads[0].voice, "verse");
}
