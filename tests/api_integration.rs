//! Integration tests for the HTTP API
//!
//! Session lifecycle, message turns and validation

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mano::config::EngineConfig;
use mano::core::{create_router, JournalStore};
use serde_json::Value;
use tempfile::tempdir;
use tower::ServiceExt;

fn create_test_router() -> Router {
    create_router(EngineConfig { seed: Some(1), ..EngineConfig::default() }, None)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn new_session(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["session_id"].as_str().unwrap().to_string()
}

async fn send(app: &Router, id: &str, text: &str) -> axum::response::Response {
    let body = serde_json::json!({ "text": text }).to_string();
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/message", id))
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions_active"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_create_session() {
    let app = create_test_router();
    let id = new_session(&app).await;
    assert!(!id.is_empty());

    let response = app
        .clone()
        .oneshot(Request::builder().uri(format!("/session/{}", id)).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["turn_count"], 0);
    assert_eq!(json["primary_emotion"], "neutral");
}

#[tokio::test]
async fn test_message_turn() {
    let app = create_test_router();
    let id = new_session(&app).await;

    let response = send(&app, &id, "I feel anxious about my exam tomorrow").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["turn"], 1);
    assert_eq!(json["analysis"]["emotion"], "anxiety");
    assert!(json["response"]["text"].as_str().unwrap().len() > 0);
    assert_eq!(json["check_in"]["result"]["emotion"], "Anxiety");

    let status = app
        .clone()
        .oneshot(Request::builder().uri(format!("/session/{}", id)).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(status).await;
    assert_eq!(json["turn_count"], 1);
    assert_eq!(json["context"], "my exam tomorrow");
}

#[tokio::test]
async fn test_crisis_message_is_referral() {
    let app = create_test_router();
    let id = new_session(&app).await;
    let json = body_json(send(&app, &id, "I want to kill myself").await).await;
    assert_eq!(json["response"]["category"], "referral");
    assert_eq!(json["analysis"]["intent"], "crisis");
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let app = create_test_router();
    let id = new_session(&app).await;
    let response = send(&app, &id, "   ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_unknown_session() {
    let app = create_test_router();
    let response = send(&app, "nonexistent", "hello").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Session not found: nonexistent");

    let response = app
        .oneshot(Request::builder().uri("/session/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_session() {
    let app = create_test_router();
    let id = new_session(&app).await;
    send(&app, &id, "hello").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/session/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["turns"], 1);

    let response = send(&app, &id, "still there?").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_analyze() {
    let app = create_test_router();
    let body = r#"{"text": "ok", "history": ["I have been so sad"]}"#;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["emotion"], "sadness");
    assert_eq!(json["topics"][0], "general");
}

#[tokio::test]
async fn test_check_ins_saved_to_journal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let app = create_router(EngineConfig::default(), Some(JournalStore::open(&path)));
    let id = new_session(&app).await;
    send(&app, &id, "I feel great").await;
    send(&app, &id, "work is stressful").await;

    let history = JournalStore::open(&path).load().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].entry, "work is stressful");
}

#[tokio::test]
async fn test_concurrent_sessions_share_journal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let app = create_router(EngineConfig::default(), Some(JournalStore::open(&path)));

    let mut ids = Vec::new();
    for _ in 0..8 {
        ids.push(new_session(&app).await);
    }
    let mut tasks = Vec::new();
    for id in ids {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..5 {
                let response = send(&app, &id, &format!("day {} was stressful at work", i)).await;
                assert_eq!(response.status(), StatusCode::OK);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let history = JournalStore::open(&path).load().unwrap();
    assert_eq!(history.len(), 40);
}

#[tokio::test]
async fn test_websocket_unknown_session() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/ws/nonexistent")
                .header("connection", "upgrade")
                .header("upgrade", "websocket")
                .header("sec-websocket-version", "13")
                .header("sec-websocket-key", "dGhlIHNhbXBsZSBub25jZQ==")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_ne!(response.status(), StatusCode::SWITCHING_PROTOCOLS);
}
