use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use khabar::application::ports::{EntityExtractor, ModelError, NewsClassifier, TextSummarizer};
use khabar::infrastructure::models::{
    HttpEntityExtractor, HttpModelClient, HttpNewsClassifier, HttpTextSummarizer,
};
use serde_json::{Value, json};

async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/classify",
            post(|Json(body): Json<Value>| async move {
                assert!(body["text"].is_string());
                Json(json!({
                    "category": "Sports",
                    "confidence": 0.82,
                    "probabilities": {"Sports": 0.82, "Politics": 0.18}
                }))
            }),
        )
        .route(
            "/summarize",
            post(|| async { Json(json!({"summary": "ملخص"})) }),
        )
        .route(
            "/summarize-plain",
            post(|| async { Json(json!("ملخص مباشر")) }),
        )
        .route(
            "/entities",
            post(|| async {
                Json(json!([
                    {"word": "دبي", "entity_group": "LOC", "start": 0, "end": 3},
                    "noise"
                ]))
            }),
        )
        .route(
            "/entities-wrapped",
            post(|| async { Json(json!({"entities": [{"text": "الرياض", "label": "LOC"}]})) }),
        )
        .route(
            "/secured",
            post(|headers: HeaderMap| async move {
                match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                    Some("Bearer secret") => (StatusCode::OK, Json(json!({"category": "ok"}))),
                    _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "denied"}))),
                }
            }),
        )
        .route(
            "/broken",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/list", post(|| async { Json(json!([1, 2, 3])) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str, path: &str, api_key: Option<&str>) -> HttpModelClient {
    HttpModelClient::new(
        &format!("{}{}", base, path),
        api_key.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_classifier_endpoint_when_classifying_then_parses_prediction() {
    let base = spawn_backend().await;
    let classifier = HttpNewsClassifier::new(client(&base, "/classify", None));

    let result = classifier.classify("مباراة").await.unwrap();

    assert_eq!(result.category.as_deref(), Some("Sports"));
    assert_eq!(result.confidence, Some(0.82));
    assert_eq!(result.probabilities.unwrap()[1].category, "Politics");
}

#[tokio::test]
async fn given_summary_object_or_string_when_summarizing_then_both_are_accepted() {
    let base = spawn_backend().await;

    let wrapped = HttpTextSummarizer::new(client(&base, "/summarize", None))
        .summarize("نص")
        .await
        .unwrap();
    let plain = HttpTextSummarizer::new(client(&base, "/summarize-plain", None))
        .summarize("نص")
        .await
        .unwrap();

    assert_eq!(wrapped.summary.as_deref(), Some("ملخص"));
    assert_eq!(plain.summary.as_deref(), Some("ملخص مباشر"));
}

#[tokio::test]
async fn given_entity_list_when_extracting_then_skips_malformed_records() {
    let base = spawn_backend().await;

    let entities = HttpEntityExtractor::new(client(&base, "/entities", None))
        .extract("دبي")
        .await
        .unwrap();
    let wrapped = HttpEntityExtractor::new(client(&base, "/entities-wrapped", None))
        .extract("الرياض")
        .await
        .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].label, "LOC");
    assert_eq!(entities[0].end, Some(3));
    assert_eq!(wrapped[0].text.as_deref(), Some("الرياض"));
}

#[tokio::test]
async fn given_api_key_when_calling_then_sends_bearer_token() {
    let base = spawn_backend().await;

    let authorised = HttpNewsClassifier::new(client(&base, "/secured", Some("secret")))
        .classify("نص")
        .await;
    let anonymous = HttpNewsClassifier::new(client(&base, "/secured", None))
        .classify("نص")
        .await;

    assert_eq!(authorised.unwrap().category.as_deref(), Some("ok"));
    assert!(matches!(anonymous, Err(ModelError::RequestFailed(_))));
}

#[tokio::test]
async fn given_server_error_when_calling_then_request_fails_with_status() {
    let base = spawn_backend().await;

    let result = HttpTextSummarizer::new(client(&base, "/broken", None))
        .summarize("نص")
        .await;

    let Err(ModelError::RequestFailed(message)) = result else {
        panic!("expected a request failure");
    };
    assert!(message.contains("500"));
}

#[tokio::test]
async fn given_unexpected_shape_when_classifying_then_response_is_invalid() {
    let base = spawn_backend().await;

    let classified = HttpNewsClassifier::new(client(&base, "/list", None))
        .classify("نص")
        .await;
    let summarized = HttpTextSummarizer::new(client(&base, "/list", None))
        .summarize("نص")
        .await;

    assert!(matches!(classified, Err(ModelError::InvalidResponse(_))));
    assert!(matches!(summarized, Err(ModelError::InvalidResponse(_))));
}

#[test]
fn given_malformed_endpoint_when_building_client_then_initialization_fails() {
    let result = HttpModelClient::new("not a url", None, Duration::from_secs(1));

    assert!(result.is_err());
}
