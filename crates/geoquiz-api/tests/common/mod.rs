//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use geoquiz_core::history::ScoreHistoryStore;
use geoquiz_core::rng::DeterministicRng;
use geoquiz_test_support::{MockRng, RecordingHistoryStore, fixed_clock};
use http_body_util::BodyExt;
use tower::ServiceExt;

use geoquiz_api::config::FeedbackTiming;
use geoquiz_api::routes;
use geoquiz_api::state::AppState;

/// Feedback never advances by itself; tests drive `next` explicitly.
pub fn manual_timing() -> FeedbackTiming {
    FeedbackTiming {
        auto_advance: false,
        ..FeedbackTiming::default()
    }
}

/// Feedback advances after a few milliseconds.
pub fn fast_timing() -> FeedbackTiming {
    FeedbackTiming {
        auto_advance: true,
        answer_delay: Duration::from_millis(10),
        wrong_country_delay: Duration::from_millis(10),
    }
}

/// Build the full app router with a fixed clock, an RNG that always picks
/// the first eligible country, and a recording score store.
pub fn build_test_app() -> (Router, Arc<RecordingHistoryStore>) {
    build_test_app_with_timing(manual_timing())
}

/// Same as [`build_test_app`] with custom feedback timing.
pub fn build_test_app_with_timing(timing: FeedbackTiming) -> (Router, Arc<RecordingHistoryStore>) {
    let store = Arc::new(RecordingHistoryStore::default());
    let app_state = AppState::new(
        Arc::new(fixed_clock()),
        Arc::new(|| Box::new(MockRng) as Box<dyn DeterministicRng>),
        Arc::clone(&store) as Arc<dyn ScoreHistoryStore>,
        timing,
    );
    (routes::router(app_state), store)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Create a game of `total` questions and return its id.
pub async fn create_game(app: &Router, total: u32) -> String {
    let (status, json) = post_json(
        app.clone(),
        "/api/v1/games",
        &serde_json::json!({ "totalQuestions": total }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["gameId"].as_str().unwrap().to_owned()
}

/// POST to `/api/v1/games/{game_id}/{action}` with a JSON body.
pub async fn post_action(
    app: &Router,
    game_id: &str,
    action: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_json(app.clone(), &format!("/api/v1/games/{game_id}/{action}"), body).await
}

/// Select Europe and answer its first question (France) correctly.
pub async fn answer_first_question(app: &Router, game_id: &str) {
    post_action(app, game_id, "continent", &serde_json::json!({ "continent": "europe" })).await;
    post_action(app, game_id, "country", &serde_json::json!({ "code": "FR" })).await;
    post_action(app, game_id, "answer", &serde_json::json!({ "answer": "Paris" })).await;
}
