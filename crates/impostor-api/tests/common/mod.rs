//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use impostor_api::routes;
use impostor_api::state::AppState;
use impostor_content::{Category, CategoryCatalog};
use impostor_core::clock::Clock;
use impostor_core::cue::NullCueSink;
use impostor_core::rng::DeterministicRng;
use impostor_round::domain::aggregates::{GameConfig, Round};
use impostor_test_support::{FixedClock, MockRng, SequenceRng};
use impostor_vocab::VocabularyGenerator;

/// Generator stub returning a canned category (or nothing).
pub struct StubGenerator(pub Option<Category>);

#[async_trait]
impl VocabularyGenerator for StubGenerator {
    async fn generate(&self, _topic: &str, _language: &str) -> Option<Category> {
        self.0.clone()
    }
}

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build app state over the built-in catalog with a `MockRng` (every
/// draw picks the minimum: first word, first player as impostor).
pub fn test_state() -> AppState {
    test_state_with_rng(Arc::new(Mutex::new(MockRng)))
}

/// Build app state with a custom `SequenceRng` for tests that need
/// scripted draws.
pub fn test_state_with_sequence(rng: SequenceRng) -> AppState {
    test_state_with_rng(Arc::new(Mutex::new(rng)))
}

/// Build app state with a generator stub for the category tests.
pub fn test_state_with_generator(generator: Arc<dyn VocabularyGenerator>) -> AppState {
    build_state(Arc::new(Mutex::new(MockRng)), generator)
}

fn test_state_with_rng(rng: Arc<Mutex<dyn DeterministicRng>>) -> AppState {
    build_state(rng, Arc::new(StubGenerator(None)))
}

fn build_state(
    rng: Arc<Mutex<dyn DeterministicRng>>,
    generator: Arc<dyn VocabularyGenerator>,
) -> AppState {
    AppState::new(
        Round::new(Uuid::new_v4(), GameConfig::default()),
        CategoryCatalog::builtin().unwrap(),
        fixed_clock(),
        rng,
        Arc::new(NullCueSink),
        generator,
    )
}

/// Build the app router sharing `state`. Uses the same route structure
/// as `main.rs`; call once per request since `oneshot` consumes the
/// router.
pub fn app(state: &AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1/round",
            routes::round::router().merge(routes::discussion::router()),
        )
        .nest("/api/v1/categories", routes::categories::router())
        .with_state(state.clone())
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

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a bodyless POST request and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Start a round with the given players and config against the shared
/// state, asserting success.
pub async fn start_round(state: &AppState, players: &[&str], config: serde_json::Value) {
    let body = serde_json::json!({
        "player_names": players,
        "category_id": "default-food",
        "config": config,
    });
    let (status, _) = post_json(app(state), "/api/v1/round/start", &body).await;
    assert_eq!(status, StatusCode::OK);
}

/// Drive a started round from Reveal into Discuss.
pub async fn advance_to_discussion(state: &AppState, player_count: usize) {
    for _ in 0..player_count {
        let (status, _) = post_empty(app(state), "/api/v1/round/advance-reveal").await;
        assert_eq!(status, StatusCode::OK);
    }
}
