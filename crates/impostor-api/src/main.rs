//! VocabImpostor API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use impostor_api::state::AppState;
use impostor_api::routes;
use impostor_audio::{CueChannel, spawn_cue_logger};
use impostor_content::CategoryCatalog;
use impostor_core::clock::{Clock, SystemClock};
use impostor_core::cue::CueSink;
use impostor_core::rng::{DeterministicRng, StdRandom};
use impostor_round::domain::aggregates::{GameConfig, Round};
use impostor_vocab::{GeminiGenerator, VocabularyGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting VocabImpostor API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; category generation is disabled");
    }

    // Wire the cue pipeline; the logging consumer stands in for a
    // synthesizer front end.
    let (cue_channel, cue_rx) = CueChannel::new();
    spawn_cue_logger(cue_rx);

    // Build application state.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng>> = Arc::new(Mutex::new(StdRandom::from_entropy()));
    let cues: Arc<dyn CueSink> = Arc::new(cue_channel);
    let generator: Arc<dyn VocabularyGenerator> =
        Arc::new(GeminiGenerator::new(api_key, Arc::clone(&clock)));
    let app_state = AppState::new(
        Round::new(Uuid::new_v4(), GameConfig::default()),
        CategoryCatalog::builtin()?,
        clock,
        rng,
        cues,
        generator,
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1/round",
            routes::round::router().merge(routes::discussion::router()),
        )
        .nest("/api/v1/categories", routes::categories::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
