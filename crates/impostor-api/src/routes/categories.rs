//! Routes for the category catalog and the AI vocabulary generator.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use impostor_content::Category;
use impostor_core::error::GameError;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Request body for POST /generate.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Topic to build a vocabulary list around.
    pub topic: String,
    /// Language for the generated words.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "Spanish".to_owned()
}

/// GET /
#[instrument(skip(state))]
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let catalog = state.catalog()?;
    Ok(Json(catalog.all().to_vec()))
}

/// POST /generate
#[instrument(skip(state, request), fields(topic = %request.topic))]
async fn generate_category(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    if request.topic.trim().is_empty() {
        return Err(ApiError(GameError::Validation(
            "topic must not be blank".to_owned(),
        )));
    }

    // No locks held across the await; generation can take seconds.
    let generated = state
        .generator
        .generate(&request.topic, &request.language)
        .await;

    match generated {
        Some(category) => {
            state.catalog()?.append(category.clone())?;
            info!(category_id = %category.id, "generated category added to catalog");
            Ok(Json(category).into_response())
        }
        None => {
            warn!("vocabulary generation produced no category");
            let body = ErrorBody {
                error: "generation_failed",
                message: "vocabulary generation failed".to_owned(),
            };
            Ok((StatusCode::BAD_GATEWAY, Json(body)).into_response())
        }
    }
}

/// Returns the router for the category catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/generate", post(generate_category))
}
