//! Routes for the round lifecycle.

use std::sync::Arc;

use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use impostor_core::error::GameError;
use impostor_round::application::command_handlers;
use impostor_round::application::query_handlers::{RoundView, round_view};
use impostor_round::domain::aggregates::{GameConfig, Round, Winner};
use impostor_round::domain::commands;
use impostor_round::domain::events::{RoundEvent, RoundEventKind};
use impostor_round::domain::speaker::SpeakerRotation;
use impostor_timer::DiscussionTimer;

use crate::error::ApiError;
use crate::state::{AppState, DiscussionSession};

/// Request body for POST /start.
#[derive(Debug, Deserialize)]
pub struct StartRoundRequest {
    /// Player names in seating order; the first becomes the host.
    pub player_names: Vec<String>,
    /// Category to play with.
    pub category_id: String,
    /// Round settings; defaults apply when omitted.
    #[serde(default)]
    pub config: GameConfig,
}

/// Request body for POST /end.
#[derive(Debug, Deserialize)]
pub struct EndRoundRequest {
    /// Which side won.
    pub winner: Winner,
}

/// Creates or tears down the discussion session to match the events a
/// command produced. Dropping a session aborts its countdown task, so a
/// round leaving Discuss can never leak a tick.
fn sync_discussion(
    state: &AppState,
    round: &Round,
    events: &[RoundEvent],
) -> Result<(), GameError> {
    for event in events {
        match &event.kind {
            RoundEventKind::DiscussionOpened { time_limit_seconds } => {
                let session = DiscussionSession {
                    timer: DiscussionTimer::start(*time_limit_seconds, Arc::clone(&state.cues)),
                    speaker: SpeakerRotation::new(round.player_count()),
                };
                *state.discussion()? = Some(session);
            }
            RoundEventKind::RoundStarted { .. }
            | RoundEventKind::VoteCalled
            | RoundEventKind::RoundEnded { .. }
            | RoundEventKind::RoundReset => {
                *state.discussion()? = None;
            }
            RoundEventKind::RevealAdvanced { .. } => {}
        }
    }
    Ok(())
}

/// GET /
#[instrument(skip(state))]
async fn get_round(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let round = state.round()?;
    Ok(Json(round_view(&round)))
}

/// POST /start
#[instrument(skip(state, request), fields(category_id = %request.category_id))]
async fn start_round(
    State(state): State<AppState>,
    Json(request): Json<StartRoundRequest>,
) -> Result<Json<RoundView>, ApiError> {
    let command = commands::StartRound {
        correlation_id: Uuid::new_v4(),
        player_names: request.player_names,
        category_id: request.category_id,
        config: request.config,
    };

    info!(correlation_id = %command.correlation_id, "handling start_round command");

    let mut round = state.round()?;
    let result = {
        let catalog = state.catalog()?;
        command_handlers::handle_start_round(
            &command,
            &mut round,
            &catalog,
            state.clock.as_ref(),
            &state.rng,
            state.cues.as_ref(),
        )?
    };
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// POST /advance-reveal
#[instrument(skip(state))]
async fn advance_reveal(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::AdvanceReveal {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling advance_reveal command");

    let mut round = state.round()?;
    let result = command_handlers::handle_advance_reveal(
        &command,
        &mut round,
        state.clock.as_ref(),
        state.cues.as_ref(),
    )?;
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// POST /call-vote
#[instrument(skip(state))]
async fn call_vote(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::CallVote {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling call_vote command");

    let mut round = state.round()?;
    let result = command_handlers::handle_call_vote(
        &command,
        &mut round,
        state.clock.as_ref(),
        state.cues.as_ref(),
    );
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// POST /end
#[instrument(skip(state, request))]
async fn end_round(
    State(state): State<AppState>,
    Json(request): Json<EndRoundRequest>,
) -> Result<Json<RoundView>, ApiError> {
    let command = commands::EndRound {
        correlation_id: Uuid::new_v4(),
        winner: request.winner,
    };

    info!(correlation_id = %command.correlation_id, "handling end_round command");

    let mut round = state.round()?;
    let result = command_handlers::handle_end_round(
        &command,
        &mut round,
        state.clock.as_ref(),
        state.cues.as_ref(),
    );
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// POST /reset
#[instrument(skip(state))]
async fn reset_round(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::ResetRound {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling reset_round command");

    let mut round = state.round()?;
    let result = command_handlers::handle_reset_round(
        &command,
        &mut round,
        state.clock.as_ref(),
        state.cues.as_ref(),
    );
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// POST /replay
#[instrument(skip(state))]
async fn replay_round(State(state): State<AppState>) -> Result<Json<RoundView>, ApiError> {
    let command = commands::ReplayRound {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling replay_round command");

    let mut round = state.round()?;
    let result = {
        let catalog = state.catalog()?;
        command_handlers::handle_replay_round(
            &command,
            &mut round,
            &catalog,
            state.clock.as_ref(),
            &state.rng,
            state.cues.as_ref(),
        )?
    };
    sync_discussion(&state, &round, &result.events)?;

    Ok(Json(round_view(&round)))
}

/// Returns the router for the round lifecycle.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_round))
        .route("/start", post(start_round))
        .route("/advance-reveal", post(advance_reveal))
        .route("/call-vote", post(call_vote))
        .route("/end", post(end_round))
        .route("/reset", post(reset_round))
        .route("/replay", post(replay_round))
}
