//! Routes for the discussion surface: countdown timer and speaker
//! rotation. Both exist only while the round is in Discuss.

use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use serde::Serialize;
use tracing::{info, instrument};

use impostor_core::cue::Cue;
use impostor_core::error::GameError;

use crate::error::ApiError;
use crate::state::{AppState, DiscussionSession};

/// Read-only view of the discussion countdown.
#[derive(Debug, Serialize)]
pub struct TimerView {
    /// Whether a countdown is currently ticking.
    pub running: bool,
    /// Whether the countdown is frozen.
    pub paused: bool,
    /// Seconds left; absent when no countdown exists.
    pub remaining_seconds: Option<u32>,
}

impl TimerView {
    fn idle() -> Self {
        Self {
            running: false,
            paused: false,
            remaining_seconds: None,
        }
    }

    fn of(session: &DiscussionSession) -> Self {
        match &session.timer {
            Some(timer) => Self {
                running: !timer.is_finished(),
                paused: timer.is_paused(),
                remaining_seconds: Some(timer.remaining()),
            },
            // Zero time limit: discussion is open but unclocked.
            None => Self::idle(),
        }
    }
}

/// Response body for POST /next-speaker.
#[derive(Debug, Serialize)]
pub struct SpeakerView {
    /// Index of the player now speaking.
    pub active_speaker_index: usize,
}

fn no_discussion() -> GameError {
    GameError::Validation("no discussion in progress".to_owned())
}

/// GET /timer
#[instrument(skip(state))]
async fn get_timer(State(state): State<AppState>) -> Result<Json<TimerView>, ApiError> {
    let discussion = state.discussion()?;
    let view = discussion.as_ref().map_or_else(TimerView::idle, TimerView::of);
    Ok(Json(view))
}

/// POST /timer/pause
#[instrument(skip(state))]
async fn pause_timer(State(state): State<AppState>) -> Result<Json<TimerView>, ApiError> {
    let discussion = state.discussion()?;
    let session = discussion.as_ref().ok_or_else(no_discussion)?;
    if let Some(timer) = &session.timer {
        timer.pause();
        info!("discussion timer paused");
    }
    Ok(Json(TimerView::of(session)))
}

/// POST /timer/resume
#[instrument(skip(state))]
async fn resume_timer(State(state): State<AppState>) -> Result<Json<TimerView>, ApiError> {
    let discussion = state.discussion()?;
    let session = discussion.as_ref().ok_or_else(no_discussion)?;
    if let Some(timer) = &session.timer {
        timer.resume();
        info!("discussion timer resumed");
    }
    Ok(Json(TimerView::of(session)))
}

/// POST /next-speaker
#[instrument(skip(state))]
async fn next_speaker(State(state): State<AppState>) -> Result<Json<SpeakerView>, ApiError> {
    let mut discussion = state.discussion()?;
    let session = discussion.as_mut().ok_or_else(no_discussion)?;
    let active_speaker_index = session.speaker.advance();
    state.cues.fire(Cue::SoftClick);

    info!(active_speaker_index, "speaker advanced");

    Ok(Json(SpeakerView {
        active_speaker_index,
    }))
}

/// Returns the router for the discussion surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timer", get(get_timer))
        .route("/timer/pause", post(pause_timer))
        .route("/timer/resume", post(resume_timer))
        .route("/next-speaker", post(next_speaker))
}
