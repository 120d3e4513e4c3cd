//! Integration tests for the discussion timer and speaker rotation.
//!
//! All tests run on a paused tokio runtime so the countdown's virtual
//! clock only moves when a test sleeps.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use common::{advance_to_discussion, app, get_json, post_empty, start_round};

#[tokio::test(start_paused = true)]
async fn test_timer_runs_while_discussing() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    let (status, timer) = get_json(app(&state), "/api/v1/round/timer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], true);
    assert_eq!(timer["paused"], false);
    assert!(timer["remaining_seconds"].as_u64().unwrap() <= 300);
}

#[tokio::test(start_paused = true)]
async fn test_timer_is_idle_outside_discussion() {
    let state = common::test_state();

    let (status, timer) = get_json(app(&state), "/api/v1/round/timer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], false);
    assert_eq!(timer["paused"], false);
    assert_eq!(timer["remaining_seconds"], serde_json::Value::Null);
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_remaining_and_resume_continues() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    let (status, timer) = post_empty(app(&state), "/api/v1/round/timer/pause").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["paused"], true);
    let frozen = timer["remaining_seconds"].as_u64().unwrap();

    // Time passes; a paused countdown does not move.
    tokio::time::sleep(Duration::from_secs(5)).await;
    let (_, timer) = get_json(app(&state), "/api/v1/round/timer").await;
    assert_eq!(timer["paused"], true);
    assert_eq!(timer["remaining_seconds"].as_u64().unwrap(), frozen);

    let (status, timer) = post_empty(app(&state), "/api/v1/round/timer/resume").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["paused"], false);
}

#[tokio::test(start_paused = true)]
async fn test_calling_a_vote_tears_the_timer_down() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    let (status, _) = post_empty(app(&state), "/api/v1/round/call-vote").await;
    assert_eq!(status, StatusCode::OK);

    let (_, timer) = get_json(app(&state), "/api/v1/round/timer").await;
    assert_eq!(timer["running"], false);
    assert_eq!(timer["remaining_seconds"], serde_json::Value::Null);
}

#[tokio::test(start_paused = true)]
async fn test_zero_time_limit_opens_discussion_without_a_countdown() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 0 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    let (status, timer) = get_json(app(&state), "/api/v1/round/timer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["running"], false);
    assert_eq!(timer["remaining_seconds"], serde_json::Value::Null);

    // The speaker rotation still works in an unclocked discussion.
    let (status, speaker) = post_empty(app(&state), "/api/v1/round/next-speaker").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(speaker["active_speaker_index"], 1);
}

#[tokio::test(start_paused = true)]
async fn test_next_speaker_cycles_through_the_roster() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    let (_, speaker) = post_empty(app(&state), "/api/v1/round/next-speaker").await;
    assert_eq!(speaker["active_speaker_index"], 1);
    let (_, speaker) = post_empty(app(&state), "/api/v1/round/next-speaker").await;
    assert_eq!(speaker["active_speaker_index"], 2);
    let (_, speaker) = post_empty(app(&state), "/api/v1/round/next-speaker").await;
    assert_eq!(speaker["active_speaker_index"], 0);
}

#[tokio::test(start_paused = true)]
async fn test_next_speaker_outside_discussion_returns_400() {
    let state = common::test_state();

    let (status, json) = post_empty(app(&state), "/api/v1/round/next-speaker").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test(start_paused = true)]
async fn test_starting_a_new_round_clears_the_previous_discussion() {
    let state = common::test_state();
    start_round(
        &state,
        &["Ana", "Beto", "Cora"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;
    advance_to_discussion(&state, 3).await;

    start_round(
        &state,
        &["Dani", "Eva", "Fede"],
        json!({ "impostor_count": 1, "time_limit_seconds": 300 }),
    )
    .await;

    // Back in Reveal: the old session and its countdown are gone.
    let (_, timer) = get_json(app(&state), "/api/v1/round/timer").await;
    assert_eq!(timer["running"], false);
    let (status, _) = post_empty(app(&state), "/api/v1/round/next-speaker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
