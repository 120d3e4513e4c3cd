//! Command handlers for the Round Lifecycle context.
//!
//! Application-level orchestration: validate setup input, resolve the
//! category, run the domain operation, and dispatch the resulting events
//! to the cue sink. Cue dispatch is fire-and-forget — sink failures never
//! reach the round.

use std::sync::Mutex;

use impostor_content::CategoryCatalog;
use impostor_core::clock::Clock;
use impostor_core::cue::{Cue, CueSink};
use impostor_core::error::GameError;
use impostor_core::rng::DeterministicRng;
use tracing::warn;

use crate::domain::aggregates::{Round, Winner};
use crate::domain::commands::{
    AdvanceReveal, CallVote, EndRound, ReplayRound, ResetRound, StartRound,
};
use crate::domain::events::{RoundEvent, RoundEventKind};

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct RoundCommandResult {
    /// The domain events produced by the command.
    pub events: Vec<RoundEvent>,
}

/// Maps a domain event to the cue it should trigger, if any.
fn cue_for(event: &RoundEvent) -> Option<Cue> {
    match &event.kind {
        RoundEventKind::RoundStarted { .. } | RoundEventKind::DiscussionOpened { .. } => {
            Some(Cue::Click)
        }
        RoundEventKind::RevealAdvanced { .. } => Some(Cue::Reveal),
        RoundEventKind::VoteCalled => Some(Cue::Alarm),
        RoundEventKind::RoundEnded { winner } => Some(Cue::Fanfare {
            citizens: matches!(winner, Winner::Citizens),
        }),
        RoundEventKind::RoundReset => Some(Cue::SoftClick),
    }
}

/// Drains the round's pending events, fires their cues, and wraps them in
/// a command result.
fn dispatch(round: &mut Round, cues: &dyn CueSink) -> RoundCommandResult {
    let events = round.drain_events();
    for event in &events {
        if let Some(cue) = cue_for(event) {
            cues.fire(cue);
        }
    }
    RoundCommandResult { events }
}

fn lock_rng<'a>(
    rng: &'a Mutex<dyn DeterministicRng>,
) -> Result<std::sync::MutexGuard<'a, dyn DeterministicRng + 'static>, GameError> {
    rng.lock()
        .map_err(|e| GameError::Infrastructure(format!("RNG mutex poisoned: {e}")))
}

/// Handles the `StartRound` command: validates the setup input, resolves
/// the category, and starts the round.
///
/// # Errors
///
/// Returns `GameError::Validation` if fewer than three non-blank names
/// remain after trimming, or if the impostor-count precondition fails.
/// Returns `GameError::UnknownCategory` if the category id does not
/// resolve — a setup-surface bug; the round is left untouched.
pub fn handle_start_round(
    command: &StartRound,
    round: &mut Round,
    catalog: &CategoryCatalog,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng>,
    cues: &dyn CueSink,
) -> Result<RoundCommandResult, GameError> {
    let names: Vec<String> = command
        .player_names
        .iter()
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .collect();
    if names.len() < 3 {
        return Err(GameError::Validation(
            "at least 3 players are required".to_owned(),
        ));
    }

    let category = catalog.find(&command.category_id).ok_or_else(|| {
        warn!(category_id = %command.category_id, "start requested with unknown category");
        GameError::UnknownCategory(command.category_id.clone())
    })?;

    {
        let mut rng_guard = lock_rng(rng)?;
        round.start_round(
            &names,
            category,
            command.config,
            command.correlation_id,
            clock,
            &mut *rng_guard,
        )?;
    }

    Ok(dispatch(round, cues))
}

/// Handles the `AdvanceReveal` command.
///
/// # Errors
///
/// Returns `GameError::Validation` if the round is not in Reveal.
pub fn handle_advance_reveal(
    command: &AdvanceReveal,
    round: &mut Round,
    clock: &dyn Clock,
    cues: &dyn CueSink,
) -> Result<RoundCommandResult, GameError> {
    round.advance_reveal(command.correlation_id, clock)?;
    Ok(dispatch(round, cues))
}

/// Handles the `CallVote` command: stops discussion unconditionally and
/// triggers the alarm cue.
pub fn handle_call_vote(
    command: &CallVote,
    round: &mut Round,
    clock: &dyn Clock,
    cues: &dyn CueSink,
) -> RoundCommandResult {
    round.stop_discussion_for_vote(command.correlation_id, clock);
    dispatch(round, cues)
}

/// Handles the `EndRound` command: records the winner and plays the
/// matching fanfare.
pub fn handle_end_round(
    command: &EndRound,
    round: &mut Round,
    clock: &dyn Clock,
    cues: &dyn CueSink,
) -> RoundCommandResult {
    round.end_round(command.winner, command.correlation_id, clock);
    dispatch(round, cues)
}

/// Handles the `ResetRound` command: back to setup for a new game.
pub fn handle_reset_round(
    command: &ResetRound,
    round: &mut Round,
    clock: &dyn Clock,
    cues: &dyn CueSink,
) -> RoundCommandResult {
    round.reset_to_setup(command.correlation_id, clock);
    dispatch(round, cues)
}

/// Handles the `ReplayRound` command: re-runs `start` with the current
/// roster (order preserved, host re-derived as the first name), category,
/// and config, re-randomizing the secret word and the impostor set.
///
/// # Errors
///
/// Returns `GameError::NoCategorySelected` if no round has been played
/// yet, or `GameError::UnknownCategory` if the remembered category has
/// left the catalog. The round is untouched on error.
pub fn handle_replay_round(
    command: &ReplayRound,
    round: &mut Round,
    catalog: &CategoryCatalog,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng>,
    cues: &dyn CueSink,
) -> Result<RoundCommandResult, GameError> {
    let category_id = round
        .current_category
        .as_ref()
        .map(|c| c.id.clone())
        .ok_or(GameError::NoCategorySelected)?;

    let category = catalog.find(&category_id).ok_or_else(|| {
        warn!(%category_id, "replay requested with a category missing from the catalog");
        GameError::UnknownCategory(category_id.clone())
    })?;

    let names: Vec<String> = round.players.iter().map(|p| p.name.clone()).collect();
    let config = round.config;

    {
        let mut rng_guard = lock_rng(rng)?;
        round.start_round(
            &names,
            category,
            config,
            command.correlation_id,
            clock,
            &mut *rng_guard,
        )?;
    }

    Ok(dispatch(round, cues))
}
