//! Query handlers for the Round Lifecycle context.
//!
//! Read-only view DTOs derived from the round aggregate. Every UI
//! surface is a pure function of this view plus its own ephemeral state.

use impostor_content::Category;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{GameConfig, Phase, Player, Round, Winner};

/// Read-only view of a player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    /// Player identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Whether this player is the impostor.
    pub is_impostor: bool,
    /// Whether this player is the host.
    pub is_host: bool,
    /// Reserved tally; always zero.
    pub vote_count: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            is_impostor: player.is_impostor,
            is_host: player.is_host,
            vote_count: player.vote_count,
        }
    }
}

/// Read-only view of the round aggregate.
#[derive(Debug, Serialize)]
pub struct RoundView {
    /// Current phase.
    pub phase: Phase,
    /// Players in reveal order, host first.
    pub players: Vec<PlayerView>,
    /// The category in play, if a round has started.
    pub current_category: Option<Category>,
    /// The word citizens know. Empty until a round starts.
    pub secret_word: String,
    /// Whose turn it is to view their role during Reveal.
    pub current_player_index: usize,
    /// Settings for the current round.
    pub config: GameConfig,
    /// Recorded winner; present only in the Result phase.
    pub winner: Option<Winner>,
    /// Aggregate version (event count).
    pub version: i64,
}

/// Builds the round view the UI surfaces render from.
#[must_use]
pub fn round_view(round: &Round) -> RoundView {
    RoundView {
        phase: round.phase,
        players: round.players.iter().map(PlayerView::from).collect(),
        current_category: round.current_category.clone(),
        secret_word: round.secret_word.clone(),
        current_player_index: round.current_player_index,
        config: round.config,
        winner: round.winner,
        version: round.version,
    }
}
