//! Domain events for the Round Lifecycle context.
//!
//! Rounds are not persisted, so these events are never stored: they feed
//! the cue sink, structured logging, and API responses.

use impostor_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::aggregates::Winner;

/// Event type identifier for [`RoundEventKind::RoundStarted`].
pub const ROUND_STARTED_EVENT_TYPE: &str = "round.started";

/// Event type identifier for [`RoundEventKind::RevealAdvanced`].
pub const REVEAL_ADVANCED_EVENT_TYPE: &str = "round.reveal_advanced";

/// Event type identifier for [`RoundEventKind::DiscussionOpened`].
pub const DISCUSSION_OPENED_EVENT_TYPE: &str = "round.discussion_opened";

/// Event type identifier for [`RoundEventKind::VoteCalled`].
pub const VOTE_CALLED_EVENT_TYPE: &str = "round.vote_called";

/// Event type identifier for [`RoundEventKind::RoundEnded`].
pub const ROUND_ENDED_EVENT_TYPE: &str = "round.ended";

/// Event type identifier for [`RoundEventKind::RoundReset`].
pub const ROUND_RESET_EVENT_TYPE: &str = "round.reset";

/// Event payload variants for the Round Lifecycle context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundEventKind {
    /// A round was started: roles and the secret word were assigned.
    RoundStarted {
        /// The category the secret word was drawn from.
        category_id: String,
        /// Number of players in the round.
        player_count: usize,
        /// Number of impostors assigned.
        impostor_count: u32,
    },
    /// The reveal turn moved to the next player.
    RevealAdvanced {
        /// Index of the player now viewing their role.
        current_player_index: usize,
    },
    /// The last player saw their role; discussion is open.
    DiscussionOpened {
        /// Configured discussion time limit (0 = no limit).
        time_limit_seconds: u32,
    },
    /// Discussion was stopped (time up or host intervention); voting begins.
    VoteCalled,
    /// A winner was recorded and the round completed.
    RoundEnded {
        /// Which side won.
        winner: Winner,
    },
    /// The round returned to setup for a new game.
    RoundReset,
}

/// Domain event envelope for the Round Lifecycle context.
#[derive(Debug, Clone)]
pub struct RoundEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: RoundEventKind,
}

impl DomainEvent for RoundEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            RoundEventKind::RoundStarted { .. } => ROUND_STARTED_EVENT_TYPE,
            RoundEventKind::RevealAdvanced { .. } => REVEAL_ADVANCED_EVENT_TYPE,
            RoundEventKind::DiscussionOpened { .. } => DISCUSSION_OPENED_EVENT_TYPE,
            RoundEventKind::VoteCalled => VOTE_CALLED_EVENT_TYPE,
            RoundEventKind::RoundEnded { .. } => ROUND_ENDED_EVENT_TYPE,
            RoundEventKind::RoundReset => ROUND_RESET_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("RoundEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
