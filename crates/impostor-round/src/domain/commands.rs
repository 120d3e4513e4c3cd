//! Commands for the Round Lifecycle context.

use impostor_core::command::Command;
use uuid::Uuid;

use super::aggregates::{GameConfig, Winner};

/// Command to start a round from setup input.
#[derive(Debug, Clone)]
pub struct StartRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Player names as entered at the setup surface, host first.
    pub player_names: Vec<String>,
    /// The selected category.
    pub category_id: String,
    /// Round settings.
    pub config: GameConfig,
}

impl Command for StartRound {
    fn command_type(&self) -> &'static str {
        "round.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to pass the reveal turn to the next player.
#[derive(Debug, Clone)]
pub struct AdvanceReveal {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for AdvanceReveal {
    fn command_type(&self) -> &'static str {
        "round.advance_reveal"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to stop discussion and open voting.
#[derive(Debug, Clone)]
pub struct CallVote {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for CallVote {
    fn command_type(&self) -> &'static str {
        "round.call_vote"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to record the winner and complete the round.
#[derive(Debug, Clone)]
pub struct EndRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Which side won.
    pub winner: Winner,
}

impl Command for EndRound {
    fn command_type(&self) -> &'static str {
        "round.end"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to return to setup for a new game.
#[derive(Debug, Clone)]
pub struct ResetRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetRound {
    fn command_type(&self) -> &'static str {
        "round.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replay with the same roster, category, and config,
/// re-randomizing the secret word and the impostor set.
#[derive(Debug, Clone)]
pub struct ReplayRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ReplayRound {
    fn command_type(&self) -> &'static str {
        "round.replay"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
