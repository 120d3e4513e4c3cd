//! The round aggregate for the Round Lifecycle context.

use impostor_core::clock::Clock;
use impostor_core::error::GameError;
use impostor_core::event::EventMetadata;
use impostor_core::rng::DeterministicRng;
use impostor_content::Category;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::{RoundEvent, RoundEventKind};

/// The round lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Collecting players and settings; no round in progress.
    Setup,
    /// Players view their roles privately, one at a time.
    Reveal,
    /// Timed open discussion.
    Discuss,
    /// Discussion stopped; the group decides who the impostor is.
    Vote,
    /// A winner has been recorded.
    Result,
}

/// Which side won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The impostor bluffed through undetected.
    Impostor,
    /// The citizens unmasked the impostor.
    Citizens,
}

/// A player in the current round.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Player identifier, minted per round.
    pub id: Uuid,
    /// Display name, already trimmed.
    pub name: String,
    /// Whether this player does not know the secret word.
    pub is_impostor: bool,
    /// Whether this player is the host (always the first name supplied).
    pub is_host: bool,
    /// Reserved tally for a future voting feature; never written by the
    /// round logic.
    pub vote_count: u32,
}

/// Per-round settings, immutable once the round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many players are impostors. At least 1, strictly fewer than
    /// the player count.
    pub impostor_count: u32,
    /// Discussion time limit in seconds; 0 means no limit.
    pub time_limit_seconds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { impostor_count: 1, time_limit_seconds: 300 }
    }
}

/// The aggregate root for the round lifecycle. Single source of truth:
/// every surface derives its view from this state.
#[derive(Debug)]
pub struct Round {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (number of recorded events).
    pub(crate) version: i64,
    pub(crate) phase: Phase,
    pub(crate) players: Vec<Player>,
    pub(crate) current_category: Option<Category>,
    pub(crate) secret_word: String,
    pub(crate) current_player_index: usize,
    pub(crate) config: GameConfig,
    pub(crate) winner: Option<Winner>,
    /// Events recorded by command handling, pending dispatch.
    uncommitted_events: Vec<RoundEvent>,
}

/// Picks a uniformly random index into a non-empty sequence.
#[allow(clippy::cast_possible_truncation)]
fn pick_index(rng: &mut dyn DeterministicRng, len: usize) -> usize {
    rng.next_u32_range(0, (len - 1) as u32) as usize
}

impl Round {
    /// Creates a round in the Setup phase with the given default config.
    #[must_use]
    pub fn new(id: Uuid, config: GameConfig) -> Self {
        Self {
            id,
            version: 0,
            phase: Phase::Setup,
            players: Vec::new(),
            current_category: None,
            secret_word: String::new(),
            current_player_index: 0,
            config,
            winner: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// Returns the current version (event count).
    #[must_use]
    pub fn version(&self) -> i64 {
        self.version
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current config.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the number of players in the round.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    fn record(&mut self, kind: RoundEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        self.version += 1;
        self.uncommitted_events.push(RoundEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                aggregate_id: self.id,
                sequence_number: self.version,
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        });
    }

    /// Starts a round: assigns the secret word and impostor roles, builds
    /// the player list (first name is host), and enters the Reveal phase.
    ///
    /// `player_names` must already be trimmed and non-blank; the setup
    /// surface is responsible for collecting at least three of them.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if `impostor_count` is zero or is
    /// not strictly smaller than the player count (the assignment loop
    /// below would never terminate on that input), or if the category has
    /// no words to draw from. State is untouched on error.
    pub fn start_round(
        &mut self,
        player_names: &[String],
        category: &Category,
        config: GameConfig,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), GameError> {
        if config.impostor_count == 0 {
            return Err(GameError::Validation(
                "impostor count must be at least 1".to_owned(),
            ));
        }
        if config.impostor_count as usize >= player_names.len() {
            return Err(GameError::Validation(format!(
                "impostor count ({}) must be less than player count ({})",
                config.impostor_count,
                player_names.len()
            )));
        }
        if category.words.is_empty() {
            return Err(GameError::Validation(format!(
                "category {} has no words to draw from",
                category.id
            )));
        }

        let secret_word = category.words[pick_index(rng, category.words.len())].clone();

        let mut players: Vec<Player> = player_names
            .iter()
            .enumerate()
            .map(|(i, name)| Player {
                id: Uuid::new_v4(),
                name: name.clone(),
                is_impostor: false,
                is_host: i == 0,
                vote_count: 0,
            })
            .collect();

        // Rejection sampling: redraw on already-marked players so exactly
        // `impostor_count` distinct players end up impostors.
        let mut assigned: u32 = 0;
        while assigned < config.impostor_count {
            let idx = pick_index(rng, players.len());
            if !players[idx].is_impostor {
                players[idx].is_impostor = true;
                assigned += 1;
            }
        }

        self.phase = Phase::Reveal;
        self.players = players;
        self.current_category = Some(category.clone());
        self.secret_word = secret_word;
        self.current_player_index = 0;
        self.config = config;
        self.winner = None;

        self.record(
            RoundEventKind::RoundStarted {
                category_id: category.id.clone(),
                player_count: player_names.len(),
                impostor_count: config.impostor_count,
            },
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Moves the reveal turn to the next player, or opens discussion once
    /// the last player has seen their role. The only way out of Reveal;
    /// there is no going back.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if the round is not in Reveal.
    pub fn advance_reveal(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Reveal {
            return Err(GameError::Validation(
                "round must be in Reveal phase".to_owned(),
            ));
        }

        if self.current_player_index + 1 < self.players.len() {
            self.current_player_index += 1;
            self.record(
                RoundEventKind::RevealAdvanced {
                    current_player_index: self.current_player_index,
                },
                correlation_id,
                clock,
            );
        } else {
            self.phase = Phase::Discuss;
            self.record(
                RoundEventKind::DiscussionOpened {
                    time_limit_seconds: self.config.time_limit_seconds,
                },
                correlation_id,
                clock,
            );
        }
        Ok(())
    }

    /// Stops discussion and moves to the Vote phase. Unconditional: the
    /// host can call this at any point, with or without time left on the
    /// countdown.
    pub fn stop_discussion_for_vote(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        self.phase = Phase::Vote;
        self.record(RoundEventKind::VoteCalled, correlation_id, clock);
    }

    /// Records the winner and completes the round. Intended from Vote but
    /// tolerated from any started phase.
    pub fn end_round(&mut self, winner: Winner, correlation_id: Uuid, clock: &dyn Clock) {
        self.winner = Some(winner);
        self.phase = Phase::Result;
        self.record(RoundEventKind::RoundEnded { winner }, correlation_id, clock);
    }

    /// Clears players and winner and returns to Setup. Config and category
    /// are carried over as setup defaults.
    pub fn reset_to_setup(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        self.players.clear();
        self.winner = None;
        self.phase = Phase::Setup;
        self.record(RoundEventKind::RoundReset, correlation_id, clock);
    }
}
