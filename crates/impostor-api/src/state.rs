//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use impostor_content::CategoryCatalog;
use impostor_core::clock::Clock;
use impostor_core::cue::CueSink;
use impostor_core::error::GameError;
use impostor_core::rng::DeterministicRng;
use impostor_round::domain::aggregates::Round;
use impostor_round::domain::speaker::SpeakerRotation;
use impostor_timer::DiscussionTimer;
use impostor_vocab::VocabularyGenerator;

/// Ephemeral state of the Discuss phase.
///
/// Exists only while the round is in Discuss; dropping it aborts the
/// countdown task.
#[derive(Debug)]
pub struct DiscussionSession {
    /// Countdown for the discussion; `None` when the time limit is zero.
    pub timer: Option<DiscussionTimer>,
    /// Whose turn it is to speak.
    pub speaker: SpeakerRotation,
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single round aggregate this server facilitates.
    pub round: Arc<Mutex<Round>>,
    /// Built-in plus generated categories.
    pub catalog: Arc<Mutex<CategoryCatalog>>,
    /// Clock for event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Randomness source for word and impostor assignment.
    pub rng: Arc<Mutex<dyn DeterministicRng>>,
    /// Audio cue sink; fire-and-forget.
    pub cues: Arc<dyn CueSink>,
    /// AI vocabulary generator.
    pub generator: Arc<dyn VocabularyGenerator>,
    /// Discussion session, present only during the Discuss phase.
    pub discussion: Arc<Mutex<Option<DiscussionSession>>>,
}

fn lock<'a, T: ?Sized>(
    mutex: &'a Mutex<T>,
    what: &str,
) -> Result<MutexGuard<'a, T>, GameError> {
    mutex
        .lock()
        .map_err(|e| GameError::Infrastructure(format!("{what} mutex poisoned: {e}")))
}

impl AppState {
    /// Create new application state with no discussion in progress.
    #[must_use]
    pub fn new(
        round: Round,
        catalog: CategoryCatalog,
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn DeterministicRng>>,
        cues: Arc<dyn CueSink>,
        generator: Arc<dyn VocabularyGenerator>,
    ) -> Self {
        Self {
            round: Arc::new(Mutex::new(round)),
            catalog: Arc::new(Mutex::new(catalog)),
            clock,
            rng,
            cues,
            generator,
            discussion: Arc::new(Mutex::new(None)),
        }
    }

    /// Locks the round aggregate.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Infrastructure` if the lock is poisoned.
    pub fn round(&self) -> Result<MutexGuard<'_, Round>, GameError> {
        lock(&self.round, "round")
    }

    /// Locks the category catalog.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Infrastructure` if the lock is poisoned.
    pub fn catalog(&self) -> Result<MutexGuard<'_, CategoryCatalog>, GameError> {
        lock(&self.catalog, "catalog")
    }

    /// Locks the discussion session slot.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Infrastructure` if the lock is poisoned.
    pub fn discussion(&self) -> Result<MutexGuard<'_, Option<DiscussionSession>>, GameError> {
        lock(&self.discussion, "discussion")
    }
}
