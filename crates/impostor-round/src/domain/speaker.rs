//! Discussion speaker rotation.
//!
//! Ephemeral discussion-surface state: a pointer that cycles through the
//! player list. Pure rotation — no effect on round state, roles, or the
//! secret word.

/// Active-speaker pointer over an ordered player list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerRotation {
    active: usize,
    len: usize,
}

impl SpeakerRotation {
    /// Creates a rotation over `len` players, starting at the first.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; discussion never opens without players.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "speaker rotation requires at least one player");
        Self { active: 0, len }
    }

    /// Index of the player currently speaking.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Advances to the next speaker, wrapping from last to first, and
    /// returns the new active index.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }
}
