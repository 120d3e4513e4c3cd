//! Audio cue seam.
//!
//! The game never synthesizes sound itself; it names a cue and hands it
//! to a sink. Sinks are best-effort and non-blocking — a dropped or
//! failed cue must never affect game state.

use serde::{Deserialize, Serialize};

/// Named audio cues the game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "cue")]
pub enum Cue {
    /// Minor navigation (e.g. passing the turn to the next speaker).
    SoftClick,
    /// Primary action confirmation.
    Click,
    /// A role card was shown to a player.
    Reveal,
    /// Countdown tick during the final ten seconds.
    Tick,
    /// Time is up, or the host forced the vote.
    Alarm,
    /// Round-end fanfare, voiced differently per winning side.
    Fanfare {
        /// Whether the citizens won (the impostor won otherwise).
        citizens: bool,
    },
}

/// Fire-and-forget sink for audio cues.
pub trait CueSink: Send + Sync {
    /// Requests a cue. Must not block; failures are swallowed by the sink.
    fn fire(&self, cue: Cue);
}

/// A sink that discards every cue. Useful when no front end is attached.
#[derive(Debug, Clone, Copy)]
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn fire(&self, _cue: Cue) {}
}
