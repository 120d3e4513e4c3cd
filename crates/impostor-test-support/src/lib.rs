//! Shared test mocks and utilities for the VocabImpostor game.

mod clock;
mod cues;
mod rng;

pub use clock::FixedClock;
pub use cues::RecordingCueSink;
pub use rng::{MockRng, SequenceRng};
