//! Test cue sink — records every fired cue for assertions.

use std::sync::Mutex;

use impostor_core::cue::{Cue, CueSink};

/// A cue sink that records every cue it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingCueSink {
    fired: Mutex<Vec<Cue>>,
}

impl RecordingCueSink {
    /// Returns a snapshot of the cues fired so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fired(&self) -> Vec<Cue> {
        self.fired.lock().unwrap().clone()
    }
}

impl CueSink for RecordingCueSink {
    fn fire(&self, cue: Cue) {
        self.fired.lock().unwrap().push(cue);
    }
}
