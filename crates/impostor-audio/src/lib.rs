//! VocabImpostor — fire-and-forget audio cue dispatch.
//!
//! The game does not synthesize sound; a front end does. This crate
//! decouples the two: game logic fires [`Cue`]s into a [`CueChannel`]
//! (non-blocking, never fails the caller) and the front end consumes the
//! receiving end. The server binary attaches a logging consumer so cues
//! are observable even with no synthesizer attached.

use impostor_core::cue::{Cue, CueSink};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Sending half of the cue pipeline.
///
/// `fire` is non-blocking and best-effort: if the consumer is gone the
/// cue is dropped and the game never notices.
#[derive(Debug, Clone)]
pub struct CueChannel {
    tx: UnboundedSender<Cue>,
}

impl CueChannel {
    /// Creates the cue pipeline, returning the sink half and the stream
    /// of cues for a front end to consume.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<Cue>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl CueSink for CueChannel {
    fn fire(&self, cue: Cue) {
        if self.tx.send(cue).is_err() {
            // No consumer attached; audio is best-effort by contract.
            debug!(?cue, "cue dropped: no consumer attached");
        }
    }
}

/// Spawns a consumer that logs each cue as it arrives. Stands in for a
/// synthesizer front end; exits when the sending half is dropped.
pub fn spawn_cue_logger(mut rx: UnboundedReceiver<Cue>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(cue) = rx.recv().await {
            info!(?cue, "audio cue");
        }
    })
}
