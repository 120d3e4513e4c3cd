//! VocabImpostor — discussion countdown timer.
//!
//! The countdown itself is a pure per-tick state machine
//! ([`Countdown`]); a thin tokio task ([`DiscussionTimer`]) drives it
//! once per second and forwards tick/alarm cues. Pausing is a flag
//! checked at each tick boundary — the driving task is never torn down
//! and rebuilt on a pause toggle.

mod countdown;
mod task;

pub use countdown::{Countdown, TickOutcome};
pub use task::DiscussionTimer;
