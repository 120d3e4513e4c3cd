//! Tokio driver for the discussion countdown.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use impostor_core::cue::{Cue, CueSink};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::countdown::{Countdown, TickOutcome};

/// Handle to a running discussion countdown.
///
/// The countdown runs on a spawned task firing once per second. Dropping
/// the handle aborts the task, so a round that leaves the Discuss phase
/// can never leak a tick into a later phase.
#[derive(Debug)]
pub struct DiscussionTimer {
    countdown: Arc<Mutex<Countdown>>,
    task: JoinHandle<()>,
}

impl DiscussionTimer {
    /// Spawns the countdown for the given limit, forwarding tick and
    /// alarm cues to `cues`. Returns `None` when `time_limit_seconds` is
    /// zero — "no limit" discussions have no countdown at all.
    #[must_use]
    pub fn start(time_limit_seconds: u32, cues: Arc<dyn CueSink>) -> Option<Self> {
        if time_limit_seconds == 0 {
            debug!("discussion has no time limit; countdown not started");
            return None;
        }
        let countdown = Arc::new(Mutex::new(Countdown::new(time_limit_seconds)));
        let task = tokio::spawn(run(Arc::clone(&countdown), cues));
        debug!(time_limit_seconds, "discussion countdown started");
        Some(Self { countdown, task })
    }

    fn lock(&self) -> MutexGuard<'_, Countdown> {
        // A panicked tick cannot leave the countdown half-updated, so a
        // poisoned lock is safe to recover.
        match self.countdown.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Freezes the countdown without resetting it.
    pub fn pause(&self) {
        self.lock().pause();
    }

    /// Resumes the countdown from the frozen value.
    pub fn resume(&self) {
        self.lock().resume();
    }

    /// Whether the countdown is currently paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.lock().is_paused()
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.lock().remaining()
    }

    /// Whether the countdown task has run to expiry or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels the countdown task.
    pub fn cancel(&self) {
        self.task.abort();
        debug!("discussion countdown cancelled");
    }
}

impl Drop for DiscussionTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(countdown: Arc<Mutex<Countdown>>, cues: Arc<dyn CueSink>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the countdown starts one
    // second after spawn.
    interval.tick().await;

    loop {
        interval.tick().await;
        // Pause is checked at the tick boundary inside `Countdown::tick`.
        let outcome = {
            let mut guard = match countdown.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.tick()
        };
        match outcome {
            TickOutcome::Paused | TickOutcome::Tick(_) => {}
            TickOutcome::FinalTick(_) => cues.fire(Cue::Tick),
            TickOutcome::Expired => {
                cues.fire(Cue::Alarm);
                break;
            }
            TickOutcome::Finished => break,
        }
    }
}
