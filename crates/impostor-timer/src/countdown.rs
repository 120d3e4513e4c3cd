//! Pure countdown state machine.

/// What a single tick of the countdown produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is paused; nothing changed.
    Paused,
    /// One second elapsed; more than ten seconds remain.
    Tick(u32),
    /// One second elapsed within the final ten seconds (tick cue).
    FinalTick(u32),
    /// The countdown just reached zero (alarm cue). Produced exactly once.
    Expired,
    /// The countdown had already reached zero before this tick.
    Finished,
}

/// Discussion countdown: decrements once per unpaused tick from the
/// configured limit down to zero.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    remaining: u32,
    paused: bool,
}

impl Countdown {
    /// Creates a countdown starting at `time_limit_seconds`.
    #[must_use]
    pub fn new(time_limit_seconds: u32) -> Self {
        Self { remaining: time_limit_seconds, paused: false }
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is currently frozen.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freezes the countdown without resetting it.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes from the frozen value.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advances the countdown by one tick boundary.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }
        if self.remaining == 0 {
            return TickOutcome::Finished;
        }
        self.remaining -= 1;
        match self.remaining {
            0 => TickOutcome::Expired,
            r if r <= 10 => TickOutcome::FinalTick(r),
            r => TickOutcome::Tick(r),
        }
    }
}
