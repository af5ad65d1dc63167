//! Simulated "tactical withdrawal" progress sequence.
//!
//! A repeating tick adds a bounded random amount to a 0..100 progress
//! counter. Hitting 100 is one-way: the ticking stops, a short hold leads
//! into the exit visual, and one navigation fires at the end. The whole
//! machine is a phase enum with embedded elapsed timers, so resetting or
//! dropping the state cancels everything with it.

use bevy::prelude::Resource;
use rand::Rng;

/// Seconds between progress ticks
pub const EXIT_TICK_INTERVAL: f32 = 0.15;

/// Upper bound (exclusive) of the random progress added per tick
pub const MAX_TICK_INCREMENT: f32 = 8.0;

/// Pause between hitting 100 and starting the exit visual
pub const EXIT_HOLD_DELAY: f32 = 0.4;

/// Length of the exit visual before navigation fires
pub const EXIT_FADE_DELAY: f32 = 0.6;

const TERMINAL_PROGRESS: f32 = 100.0;

/// Phase of the withdrawal sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitPhase {
    /// Waiting for the trigger
    Idle,
    /// Ticking progress upward; `until_tick` counts down to the next tick
    Loading { until_tick: f32 },
    /// Progress hit 100; holding before the exit visual starts
    Holding { elapsed: f32 },
    /// Exit visual running; navigation fires when it completes
    Exiting { elapsed: f32 },
    /// Navigation has fired; the sequence is spent
    Done,
}

/// Something the caller must react to after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTick {
    None,
    /// The exit visual just started
    ExitStarted,
    /// Perform the navigation side effect (emitted exactly once)
    Navigate,
}

#[derive(Debug, Clone, Resource)]
pub struct ExitSequence {
    progress: f32,
    phase: ExitPhase,
}

impl Default for ExitSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitSequence {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: ExitPhase::Idle,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> ExitPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ExitPhase::Loading { .. })
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, ExitPhase::Exiting { .. })
    }

    /// Begin the withdrawal. A no-op unless the sequence is idle, so
    /// re-triggering while it runs never spawns a second cycle.
    /// Returns whether the sequence actually started.
    pub fn begin(&mut self) -> bool {
        if self.phase != ExitPhase::Idle {
            return false;
        }
        self.phase = ExitPhase::Loading {
            until_tick: EXIT_TICK_INTERVAL,
        };
        true
    }

    /// Advance the sequence by `delta` seconds.
    ///
    /// Progress is monotonically non-decreasing while loading and is
    /// clamped to land on exactly 100. `ExitTick::Navigate` is returned at
    /// most once over the life of the sequence.
    pub fn tick(&mut self, delta: f32, rng: &mut impl Rng) -> ExitTick {
        match &mut self.phase {
            ExitPhase::Idle | ExitPhase::Done => ExitTick::None,
            ExitPhase::Loading { until_tick } => {
                *until_tick -= delta;
                // A long frame can cover several tick intervals
                while *until_tick <= 0.0 && self.progress < TERMINAL_PROGRESS {
                    *until_tick += EXIT_TICK_INTERVAL;
                    self.progress = (self.progress
                        + rng.random_range(0.0..MAX_TICK_INCREMENT))
                    .min(TERMINAL_PROGRESS);
                }
                if self.progress >= TERMINAL_PROGRESS {
                    self.progress = TERMINAL_PROGRESS;
                    self.phase = ExitPhase::Holding { elapsed: 0.0 };
                }
                ExitTick::None
            }
            ExitPhase::Holding { elapsed } => {
                *elapsed += delta;
                if *elapsed >= EXIT_HOLD_DELAY {
                    self.phase = ExitPhase::Exiting { elapsed: 0.0 };
                    ExitTick::ExitStarted
                } else {
                    ExitTick::None
                }
            }
            ExitPhase::Exiting { elapsed } => {
                *elapsed += delta;
                if *elapsed >= EXIT_FADE_DELAY {
                    self.phase = ExitPhase::Done;
                    ExitTick::Navigate
                } else {
                    ExitTick::None
                }
            }
        }
    }
}

/// Status label for a progress value.
///
/// Brackets are exhaustive and non-overlapping across [0, 100]; each lower
/// bound is inclusive.
pub fn status_label(progress: f32) -> &'static str {
    if progress < 30.0 {
        "INITIATING WITHDRAWAL"
    } else if progress < 60.0 {
        "SCRUBBING LOGS"
    } else if progress < 90.0 {
        "ENCRYPTING STREAMS"
    } else {
        "EXTRACTION COMPLETE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Drive the sequence to completion, returning navigation count
    fn run_to_done(seq: &mut ExitSequence, rng: &mut StdRng) -> usize {
        let mut navigations = 0;
        // Generous frame budget; the sequence finishes long before this
        for _ in 0..10_000 {
            if seq.tick(0.016, rng) == ExitTick::Navigate {
                navigations += 1;
            }
            if seq.phase() == ExitPhase::Done {
                break;
            }
        }
        navigations
    }

    #[test]
    fn test_idle_until_triggered() {
        let mut seq = ExitSequence::new();
        assert_eq!(seq.tick(1.0, &mut rng()), ExitTick::None);
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.phase(), ExitPhase::Idle);
    }

    #[test]
    fn test_begin_is_idempotent_while_running() {
        let mut seq = ExitSequence::new();
        assert!(seq.begin());
        assert!(!seq.begin());
        assert!(seq.is_loading());

        // A second trigger mid-run must not reset progress
        seq.tick(EXIT_TICK_INTERVAL, &mut rng());
        let progress = seq.progress();
        assert!(!seq.begin());
        assert_eq!(seq.progress(), progress);
    }

    #[test]
    fn test_progress_is_monotonic_and_caps_at_100() {
        let mut seq = ExitSequence::new();
        let mut rng = rng();
        seq.begin();

        let mut last = 0.0;
        for _ in 0..10_000 {
            seq.tick(0.016, &mut rng);
            assert!(seq.progress() >= last, "progress went backwards");
            assert!(seq.progress() <= 100.0, "progress overshot 100");
            last = seq.progress();
            if !seq.is_loading() {
                break;
            }
        }
        assert_eq!(seq.progress(), 100.0);
    }

    #[test]
    fn test_navigation_fires_exactly_once() {
        let mut seq = ExitSequence::new();
        let mut rng = rng();
        seq.begin();

        let navigations = run_to_done(&mut seq, &mut rng);
        assert_eq!(navigations, 1);

        // Once done, further ticks and triggers are inert
        assert_eq!(seq.tick(10.0, &mut rng), ExitTick::None);
        assert!(!seq.begin());
    }

    #[test]
    fn test_double_trigger_yields_single_navigation() {
        let mut seq = ExitSequence::new();
        let mut rng = rng();
        seq.begin();
        seq.begin();

        assert_eq!(run_to_done(&mut seq, &mut rng), 1);
    }

    #[test]
    fn test_exit_starts_after_hold_delay() {
        let mut seq = ExitSequence::new();
        let mut rng = rng();
        seq.begin();

        while seq.is_loading() {
            seq.tick(EXIT_TICK_INTERVAL, &mut rng);
        }
        assert!(matches!(seq.phase(), ExitPhase::Holding { .. }));
        assert!(!seq.is_exiting());

        assert_eq!(seq.tick(EXIT_HOLD_DELAY, &mut rng), ExitTick::ExitStarted);
        assert!(seq.is_exiting());

        assert_eq!(seq.tick(EXIT_FADE_DELAY, &mut rng), ExitTick::Navigate);
        assert_eq!(seq.phase(), ExitPhase::Done);
    }

    #[test]
    fn test_large_frame_covers_multiple_tick_intervals() {
        let mut seq = ExitSequence::new();
        let mut rng = rng();
        seq.begin();

        // One 3s frame spans 20 tick intervals; progress must advance
        // accordingly but still never overshoot
        seq.tick(3.0, &mut rng);
        assert!(seq.progress() > 0.0);
        assert!(seq.progress() <= 100.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(0.0), "INITIATING WITHDRAWAL");
        assert_eq!(status_label(29.9), "INITIATING WITHDRAWAL");
        assert_eq!(status_label(30.0), "SCRUBBING LOGS");
        assert_eq!(status_label(45.0), "SCRUBBING LOGS");
        assert_eq!(status_label(60.0), "ENCRYPTING STREAMS");
        assert_eq!(status_label(89.9), "ENCRYPTING STREAMS");
        assert_eq!(status_label(90.0), "EXTRACTION COMPLETE");
        assert_eq!(status_label(95.0), "EXTRACTION COMPLETE");
        assert_eq!(status_label(100.0), "EXTRACTION COMPLETE");
    }
}
