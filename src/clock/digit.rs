//! Split-flap tile state machine.
//!
//! A `FlipDigit` tracks two values at once: the settled `current` value and
//! the `previous` value still painted on parts of the tile while a flip is
//! in flight. The transition is driven by an elapsed-seconds timer embedded
//! in the phase, so despawning the component cancels the flip with it.

use bevy::prelude::*;

/// How long one flip takes, in seconds.
///
/// The fold animation derives its angles from the same constant; the timer
/// and the visible fold must stay numerically identical or the tile freezes
/// mid-fold / jumps at the end.
pub const FLIP_DURATION: f32 = 0.6;

/// Phase of a single tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipPhase {
    /// At rest; previous == current
    Settled,
    /// Mid-flip; the two transient fold layers are mounted
    Flipping { elapsed: f32 },
}

/// One two-digit split-flap tile
#[derive(Component, Debug, Clone)]
pub struct FlipDigit {
    current: i32,
    previous: i32,
    phase: FlipPhase,
}

impl FlipDigit {
    /// Create a settled tile showing `initial`
    pub fn new(initial: i32) -> Self {
        Self {
            current: initial,
            previous: initial,
            phase: FlipPhase::Settled,
        }
    }

    /// The value the tile is settling toward (or already shows)
    pub fn current(&self) -> i32 {
        self.current
    }

    /// The value being flipped away from; equals `current` when settled
    pub fn previous(&self) -> i32 {
        self.previous
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.phase, FlipPhase::Flipping { .. })
    }

    /// Fold progress in [0, 1] while flipping, `None` when settled
    pub fn flip_progress(&self) -> Option<f32> {
        match self.phase {
            FlipPhase::Settled => None,
            FlipPhase::Flipping { elapsed } => Some((elapsed / FLIP_DURATION).min(1.0)),
        }
    }

    /// Feed the externally supplied value. Starts a flip when it differs
    /// from `current`; returns whether a flip (re)started.
    ///
    /// A change arriving mid-flip restarts the transition from the
    /// mid-flight `current`: intermediate values are dropped so the tile
    /// always animates toward the latest truth.
    pub fn set_value(&mut self, value: i32) -> bool {
        if value == self.current {
            return false;
        }

        self.previous = self.current;
        self.current = value;
        self.phase = FlipPhase::Flipping { elapsed: 0.0 };
        true
    }

    /// Advance the flip timer. Returns true if the tile settled this tick.
    pub fn tick(&mut self, delta: f32) -> bool {
        match &mut self.phase {
            FlipPhase::Settled => false,
            FlipPhase::Flipping { elapsed } => {
                *elapsed += delta;
                if *elapsed >= FLIP_DURATION {
                    self.phase = FlipPhase::Settled;
                    self.previous = self.current;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Format a tile value as fixed-width two-digit decimal.
///
/// Values outside [0, 99] still render, just wider (no truncation); callers
/// that care about the fixed tile footprint keep their values in range.
pub fn format_tile(n: i32) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_settled_invariant(digit: &FlipDigit) {
        if !digit.is_flipping() {
            assert_eq!(digit.previous(), digit.current());
        }
    }

    #[test]
    fn test_new_tile_is_settled() {
        let digit = FlipDigit::new(5);
        assert_eq!(digit.current(), 5);
        assert_eq!(digit.previous(), 5);
        assert!(!digit.is_flipping());
        assert_eq!(digit.flip_progress(), None);
    }

    #[test]
    fn test_value_change_starts_flip() {
        let mut digit = FlipDigit::new(5);
        assert!(digit.set_value(6));

        assert!(digit.is_flipping());
        assert_eq!(digit.previous(), 5);
        assert_eq!(digit.current(), 6);
    }

    #[test]
    fn test_same_value_is_ignored() {
        let mut digit = FlipDigit::new(5);
        assert!(!digit.set_value(5));
        assert!(!digit.is_flipping());
        assert_settled_invariant(&digit);
    }

    #[test]
    fn test_flip_settles_after_duration() {
        let mut digit = FlipDigit::new(5);
        digit.set_value(6);

        // Partway through: still flipping, both values retained
        assert!(!digit.tick(FLIP_DURATION * 0.5));
        assert!(digit.is_flipping());
        assert_eq!(digit.previous(), 5);

        // Crossing the duration settles and collapses the pair
        assert!(digit.tick(FLIP_DURATION * 0.5));
        assert!(!digit.is_flipping());
        assert_eq!(digit.previous(), 6);
        assert_eq!(digit.current(), 6);
        assert_settled_invariant(&digit);
    }

    #[test]
    fn test_rapid_change_restarts_from_midflight_current() {
        let mut digit = FlipDigit::new(5);
        digit.set_value(6);
        digit.tick(0.1);

        // New value mid-flip: previous becomes the mid-flight current (6),
        // not the original pre-sequence value (5)
        digit.set_value(7);
        assert!(digit.is_flipping());
        assert_eq!(digit.previous(), 6);
        assert_eq!(digit.current(), 7);

        // The restarted flip runs its full duration
        assert!(!digit.tick(FLIP_DURATION - 0.05));
        assert!(digit.tick(0.05));
        assert_eq!(digit.previous(), 7);
    }

    #[test]
    fn test_flip_progress_is_clamped() {
        let mut digit = FlipDigit::new(0);
        digit.set_value(1);
        digit.tick(FLIP_DURATION * 0.25);
        let progress = digit.flip_progress().unwrap();
        assert!((progress - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_format_tile() {
        assert_eq!(format_tile(0), "00");
        assert_eq!(format_tile(9), "09");
        assert_eq!(format_tile(42), "42");
        assert_eq!(format_tile(100), "100");
    }
}
