//! Launch countdown that owns the flip tiles.
//!
//! The countdown is a plain remaining-seconds accumulator decomposed into
//! day/hour/minute/second tile values. Each tile entity carries a
//! `CountdownSlot` tag; a system pushes its slot value into the tile's
//! `FlipDigit` every frame and the tile animates any change on its own.

use bevy::prelude::*;

use super::digit::FlipDigit;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Resource: seconds remaining until the advertised launch
#[derive(Resource, Debug)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining
    }

    /// Decompose the remaining time into tile values.
    ///
    /// Hours, minutes and seconds stay within [0, 59/23]; days can exceed
    /// 99 for far-off launch dates and then render wider than one tile.
    pub fn tiles(&self) -> TileValues {
        let total = self.remaining.max(0.0) as u64;

        TileValues {
            days: (total / SECS_PER_DAY) as i32,
            hours: ((total % SECS_PER_DAY) / SECS_PER_HOUR) as i32,
            minutes: ((total % SECS_PER_HOUR) / SECS_PER_MINUTE) as i32,
            seconds: (total % SECS_PER_MINUTE) as i32,
        }
    }
}

/// Snapshot of the four tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileValues {
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl TileValues {
    pub fn for_slot(&self, slot: CountdownSlot) -> i32 {
        match slot {
            CountdownSlot::Days => self.days,
            CountdownSlot::Hours => self.hours,
            CountdownSlot::Minutes => self.minutes,
            CountdownSlot::Seconds => self.seconds,
        }
    }
}

/// Tag: which countdown field a tile displays
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownSlot {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownSlot {
    pub const ALL: [CountdownSlot; 4] = [
        CountdownSlot::Days,
        CountdownSlot::Hours,
        CountdownSlot::Minutes,
        CountdownSlot::Seconds,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CountdownSlot::Days => "DAYS",
            CountdownSlot::Hours => "HOURS",
            CountdownSlot::Minutes => "MINUTES",
            CountdownSlot::Seconds => "SECONDS",
        }
    }
}

/// System: Advance the countdown clock
pub fn update_countdown(time: Res<Time>, mut countdown: ResMut<Countdown>) {
    countdown.tick(time.delta_secs());
}

/// System: Feed the current slot values into the flip tiles
pub fn apply_countdown_to_tiles(
    countdown: Res<Countdown>,
    mut tiles: Query<(&CountdownSlot, &mut FlipDigit)>,
) {
    let values = countdown.tiles();
    for (slot, mut digit) in &mut tiles {
        digit.set_value(values.for_slot(*slot));
    }
}
