//! Launch-countdown clock built from split-flap tiles.
//!
//! - **Tile state machine** (`digit.rs`): `FlipDigit` with an embedded
//!   flip timer and the restart-on-rapid-change policy
//! - **Layer composition** (`layers.rs`): the four-layer split-flap
//!   illusion and the system that mirrors it into child entities
//! - **Countdown** (`countdown.rs`): remaining-time decomposition feeding
//!   the tiles

pub mod countdown;
pub mod digit;
pub mod layers;

pub use countdown::{Countdown, CountdownSlot};
pub use digit::{FLIP_DURATION, FlipDigit, FlipPhase, format_tile};
pub use layers::{LayerKind, TILE_HEIGHT, TILE_WIDTH, compose_layers};

use bevy::prelude::*;

use countdown::{apply_countdown_to_tiles, update_countdown};
use layers::sync_tile_layers;

/// Drives the countdown tiles. Expects the `Countdown` resource to exist
/// before the app runs; the initial screen reads it during the startup
/// state transition, which fires ahead of any Startup system.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, report_countdown).add_systems(
            Update,
            (
                update_countdown,
                tick_flip_digits,
                // Apply after ticking so a change starting this frame gets
                // its full flip duration
                apply_countdown_to_tiles,
                sync_tile_layers,
            )
                .chain(),
        );
    }
}

fn report_countdown(countdown: Res<Countdown>) {
    info!(
        "⏱️ Countdown armed: {:.0}s until launch",
        countdown.remaining_secs()
    );
}

/// System: Advance every tile's flip timer
pub fn tick_flip_digits(time: Res<Time>, mut tiles: Query<&mut FlipDigit>) {
    let dt = time.delta_secs();
    for mut digit in &mut tiles {
        digit.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The tile's flip timer lives inside the component, so despawning the
    // tile mid-flip must leave nothing behind to fire later.
    #[test]
    fn test_despawn_mid_flip_is_inert() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, tick_flip_digits);

        let tile = app.world_mut().spawn(FlipDigit::new(5)).id();
        app.world_mut()
            .get_mut::<FlipDigit>(tile)
            .unwrap()
            .set_value(6);
        app.update();

        assert!(app.world().get::<FlipDigit>(tile).unwrap().is_flipping());

        app.world_mut().entity_mut(tile).despawn();

        // Further frames run against a world without the tile; the tick
        // system must simply see an empty query
        app.update();
        app.update();

        assert!(app.world().get::<FlipDigit>(tile).is_none());
    }
}
