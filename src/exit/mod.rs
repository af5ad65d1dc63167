//! Tactical-withdrawal controller for the void screen.
//!
//! Wires the pure `ExitSequence` machine (`sequence.rs`) to input, the
//! frame clock, the on-screen readout, and the navigation back to the home
//! screen. The sequence resource is reset on every void-screen entry, so a
//! stale run can never leak into the next visit.

pub mod sequence;

pub use sequence::{
    EXIT_FADE_DELAY, EXIT_HOLD_DELAY, EXIT_TICK_INTERVAL, ExitPhase, ExitSequence, ExitTick,
    MAX_TICK_INCREMENT, status_label,
};

use bevy::prelude::*;

use crate::input::ActivateInput;
use crate::screens::Screen;

pub struct ExitPlugin;

impl Plugin for ExitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExitSequence>()
            .add_systems(OnEnter(Screen::Void), reset_sequence)
            .add_systems(
                Update,
                (handle_withdrawal_trigger, tick_sequence, update_readout)
                    .chain()
                    .run_if(in_state(Screen::Void)),
            );
    }
}

/// Marker: text element showing the progress percentage
#[derive(Component)]
pub struct ProgressReadout;

/// Marker: text element showing the status label
#[derive(Component)]
pub struct StatusReadout;

fn reset_sequence(mut sequence: ResMut<ExitSequence>) {
    *sequence = ExitSequence::new();
}

/// System: Start the sequence on user input; re-triggers are no-ops
fn handle_withdrawal_trigger(
    mut inputs: MessageReader<ActivateInput>,
    mut sequence: ResMut<ExitSequence>,
) {
    for input in inputs.read() {
        if sequence.begin() {
            info!("🫡 Tactical withdrawal initiated via {:?}", input.source);
        }
    }
}

/// System: Advance the sequence and fire navigation when it completes
fn tick_sequence(
    time: Res<Time>,
    mut sequence: ResMut<ExitSequence>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let mut rng = rand::rng();
    match sequence.tick(time.delta_secs(), &mut rng) {
        ExitTick::None => {}
        ExitTick::ExitStarted => info!("🚪 Extraction visual engaged"),
        ExitTick::Navigate => {
            info!("🏠 Withdrawal complete, returning to the main grid");
            next_screen.set(Screen::Home);
        }
    }
}

/// System: Mirror sequence state into the void screen's readout text
fn update_readout(
    sequence: Res<ExitSequence>,
    mut progress_texts: Query<&mut Text2d, (With<ProgressReadout>, Without<StatusReadout>)>,
    mut status_texts: Query<&mut Text2d, (With<StatusReadout>, Without<ProgressReadout>)>,
) {
    let (progress_line, status_line) = match sequence.phase() {
        ExitPhase::Idle => (String::new(), String::new()),
        _ => (
            format!("{:>3.0}%", sequence.progress()),
            status_label(sequence.progress()).to_string(),
        ),
    };

    for mut text in &mut progress_texts {
        if text.0 != progress_line {
            text.0 = progress_line.clone();
        }
    }
    for mut text in &mut status_texts {
        if text.0 != status_line {
            text.0 = status_line.clone();
        }
    }
}
