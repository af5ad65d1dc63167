use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActivateInput>()
            .add_systems(Update, collect_activate_inputs);
    }
}

/// A unified "activate" action from keyboard, mouse, or touch
#[derive(Message, Debug, Clone, Copy)]
pub struct ActivateInput {
    pub source: ActivateSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateSource {
    Key,
    Mouse,
    Touch,
}

fn collect_activate_inputs(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<ActivateInput>,
) {
    if keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Space) {
        out.write(ActivateInput {
            source: ActivateSource::Key,
        });
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        out.write(ActivateInput {
            source: ActivateSource::Mouse,
        });
    }

    for touch in touch_events.read() {
        if touch.phase == TouchPhase::Started {
            out.write(ActivateInput {
                source: ActivateSource::Touch,
            });
        }
    }
}
