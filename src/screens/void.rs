//! Void ("sector null") screen: reached for any destination not on the
//! grid. Reports the offending coordinates through the diagnostic log and
//! hosts the tactical-withdrawal sequence back to the home screen.

use bevy::prelude::*;

use crate::camera::PromoCamera;
use crate::config::PromoConfig;
use crate::exit::{ProgressReadout, StatusReadout};

use super::{RequestedRoute, SCREEN_FONT_SIZE, Screen, ScreenRoot, text_transform};

const EDGE_PADDING: f32 = 0.05;

const GOLD: Color = Color::srgb(0.92, 0.75, 0.25);
const BLOOD: Color = Color::srgb(0.86, 0.18, 0.18);
const MUTED: Color = Color::srgb(0.62, 0.62, 0.58);

pub fn spawn_void(
    mut commands: Commands,
    promo_camera: Res<PromoCamera>,
    config: Res<PromoConfig>,
    route: Res<RequestedRoute>,
) {
    let destination = route.0.clone().unwrap_or_else(|| "void".to_string());

    // Write-only diagnostic side channel; nothing consumes this
    error!("404: attempted to access non-existent destination: {destination}");

    let bounds = promo_camera.bounds.clone();
    let mut text = |commands: &mut Commands,
                    content: &str,
                    position: Vec2,
                    height: f32,
                    color: Color,
                    marker: Option<VoidReadoutMarker>| {
        let mut entity = commands.spawn((
            Text2d::new(content),
            TextFont {
                font_size: SCREEN_FONT_SIZE,
                ..default()
            },
            TextColor(color),
            text_transform(position, 0.0, height),
            ScreenRoot(Screen::Void),
        ));
        match marker {
            Some(VoidReadoutMarker::Progress) => {
                entity.insert(ProgressReadout);
            }
            Some(VoidReadoutMarker::Status) => {
                entity.insert(StatusReadout);
            }
            None => {}
        }
    };

    text(
        &mut commands,
        "404",
        bounds.position_with_padding(0.5, 0.88, EDGE_PADDING),
        1.4,
        GOLD,
        None,
    );
    text(
        &mut commands,
        "SECTOR NULL // ACCESS DENIED",
        bounds.position_with_padding(0.5, 0.72, EDGE_PADDING),
        0.38,
        GOLD,
        None,
    );
    text(
        &mut commands,
        "// PROTOCOL VIOLATION DETECTED //",
        bounds.position_with_padding(0.5, 0.65, EDGE_PADDING),
        0.24,
        BLOOD,
        None,
    );
    text(
        &mut commands,
        &format!("OPERATIVE: coordinates '{destination}' match no sanctioned objective"),
        bounds.position_with_padding(0.5, 0.56, EDGE_PADDING),
        0.22,
        MUTED,
        None,
    );

    // Withdrawal readout, driven by the exit plugin once triggered
    text(
        &mut commands,
        "",
        bounds.position_with_padding(0.5, 0.40, EDGE_PADDING),
        0.5,
        GOLD,
        Some(VoidReadoutMarker::Progress),
    );
    text(
        &mut commands,
        "",
        bounds.position_with_padding(0.5, 0.32, EDGE_PADDING),
        0.24,
        MUTED,
        Some(VoidReadoutMarker::Status),
    );

    text(
        &mut commands,
        &config.withdraw_hint,
        bounds.position_with_padding(0.5, 0.14, EDGE_PADDING),
        0.24,
        BLOOD,
        None,
    );
}

enum VoidReadoutMarker {
    Progress,
    Status,
}
