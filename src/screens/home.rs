//! Home promo screen: hero copy, the launch-countdown clock row, and the
//! footer hint. The clock tiles are plain entities tagged with their
//! countdown slot; the clock plugin keeps their values and layers current.

use bevy::prelude::*;

use crate::camera::PromoCamera;
use crate::clock::{Countdown, CountdownSlot, FlipDigit, TILE_HEIGHT, TILE_WIDTH};
use crate::config::PromoConfig;

use super::{SCREEN_FONT_SIZE, Screen, ScreenRoot, text_transform};

const TILE_GAP: f32 = 0.5;
const EDGE_PADDING: f32 = 0.05;

const GOLD: Color = Color::srgb(0.92, 0.75, 0.25);
const MUTED: Color = Color::srgb(0.62, 0.62, 0.58);
const TILE_FACE: Color = Color::srgb(0.10, 0.10, 0.12);

pub fn spawn_home(
    mut commands: Commands,
    promo_camera: Res<PromoCamera>,
    config: Res<PromoConfig>,
    countdown: Res<Countdown>,
) {
    info!("🎖️ Deploying home screen");

    let bounds = promo_camera.bounds.clone();
    let mut text = |commands: &mut Commands,
                    content: &str,
                    position: Vec2,
                    height: f32,
                    color: Color| {
        commands.spawn((
            Text2d::new(content),
            TextFont {
                font_size: SCREEN_FONT_SIZE,
                ..default()
            },
            TextColor(color),
            text_transform(position, 0.0, height),
            ScreenRoot(Screen::Home),
        ));
    };

    // Hero
    text(
        &mut commands,
        &config.title,
        bounds.position_with_padding(0.5, 0.92, EDGE_PADDING),
        1.1,
        GOLD,
    );
    text(
        &mut commands,
        &config.tagline,
        bounds.position_with_padding(0.5, 0.78, EDGE_PADDING),
        0.3,
        MUTED,
    );
    text(
        &mut commands,
        "LAUNCH IN",
        bounds.position_with_padding(0.5, 0.64, EDGE_PADDING),
        0.25,
        MUTED,
    );

    // Clock row, centered
    let row_center = bounds.position_with_padding(0.5, 0.48, EDGE_PADDING);
    let row_width = 4.0 * TILE_WIDTH + 3.0 * TILE_GAP;
    let values = countdown.tiles();

    for (i, slot) in CountdownSlot::ALL.into_iter().enumerate() {
        let x = row_center.x - row_width * 0.5 + TILE_WIDTH * 0.5 + i as f32 * (TILE_WIDTH + TILE_GAP);

        commands
            .spawn((
                FlipDigit::new(values.for_slot(slot)),
                slot,
                Transform::from_xyz(x, row_center.y, 0.0),
                Visibility::default(),
                ScreenRoot(Screen::Home),
            ))
            .with_children(|tile| {
                // Tile face behind the digit layers
                tile.spawn((
                    Sprite::from_color(TILE_FACE, Vec2::new(TILE_WIDTH, TILE_HEIGHT)),
                    Transform::from_xyz(0.0, 0.0, -0.1),
                ));
            });

        text(
            &mut commands,
            slot.label(),
            Vec2::new(x, row_center.y - TILE_HEIGHT * 0.75),
            0.2,
            MUTED,
        );
    }

    // Footer
    text(
        &mut commands,
        "ENLISTMENT OPENS WHEN THE CLOCK RUNS OUT",
        bounds.position_with_padding(0.5, 0.08, EDGE_PADDING),
        0.22,
        MUTED,
    );
}
