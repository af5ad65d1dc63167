//! Four-layer split-flap composition.
//!
//! A tile at rest paints two static halves. Mid-flip, two transient fold
//! layers are mounted on top: the old value's top half folds down and away
//! while the new value's bottom half folds down into place. The transient
//! layers exist only while the tile is flipping; their entry and exit is
//! driven purely by the tile's phase, never by a second timer.

use bevy::prelude::*;

use super::digit::{FlipDigit, format_tile};

/// Tile footprint in world units
pub const TILE_WIDTH: f32 = 1.4;
pub const TILE_HEIGHT: f32 = 1.6;

/// Vertical offset of each half-layer from the tile center
const HALF_OFFSET: f32 = TILE_HEIGHT * 0.25;

/// Rasterization size for tile glyphs; the transform scales them into world units
const TILE_FONT_SIZE: f32 = 64.0;
const TILE_TEXT_HEIGHT: f32 = 0.8;

/// Which slice of the split-flap illusion a layer paints
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// End-state top half, revealed once the flip completes
    StaticTop,
    /// Start-state bottom half, covered once the flip completes
    StaticBottom,
    /// Old value's top half, folding from flat to a 90-degree recede
    FlipTop,
    /// New value's bottom half, folding from a 90-degree recede to flat
    FlipBottom,
}

impl LayerKind {
    /// Transient layers are mounted only while the tile is flipping
    pub fn is_transient(self) -> bool {
        matches!(self, LayerKind::FlipTop | LayerKind::FlipBottom)
    }
}

/// One layer of a tile's current composition
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub kind: LayerKind,
    pub text: String,
    /// Fold angle around the tile's horizontal hinge, in degrees
    pub fold_degrees: f32,
}

/// Compose the layer set for a tile's current state.
///
/// Settled tiles render the two static halves; flipping tiles additionally
/// render the two fold layers, angled by the flip progress.
pub fn compose_layers(digit: &FlipDigit) -> Vec<TileLayer> {
    let mut layers = vec![
        TileLayer {
            kind: LayerKind::StaticTop,
            text: format_tile(digit.current()),
            fold_degrees: 0.0,
        },
        TileLayer {
            kind: LayerKind::StaticBottom,
            text: format_tile(digit.previous()),
            fold_degrees: 0.0,
        },
    ];

    if let Some(progress) = digit.flip_progress() {
        layers.push(TileLayer {
            kind: LayerKind::FlipTop,
            text: format_tile(digit.previous()),
            fold_degrees: -90.0 * progress,
        });
        layers.push(TileLayer {
            kind: LayerKind::FlipBottom,
            text: format_tile(digit.current()),
            fold_degrees: 90.0 * (1.0 - progress),
        });
    }

    layers
}

/// World transform for a layer within its tile
fn layer_transform(layer: &TileLayer) -> Transform {
    let (y, z) = match layer.kind {
        LayerKind::StaticTop => (HALF_OFFSET, 0.0),
        LayerKind::StaticBottom => (-HALF_OFFSET, 0.0),
        // Fold layers sit above the statics they cover
        LayerKind::FlipTop => (HALF_OFFSET, 0.1),
        LayerKind::FlipBottom => (-HALF_OFFSET, 0.1),
    };

    let text_scale = TILE_TEXT_HEIGHT / TILE_FONT_SIZE;

    Transform {
        translation: Vec3::new(0.0, y, z),
        rotation: Quat::from_rotation_x(layer.fold_degrees.to_radians()),
        scale: Vec3::splat(text_scale),
    }
}

/// System: Keep each tile's child layer entities in sync with its state
///
/// Static layers are spawned once and updated in place; transient fold
/// layers are spawned when a flip starts and despawned when it settles.
pub fn sync_tile_layers(
    mut commands: Commands,
    digits: Query<(Entity, &FlipDigit, Option<&Children>)>,
    mut layer_query: Query<(&LayerKind, &mut Text2d, &mut Transform)>,
) {
    for (tile, digit, children) in &digits {
        let desired = compose_layers(digit);

        // Index this tile's existing layer children by kind
        let mut existing: Vec<(LayerKind, Entity)> = Vec::new();
        if let Some(children) = children {
            for child in children.iter() {
                if let Ok((kind, _, _)) = layer_query.get(child) {
                    existing.push((*kind, child));
                }
            }
        }

        for layer in &desired {
            match existing.iter().find(|(kind, _)| *kind == layer.kind) {
                Some(&(_, child)) => {
                    if let Ok((_, mut text, mut transform)) = layer_query.get_mut(child) {
                        if text.0 != layer.text {
                            text.0 = layer.text.clone();
                        }
                        *transform = layer_transform(layer);
                    }
                }
                None => {
                    let child = commands
                        .spawn((
                            layer.kind,
                            Text2d::new(layer.text.clone()),
                            TextFont {
                                font_size: TILE_FONT_SIZE,
                                ..default()
                            },
                            TextColor(Color::srgb(0.92, 0.85, 0.55)),
                            layer_transform(layer),
                        ))
                        .id();
                    commands.entity(tile).add_child(child);
                }
            }
        }

        // Transient layers whose flip has ended come down
        for &(kind, child) in &existing {
            if !desired.iter().any(|layer| layer.kind == kind) {
                commands.entity(child).despawn();
            }
        }
    }
}
