// src/debug/visualization/normal_arrows.rs

use crate::surface::resources::{DebugSettings, GridMeshCache};
use bevy::prelude::*;

/// Zeichnet die Vertex-Normalen des Gitters als Gizmo-Pfeile.
///
/// Liest die zuletzt gebauten Gitterdaten; Position und Normale gehören
/// dort über den gemeinsamen Index zusammen.
pub fn draw_grid_normal_arrows_system(
    settings: Res<DebugSettings>,
    cache: Res<GridMeshCache>,
    mut gizmos: Gizmos,
) {
    if !settings.show_grid_normals {
        return;
    }

    let mesh = &cache.0;
    for (position, normal) in mesh.positions.iter().zip(mesh.normals.iter()) {
        let tip = *position + *normal * settings.normal_arrow_length;
        gizmos.arrow(*position, tip, Color::YELLOW);
    }
}
