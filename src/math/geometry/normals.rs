// src/math/geometry/normals.rs

use bevy::math::Vec3;

/// Normale für Vertices ohne Beitrag aus nicht-degenerierten Dreiecken.
pub const FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Schätzt pro Vertex eine Einheitsnormale aus den aktuellen Positionen und
/// der festen Dreieckstopologie.
///
/// Pro Dreieck wird die Flächennormale als `cross(p0 - p1, p2 - p1)` gebildet
/// und unnormalisiert auf alle drei beteiligten Vertices aufsummiert; jeder
/// Beitrag ist damit implizit mit der doppelten Dreiecksfläche gewichtet.
/// Exakt null-flächige Dreiecke werden übersprungen. Vertices, deren
/// Akkumulator leer bleibt, erhalten die Fallback-Normale (0, 1, 0).
pub fn compute_vertex_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[i0, i1, i2] in triangles {
        let p0 = positions[i0 as usize];
        let p1 = positions[i1 as usize];
        let p2 = positions[i2 as usize];

        // Erst Differenz, dann Kreuzprodukt; die Reihenfolge legt das
        // Vorzeichen fest und muss zur Dreieckswicklung des Gitters passen.
        let face_normal = (p0 - p1).cross(p2 - p1);

        // Degeneriertes Dreieck: kein Beitrag
        if face_normal == Vec3::ZERO {
            continue;
        }

        normals[i0 as usize] += face_normal;
        normals[i1 as usize] += face_normal;
        normals[i2 as usize] += face_normal;
    }

    for normal in &mut normals {
        if normal.length() > 0.0 {
            *normal = normal.normalize();
        } else {
            *normal = FALLBACK_NORMAL;
        }
    }

    normals
}
