// src/math/geometry/grid/sampler.rs

use super::GridSpec;
use bevy::math::Vec3;

/// Erzeugt die Position jedes Gitter-Vertex für den aktuellen Frame.
///
/// Die Reihenfolge entspricht `grid_vertex_index`: die X-Achse läuft innen
/// (am schnellsten), die Z-Achse außen. Bei aktiver Zentrierung wird die
/// halbe Gitterausdehnung `(quads * quad_size / 2)` auf x und z abgezogen.
///
/// Die Höhe ist `sin(x) * sin(z) * sin(time)`, eine reine, deterministische
/// Funktion aus horizontaler Position und Zeit; die y-Komponente des
/// Ursprungs geht nicht ein. Es wird nichts über Frames hinweg gecacht, da
/// sich `time` jeden Frame ändert.
pub fn grid_vertex_positions(spec: &GridSpec) -> Vec<Vec3> {
    let offset = if spec.center_on_origin {
        Vec3::new(
            spec.quads_x as f32 * spec.quad_size / 2.0,
            0.0,
            spec.quads_z as f32 * spec.quad_size / 2.0,
        )
    } else {
        Vec3::ZERO
    };

    let mut positions = Vec::with_capacity(spec.vertex_count());

    // +1 auf beiden Achsen: die Quad-Anzahl zählt Zellen, die letzte
    // Vertex-Reihe schließt das Gitter ab.
    for iz in 0..=spec.quads_z {
        for ix in 0..=spec.quads_x {
            let x = spec.origin.x + ix as f32 * spec.quad_size - offset.x;
            let z = spec.origin.z + iz as f32 * spec.quad_size - offset.z;
            let y = x.sin() * z.sin() * spec.time.sin();
            positions.push(Vec3::new(x, y, z));
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison::nearly_zero;

    fn spec(quads_x: usize, quads_z: usize, quad_size: f32, centered: bool, time: f32) -> GridSpec {
        GridSpec {
            origin: Vec3::ZERO,
            quad_size,
            quads_x,
            quads_z,
            center_on_origin: centered,
            time,
        }
    }

    #[test]
    fn produces_one_position_per_vertex() {
        let positions = grid_vertex_positions(&spec(4, 7, 0.5, false, 1.3));
        assert_eq!(positions.len(), 5 * 8);
    }

    #[test]
    fn time_zero_grid_is_flat() {
        for position in grid_vertex_positions(&spec(6, 6, 0.25, true, 0.0)) {
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn order_matches_the_vertex_index_formula() {
        // 1×1-Gitter: Vertices in der Reihenfolge (0,0), (1,0), (0,1), (1,1)
        let positions = grid_vertex_positions(&spec(1, 1, 1.0, false, 0.0));
        assert_eq!(
            positions,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn centering_translates_by_half_the_extent() {
        let n = 4;
        let s = 0.5;
        let plain = grid_vertex_positions(&spec(n, n, s, false, 0.0));
        let centered = grid_vertex_positions(&spec(n, n, s, true, 0.0));
        let shift = Vec3::new(-(n as f32) * s / 2.0, 0.0, -(n as f32) * s / 2.0);

        for (c, p) in centered.iter().zip(plain.iter()) {
            assert!(nearly_zero((*c - (*p + shift)).length()));
        }
    }

    #[test]
    fn repeated_sampling_is_bit_identical() {
        let spec = spec(12, 9, 0.25, true, 2.71);
        assert_eq!(grid_vertex_positions(&spec), grid_vertex_positions(&spec));
    }

    #[test]
    fn origin_height_does_not_enter_the_displacement() {
        let mut lifted_spec = spec(2, 2, 1.0, false, 0.7);
        lifted_spec.origin = Vec3::new(0.0, 5.0, 0.0);
        let lifted = grid_vertex_positions(&lifted_spec);

        lifted_spec.origin = Vec3::ZERO;
        let grounded = grid_vertex_positions(&lifted_spec);

        assert_eq!(lifted, grounded);
    }
}
