// src/math/geometry/grid/mod.rs

pub mod sampler;
pub mod triangulation;

pub use self::sampler::grid_vertex_positions;
pub use self::triangulation::{grid_triangles, grid_vertex_index};

use crate::math::error::MathResult;
use crate::math::geometry::mesh_data::MeshData;
use crate::math::geometry::normals::compute_vertex_normals;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Beschreibung des Wellengitters für einen Frame.
///
/// `quads_x` × `quads_z` zählt Zellen, nicht Vertices; das Gitter hat
/// `(quads_x + 1) * (quads_z + 1)` Vertices. Alle Felder dürfen zwischen
/// zwei Frames von außen verändert werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Ursprung des Gitters in Weltkoordinaten.
    pub origin: Vec3,
    /// Kantenlänge eines Quads (positiv).
    pub quad_size: f32,
    /// Anzahl der Quads entlang der X-Achse.
    pub quads_x: usize,
    /// Anzahl der Quads entlang der Z-Achse.
    pub quads_z: usize,
    /// Zentriert das Gitter über dem Ursprung statt dort zu beginnen.
    pub center_on_origin: bool,
    /// Zeit in Sekunden; steuert die Wellenauslenkung.
    pub time: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            quad_size: 0.25,
            quads_x: 40,
            quads_z: 40,
            center_on_origin: true,
            time: 0.0,
        }
    }
}

impl GridSpec {
    pub fn vertex_count(&self) -> usize {
        (self.quads_x + 1) * (self.quads_z + 1)
    }

    pub fn triangle_count(&self) -> usize {
        2 * self.quads_x * self.quads_z
    }

    /// Baut das komplette Gitter-Mesh für diesen Frame:
    /// Positionen abtasten, feste Topologie erzeugen, Normalen schätzen,
    /// zusammenfügen.
    pub fn build(&self) -> MathResult<MeshData> {
        let positions = grid_vertex_positions(self);
        let triangles = grid_triangles(self.quads_x, self.quads_z);
        let normals = compute_vertex_normals(&positions, &triangles);
        MeshData::assemble(positions, normals, triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_quad_end_to_end() {
        let spec = GridSpec {
            origin: Vec3::ZERO,
            quad_size: 1.0,
            quads_x: 1,
            quads_z: 1,
            center_on_origin: false,
            time: 0.0,
        };
        let mesh = spec.build().unwrap();

        assert_eq!(
            mesh.positions,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ]
        );
        assert_eq!(mesh.triangles, vec![[1, 3, 2], [2, 0, 1]]);
        for normal in &mesh.normals {
            assert_eq!(*normal, Vec3::Y);
        }
    }

    #[test]
    fn flat_grid_normals_are_exactly_up() {
        // time = 0 lässt das Gitter unausgelenkt; Wicklung und
        // Kreuzprodukt-Reihenfolge müssen dann exakt +Y ergeben.
        let spec = GridSpec {
            quads_x: 6,
            quads_z: 4,
            time: 0.0,
            ..Default::default()
        };
        let mesh = spec.build().unwrap();
        for normal in &mesh.normals {
            assert_eq!(*normal, Vec3::Y);
        }
    }

    #[test]
    fn displaced_grid_normals_are_unit_length() {
        let spec = GridSpec {
            quads_x: 10,
            quads_z: 10,
            quad_size: 0.5,
            time: 1.0,
            ..Default::default()
        };
        let mesh = spec.build().unwrap();
        for normal in &mesh.normals {
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn counts_match_the_helper_methods() {
        let spec = GridSpec {
            quads_x: 7,
            quads_z: 3,
            ..Default::default()
        };
        let mesh = spec.build().unwrap();

        assert_eq!(mesh.vertex_count(), spec.vertex_count());
        assert_eq!(mesh.vertex_count(), 8 * 4);
        assert_eq!(mesh.triangle_count(), spec.triangle_count());
        assert_eq!(mesh.triangle_count(), 2 * 7 * 3);
    }

    #[test]
    fn rebuild_with_identical_spec_is_bit_identical() {
        let spec = GridSpec {
            quads_x: 12,
            quads_z: 9,
            time: 2.71,
            ..Default::default()
        };
        assert_eq!(spec.build().unwrap(), spec.build().unwrap());
    }

    #[test]
    fn zero_quads_yield_a_degenerate_but_valid_mesh() {
        // Entartete Konfiguration ist Sache des Aufrufers; sie liefert ein
        // leeres bzw. dreiecksloses Mesh, keinen Fehler.
        let spec = GridSpec {
            quads_x: 0,
            quads_z: 3,
            ..Default::default()
        };
        let mesh = spec.build().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 0);
        for normal in &mesh.normals {
            assert_eq!(*normal, Vec3::Y);
        }
    }
}
