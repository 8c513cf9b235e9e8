// src/math/geometry/mesh_data.rs

use crate::math::error::{MathError, MathResult};
use bevy::math::Vec3;
use bevy::render::{
    mesh::{Indices, Mesh},
    render_asset::RenderAssetUsages,
    render_resource::PrimitiveTopology,
};

/// CPU-seitige Mesh-Daten: Positionen, Normalen und Dreiecksindizes.
///
/// Position und Normale gehören über den gemeinsamen Index zusammen; die
/// Paarung ist ein reiner Index-Zip, kein räumliches Matching. Die Daten
/// werden pro Frame komplett neu erzeugt, keine Vertex-Identität überlebt
/// eine Neuberechnung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    /// Fügt Positionen, Normalen und Dreiecke zu einem Mesh zusammen.
    ///
    /// Schlägt fehl, wenn die Indexkorrespondenz verletzt wäre: ungleich
    /// lange Vertex-Arrays oder Dreiecksindizes außerhalb des Vertex-Bereichs.
    pub fn assemble(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    ) -> MathResult<Self> {
        if positions.len() != normals.len() {
            return Err(MathError::MeshAssembly {
                reason: format!(
                    "{} positions paired with {} normals",
                    positions.len(),
                    normals.len()
                ),
            });
        }

        let vertex_count = positions.len() as u32;
        for triangle in &triangles {
            if triangle.iter().any(|&index| index >= vertex_count) {
                return Err(MathError::MeshAssembly {
                    reason: format!(
                        "triangle {triangle:?} references a vertex >= {vertex_count}"
                    ),
                });
            }
        }

        Ok(Self {
            positions,
            normals,
            triangles,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Verpackt die Arrays in ein Render-Mesh (Positionen, Normalen,
    /// U32-Indizes, Dreiecksliste). Das Ergebnis wird nach der Rückgabe
    /// nicht mehr verändert, nur noch als Ganzes ausgetauscht.
    pub fn to_render_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|p| p.to_array()).collect();
        let normals: Vec<[f32; 3]> = self.normals.iter().map(|n| n.to_array()).collect();
        let indices: Vec<u32> = self.triangles.iter().flatten().copied().collect();

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_parts() -> (Vec<Vec3>, Vec<Vec3>, Vec<[u32; 3]>) {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let normals = vec![Vec3::Y; 4];
        let triangles = vec![[1, 3, 2], [2, 0, 1]];
        (positions, normals, triangles)
    }

    #[test]
    fn assemble_keeps_index_correspondence() {
        let (positions, normals, triangles) = quad_parts();
        let mesh = MeshData::assemble(positions.clone(), normals, triangles.clone()).unwrap();

        assert_eq!(mesh.positions, positions);
        assert_eq!(mesh.triangles, triangles);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn assemble_rejects_mismatched_arrays() {
        let (positions, mut normals, triangles) = quad_parts();
        normals.pop();
        assert!(MeshData::assemble(positions, normals, triangles).is_err());
    }

    #[test]
    fn assemble_rejects_out_of_range_indices() {
        let (positions, normals, _) = quad_parts();
        let result = MeshData::assemble(positions, normals, vec![[0, 1, 4]]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_mesh_assembles_cleanly() {
        let mesh = MeshData::assemble(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn render_mesh_carries_all_vertices_and_indices() {
        let (positions, normals, triangles) = quad_parts();
        let mesh = MeshData::assemble(positions, normals, triangles).unwrap();
        let render_mesh = mesh.to_render_mesh();

        assert_eq!(render_mesh.count_vertices(), 4);
        let indices = render_mesh.indices().expect("indices were inserted");
        assert_eq!(indices.len(), 6);
    }
}
