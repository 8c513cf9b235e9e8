pub mod error;
pub mod geometry;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            grid::{grid_triangles, grid_vertex_index, grid_vertex_positions, GridSpec},
            isofield::{
                extract_surface, FieldConfig, FieldInfluence, IsoField, IsoFieldBuilder,
                SphereSource, VolumeField,
            },
            mesh_data::MeshData,
            normals::compute_vertex_normals,
        },
    };
}
