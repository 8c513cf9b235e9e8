// src/math/geometry/isofield/polygonize.rs
//
// Einzige Übersetzungsstelle zwischen `VolumeField` und dem externen
// Extraktor. Achsenkonvention hier wie überall: u auf width (x),
// v auf height (y), w auf depth (z).

use super::field::VolumeField;
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::mesh_data::MeshData;
use crate::math::geometry::normals::FALLBACK_NORMAL;
use crate::math::utils::constants::EPSILON_SQUARED;
use bevy::math::Vec3;
use isosurface::marching_cubes::MarchingCubes;
use isosurface::source::Source;

/// Adapter, der das Feld für den Extraktor als vorzeichenbehaftete Dichte
/// über dem Einheitswürfel anbietet: negativ innerhalb der Fläche
/// (Feldwert über dem Iso-Level), positiv außerhalb.
struct VolumeSource<'a> {
    field: &'a VolumeField,
    iso_level: f32,
}

impl Source for VolumeSource<'_> {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.iso_level - self.field.sample_normalized(x, y, z)
    }
}

/// Übergibt das Feld an die externe Volumen-zu-Mesh-Routine und verpackt das
/// Ergebnis in den gemeinsamen Mesh-Kontrakt.
///
/// Positionen werden vom Einheitswürfel auf `(width, height, depth) * scale`
/// abgebildet. Die Vertex-Normalen kommen aus dem Gradienten der Dichte
/// (zentrale Differenzen) und zeigen von hohen zu niedrigen Feldwerten, also
/// aus der Fläche heraus; verschwindet der Gradient, greift die
/// Fallback-Normale (0, 1, 0).
pub fn extract_surface(field: &VolumeField, iso_level: f32, scale: Vec3) -> MathResult<MeshData> {
    if field.width < 2 || field.height < 2 || field.depth < 2 {
        return Err(MathError::InvalidConfiguration {
            message: format!(
                "field bounds {}x{}x{} leave no cell to extract",
                field.width, field.height, field.depth
            ),
        });
    }

    let resolution = field.width.max(field.height).max(field.depth);
    let source = VolumeSource { field, iso_level };

    let mut raw_vertices: Vec<f32> = Vec::new();
    let mut raw_indices: Vec<u32> = Vec::new();
    let mut marching_cubes = MarchingCubes::new(resolution);
    marching_cubes.extract(&source, &mut raw_vertices, &mut raw_indices);

    let output_scale =
        Vec3::new(field.width as f32, field.height as f32, field.depth as f32) * scale;
    // Halbe Zellbreite als Schrittweite der zentralen Differenzen
    let step = 0.5 / resolution as f32;

    let mut positions = Vec::with_capacity(raw_vertices.len() / 3);
    let mut normals = Vec::with_capacity(raw_vertices.len() / 3);
    for chunk in raw_vertices.chunks_exact(3) {
        let unit = Vec3::new(chunk[0], chunk[1], chunk[2]);
        positions.push(unit * output_scale);
        normals.push(gradient_normal(&source, unit, step));
    }

    let triangles = raw_indices
        .chunks_exact(3)
        .map(|triple| [triple[0], triple[1], triple[2]])
        .collect();

    MeshData::assemble(positions, normals, triangles)
}

/// Normale am Punkt `unit` (Einheitswürfel-Koordinaten) aus dem Gradienten
/// der vorzeichenbehafteten Dichte.
fn gradient_normal(source: &VolumeSource<'_>, unit: Vec3, step: f32) -> Vec3 {
    let gradient = Vec3::new(
        source.sample(unit.x + step, unit.y, unit.z) - source.sample(unit.x - step, unit.y, unit.z),
        source.sample(unit.x, unit.y + step, unit.z) - source.sample(unit.x, unit.y - step, unit.z),
        source.sample(unit.x, unit.y, unit.z + step) - source.sample(unit.x, unit.y, unit.z - step),
    );

    if gradient.length_squared() > EPSILON_SQUARED {
        gradient.normalize()
    } else {
        FALLBACK_NORMAL
    }
}
