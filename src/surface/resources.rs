// src/surface/resources.rs

use crate::math::prelude::*;
use bevy::prelude::*;

/// Parameter des Wellengitters; wird vom UI zwischen den Frames verändert.
#[derive(Resource, Debug, Clone)]
pub struct GridSettings {
    pub origin: Vec3,
    pub quad_size: f32,
    pub quads_x: usize,
    pub quads_z: usize,
    pub center_on_origin: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            quad_size: 0.25,
            quads_x: 40,
            quads_z: 40,
            center_on_origin: true,
        }
    }
}

impl GridSettings {
    /// `GridSpec` für den aktuellen Frame.
    pub fn spec_at(&self, time: f32) -> GridSpec {
        GridSpec {
            origin: self.origin,
            quad_size: self.quad_size,
            quads_x: self.quads_x,
            quads_z: self.quads_z,
            center_on_origin: self.center_on_origin,
            time,
        }
    }
}

/// Konfiguration der Iso-Fläche samt editierbarer Kugelliste.
#[derive(Resource, Debug, Clone)]
pub struct IsoSurfaceSettings {
    pub config: FieldConfig,
    pub spheres: Vec<SphereSource>,
}

impl Default for IsoSurfaceSettings {
    fn default() -> Self {
        let config = FieldConfig::default();

        // Ring-Arrangement in das Volumeninnere versetzt
        let width = config.width as f32;
        let ring_origin = Vec3::new(width / 2.0, width / 6.0, width / 2.0);
        let spheres = SphereSource::ring_arrangement(ring_origin, 10, 8.0, 15.0);

        Self { config, spheres }
    }
}

/// Mesh-Handles der beiden lebenden Modelle. Den atomaren Austausch des
/// Inhalts hinter einem Handle übernimmt `Assets<Mesh>`.
#[derive(Resource, Debug)]
pub struct SurfaceModels {
    pub grid_mesh: Handle<Mesh>,
    pub iso_mesh: Handle<Mesh>,
}

/// Zuletzt gebaute Gitterdaten, gelesen vom Normalen-Overlay.
#[derive(Resource, Debug, Default)]
pub struct GridMeshCache(pub MeshData);

/// Schalter für Debug-Anzeigen.
#[derive(Resource, Debug)]
pub struct DebugSettings {
    pub show_grid_normals: bool,
    pub normal_arrow_length: f32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            show_grid_normals: false,
            normal_arrow_length: 0.3,
        }
    }
}
