// src/surface/systems.rs

use super::resources::{GridMeshCache, GridSettings, IsoSurfaceSettings, SurfaceModels};
use crate::math::prelude::*;
use bevy::prelude::*;

/// Baut das Gittermodell jeden Frame neu und tauscht den Mesh-Inhalt hinter
/// dem bestehenden Handle aus. Die Auslenkung hängt nur von Position und
/// Uhrzeit ab, daher gibt es nichts zu cachen außer den fertigen Daten für
/// das Normalen-Overlay.
pub fn rebuild_grid_model_system(
    time: Res<Time>,
    settings: Res<GridSettings>,
    models: Res<SurfaceModels>,
    mut cache: ResMut<GridMeshCache>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let spec = settings.spec_at(time.elapsed_seconds());

    match spec.build() {
        Ok(mesh_data) => {
            meshes.insert(models.grid_mesh.id(), mesh_data.to_render_mesh());
            cache.0 = mesh_data;
        }
        Err(err) => {
            // Voriges Mesh bleibt stehen
            warn!("grid rebuild failed: {err}");
        }
    }
}

/// Befüllt das Kugelfeld neu, extrahiert die Iso-Fläche und tauscht das
/// Modell aus. Extraktionsfehler lassen das vorige Mesh stehen.
pub fn rebuild_iso_surface_model_system(
    time: Res<Time>,
    settings: Res<IsoSurfaceSettings>,
    models: Res<SurfaceModels>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let mut iso_field = IsoFieldBuilder::new()
        .with_config(settings.config.clone())
        .add_spheres(settings.spheres.iter().cloned())
        .build();

    iso_field.recompute_field(time.elapsed_seconds());

    match iso_field.polygonize() {
        Ok(mesh_data) => {
            meshes.insert(models.iso_mesh.id(), mesh_data.to_render_mesh());
        }
        Err(err) => warn!("iso surface extraction failed: {err}"),
    }
}
