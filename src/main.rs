// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod math;
pub mod setup;
pub mod surface;

use debug::ui::surface_settings_ui_system;
use debug::visualization::normal_arrows::draw_grid_normal_arrows_system;
use setup::setup_scene;
use surface::resources::{DebugSettings, GridMeshCache, GridSettings, IsoSurfaceSettings};
use surface::systems::{rebuild_grid_model_system, rebuild_iso_surface_model_system};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .init_resource::<GridSettings>()
        .init_resource::<IsoSurfaceSettings>()
        .init_resource::<DebugSettings>()
        .init_resource::<GridMeshCache>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // UI zuerst, damit Änderungen noch im selben Frame greifen
                surface_settings_ui_system,
                rebuild_grid_model_system,
                rebuild_iso_surface_model_system,
            )
                .chain(),
        )
        .add_systems(Update, draw_grid_normal_arrows_system)
        .run();
}
