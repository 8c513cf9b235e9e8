// ./src/setup.rs
use crate::math::prelude::*;
use crate::surface::resources::{GridSettings, IsoSurfaceSettings, SurfaceModels};
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Knotenskalierung der Iso-Fläche, wie im Vorbild halbiert dargestellt.
const ISO_NODE_SCALE: f32 = 0.5;

pub fn setup_scene(
    mut commands: Commands,
    grid_settings: Res<GridSettings>,
    iso_settings: Res<IsoSurfaceSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Startmeshes einmal regulär bauen; danach tauschen die Update-Systeme
    // nur noch den Inhalt hinter den Handles aus.
    let initial_grid = match grid_settings.spec_at(0.0).build() {
        Ok(data) => data.to_render_mesh(),
        Err(err) => {
            warn!("initial grid build failed: {err}");
            MeshData::default().to_render_mesh()
        }
    };

    let mut iso_field = IsoFieldBuilder::new()
        .with_config(iso_settings.config.clone())
        .add_spheres(iso_settings.spheres.iter().cloned())
        .build();
    iso_field.recompute_field(0.0);
    let initial_iso = match iso_field.polygonize() {
        Ok(data) => data.to_render_mesh(),
        Err(err) => {
            warn!("initial iso surface extraction failed: {err}");
            MeshData::default().to_render_mesh()
        }
    };

    let grid_mesh = meshes.add(initial_grid);
    let iso_mesh = meshes.add(initial_iso);

    // Wellengitter: mattes Grau wie das Demo-Plane-Material
    commands.spawn(PbrBundle {
        mesh: grid_mesh.clone(),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(0.5, 0.5, 0.5),
            perceptual_roughness: 1.0,
            metallic: 0.25,
            ..default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..default()
    });

    // Iso-Fläche: orange, leicht metallisch; das Volumen wird über dem
    // Ursprung zentriert, damit beide Modelle in einer Szene Platz haben.
    let iso_extent = iso_settings.config.bounds() * iso_settings.config.scale * ISO_NODE_SCALE;
    commands.spawn(PbrBundle {
        mesh: iso_mesh.clone(),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(1.0, 0.75, 0.15),
            perceptual_roughness: 0.2,
            metallic: 0.5,
            ..default()
        }),
        transform: Transform::from_xyz(-iso_extent.x / 2.0, 0.0, -iso_extent.z / 2.0)
            .with_scale(Vec3::splat(ISO_NODE_SCALE)),
        ..default()
    });

    commands.insert_resource(SurfaceModels {
        grid_mesh,
        iso_mesh,
    });

    // Boden, knapp unter dem Gitter
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(120.0, 120.0)),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(0.35, 0.35, 0.38),
            perceptual_roughness: 0.9,
            ..default()
        }),
        transform: Transform::from_xyz(0.0, -0.05, 0.0),
        ..default()
    });

    // Spot von schräg oben auf die Iso-Fläche
    commands.spawn(SpotLightBundle {
        spot_light: SpotLight {
            intensity: 50_000_000.0,
            range: 200.0,
            inner_angle: 0.1,
            outer_angle: 0.7,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(12.5, 35.0, 12.5).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // Fülllicht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 10_000_000.,
            range: 100.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(8.0, 10.0, -6.0),
        ..default()
    });

    info!(
        "scene ready: grid {}x{} quads, iso volume {}x{}x{} with {} spheres",
        grid_settings.quads_x,
        grid_settings.quads_z,
        iso_settings.config.width,
        iso_settings.config.height,
        iso_settings.config.depth,
        iso_settings.spheres.len()
    );

    // Kamera
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 12.0, -28.0)
                .looking_at(Vec3::new(0.0, 4.0, 0.0), Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(32.0), // Start-Entfernung
            ..default()
        },
    ));
}
