// ./src/debug/ui.rs
use crate::surface::resources::{DebugSettings, GridSettings, IsoSurfaceSettings};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use egui::{DragValue, ScrollArea, Slider, Window};

/// Einstellungsfenster für beide Oberflächen. Alle Werte wirken ab dem
/// nächsten Frame; die Rebuild-Systeme lesen nur den aktuellen Stand.
pub fn surface_settings_ui_system(
    mut contexts: EguiContexts,
    mut grid: ResMut<GridSettings>,
    mut iso: ResMut<IsoSurfaceSettings>,
    mut debug: ResMut<DebugSettings>,
) {
    Window::new("Oberflächen-Einstellungen")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.collapsing("Wellengitter", |ui| {
                ui.add(Slider::new(&mut grid.quad_size, 0.05..=2.0).text("Quad-Größe"));
                ui.horizontal(|ui| {
                    ui.label("Quads");
                    ui.add(
                        DragValue::new(&mut grid.quads_x)
                            .clamp_range(1..=200)
                            .prefix("x: "),
                    );
                    ui.add(
                        DragValue::new(&mut grid.quads_z)
                            .clamp_range(1..=200)
                            .prefix("z: "),
                    );
                });
                vec3_editor(ui, "Ursprung", &mut grid.origin);
                ui.checkbox(&mut grid.center_on_origin, "Auf Ursprung zentrieren");
            });

            ui.separator();

            // Schaltet die Höhenanimation aller Kugeln um
            ui.checkbox(&mut iso.config.animate_spheres, "Anim Kugeln");

            ui.collapsing("Iso-Fläche", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Volumen");
                    ui.add(
                        DragValue::new(&mut iso.config.width)
                            .clamp_range(2..=96)
                            .prefix("w: "),
                    );
                    ui.add(
                        DragValue::new(&mut iso.config.height)
                            .clamp_range(2..=96)
                            .prefix("h: "),
                    );
                    ui.add(
                        DragValue::new(&mut iso.config.depth)
                            .clamp_range(2..=96)
                            .prefix("d: "),
                    );
                });
                ui.add(Slider::new(&mut iso.config.iso_level, 0.05..=2.0).text("Iso-Level"));
                vec3_editor(ui, "Skalierung", &mut iso.config.scale);
            });

            ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for (index, sphere) in iso.spheres.iter_mut().enumerate() {
                    ui.collapsing(format!("Kugel {index}"), |ui| {
                        vec3_editor(ui, "Position", &mut sphere.center);
                        ui.add(Slider::new(&mut sphere.radius, 0.5..=25.0).text("Radius"));
                        ui.add(Slider::new(&mut sphere.value, 0.0..=4.0).text("Wert"));
                        ui.add(Slider::new(&mut sphere.exponent, 0.25..=8.0).text("Exponent"));
                    });
                }
            });

            ui.separator();

            ui.collapsing("Debug", |ui| {
                ui.checkbox(&mut debug.show_grid_normals, "Gitter-Normalen anzeigen");
                ui.add(
                    Slider::new(&mut debug.normal_arrow_length, 0.05..=1.0).text("Pfeillänge"),
                );
            });
        });
}

/// Drei DragValues nebeneinander für einen Vec3.
fn vec3_editor(ui: &mut egui::Ui, label: &str, value: &mut Vec3) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(DragValue::new(&mut value.x).speed(0.1).prefix("x: "));
        ui.add(DragValue::new(&mut value.y).speed(0.1).prefix("y: "));
        ui.add(DragValue::new(&mut value.z).speed(0.1).prefix("z: "));
    });
}
