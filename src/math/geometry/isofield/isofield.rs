// src/math/geometry/isofield/isofield.rs

use super::components::FieldConfig;
use super::field::VolumeField;
use super::polygonize;
use super::sphere::SphereSource;
use crate::math::error::MathResult;
use crate::math::geometry::mesh_data::MeshData;

/// Implizites Kugelfeld samt volumetrischem Raster.
///
/// Konfiguration und Kugelliste dürfen zwischen zwei Aufrufen von außen
/// beliebig (gültig) verändert werden; jede Neuberechnung liest den
/// aktuellen Stand und befüllt das Feld von Grund auf neu.
#[derive(Debug, Clone)]
pub struct IsoField {
    pub config: FieldConfig,
    pub spheres: Vec<SphereSource>,
    pub field: VolumeField,
}

impl IsoField {
    pub fn with_config(config: FieldConfig, spheres: Vec<SphereSource>) -> Self {
        let field = VolumeField::new(config.width, config.height, config.depth);
        Self {
            config,
            spheres,
            field,
        }
    }

    /// Befüllt das Feld neu: löscht alle Voxel und injiziert jede Kugel mit
    /// ihrem effektiven Mittelpunkt zum Zeitpunkt `time`. Der Listenindex
    /// einer Kugel bestimmt ihren Phasenversatz in der Animation.
    pub fn recompute_field(&mut self, time: f32) {
        self.field.clear();
        let field_height = self.config.height as f32;

        for (index, sphere) in self.spheres.iter().enumerate() {
            let center =
                sphere.effective_center(field_height, self.config.animate_spheres, time, index);
            let stamped = SphereSource {
                center,
                ..sphere.clone()
            };
            self.field.inject(&stamped);
        }
    }

    /// Extrahiert die Iso-Fläche aus dem aktuellen Feldinhalt.
    /// Fehler der externen Extraktion werden unverändert durchgereicht.
    pub fn polygonize(&self) -> MathResult<MeshData> {
        polygonize::extract_surface(&self.field, self.config.iso_level, self.config.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::IsoFieldBuilder;
    use super::*;
    use bevy::math::Vec3;

    fn single_sphere_field() -> IsoField {
        IsoFieldBuilder::new()
            .bounds(16, 16, 16)
            .iso_level(0.5)
            .add_sphere(SphereSource::new(Vec3::new(8.0, 8.0, 8.0), 3.0))
            .build()
    }

    #[test]
    fn recompute_overwrites_the_previous_frame() {
        let mut iso = single_sphere_field();
        iso.recompute_field(0.0);
        let first = iso.field.get(8, 8, 8);

        // Gleiche Zeit, gleiche Kugeln: identischer Feldinhalt statt Summe
        iso.recompute_field(0.0);
        assert_eq!(iso.field.get(8, 8, 8), first);
        assert_eq!(first, 1.0);
    }

    #[test]
    fn animation_moves_the_stamped_height() {
        let mut iso = single_sphere_field();
        iso.config.animate_spheres = true;

        iso.recompute_field(0.0);
        let at_zero = iso.field.get(8, 5, 8);

        iso.recompute_field(std::f32::consts::PI);
        let at_pi = iso.field.get(8, 5, 8);

        assert!(at_zero != at_pi);
    }

    #[test]
    fn static_spheres_ignore_the_clock() {
        let mut iso = single_sphere_field();
        iso.recompute_field(0.0);
        let early = iso.field.get(8, 8, 8);
        iso.recompute_field(1000.0);
        assert_eq!(iso.field.get(8, 8, 8), early);
    }
}
