// src/math/geometry/isofield/builder.rs

use super::components::FieldConfig;
use super::isofield::IsoField;
use super::sphere::SphereSource;
use crate::math::utils::constants::EPSILON;
use bevy::math::Vec3;

/// Builder zum komfortablen Erstellen und Konfigurieren von
/// `IsoField`-Instanzen.
#[derive(Debug, Clone, Default)]
pub struct IsoFieldBuilder {
    config: FieldConfig,
    spheres: Vec<SphereSource>,
}

impl IsoFieldBuilder {
    /// Erstellt einen neuen `IsoFieldBuilder` mit Standardkonfiguration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Ausdehnung des Felds in Voxeln.
    /// Mindestens 2 pro Achse, sonst gibt es keine Zelle zum Extrahieren.
    pub fn bounds(mut self, width: usize, height: usize, depth: usize) -> Self {
        self.config.width = width.max(2);
        self.config.height = height.max(2);
        self.config.depth = depth.max(2);
        self
    }

    /// Setzt den Schwellenwert für die Flächenextraktion.
    pub fn iso_level(mut self, iso_level: f32) -> Self {
        self.config.iso_level = iso_level;
        self
    }

    /// Setzt die Ausgabeskalierung pro Achse. Muss positiv sein.
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.config.scale = scale.max(Vec3::splat(EPSILON));
        self
    }

    /// Aktiviert oder deaktiviert die Höhenanimation der Kugeln.
    pub fn animate_spheres(mut self, animate: bool) -> Self {
        self.config.animate_spheres = animate;
        self
    }

    /// Übernimmt eine komplette Konfiguration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Fügt eine einzelne Kugel hinzu.
    pub fn add_sphere(mut self, sphere: SphereSource) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Fügt mehrere Kugeln auf einmal hinzu.
    pub fn add_spheres<I>(mut self, spheres: I) -> Self
    where
        I: IntoIterator<Item = SphereSource>,
    {
        self.spheres.extend(spheres);
        self
    }

    /// Erstellt das `IsoField` mit der aktuellen Konfiguration und den
    /// hinzugefügten Kugeln.
    pub fn build(self) -> IsoField {
        IsoField::with_config(self.config, self.spheres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_clamped_to_extractable_sizes() {
        let iso = IsoFieldBuilder::new().bounds(0, 1, 5).build();
        assert_eq!(iso.config.width, 2);
        assert_eq!(iso.config.height, 2);
        assert_eq!(iso.config.depth, 5);
    }

    #[test]
    fn build_allocates_a_matching_field() {
        let iso = IsoFieldBuilder::new().bounds(8, 12, 16).build();
        assert_eq!(iso.field.width, 8);
        assert_eq!(iso.field.height, 12);
        assert_eq!(iso.field.depth, 16);
    }

    #[test]
    fn spheres_keep_their_insertion_order() {
        let iso = IsoFieldBuilder::new()
            .add_sphere(SphereSource::new(Vec3::splat(1.0), 2.0))
            .add_spheres(vec![
                SphereSource::new(Vec3::splat(2.0), 2.0),
                SphereSource::new(Vec3::splat(3.0), 2.0),
            ])
            .build();

        // Die Reihenfolge ist der Phasenversatz der Animation
        assert_eq!(iso.spheres.len(), 3);
        assert_eq!(iso.spheres[0].center, Vec3::splat(1.0));
        assert_eq!(iso.spheres[2].center, Vec3::splat(3.0));
    }

    #[test]
    fn scale_is_kept_positive() {
        let iso = IsoFieldBuilder::new()
            .scale(Vec3::new(-1.0, 0.0, 2.0))
            .build();
        assert!(iso.config.scale.x > 0.0);
        assert!(iso.config.scale.y > 0.0);
        assert_eq!(iso.config.scale.z, 2.0);
    }
}
