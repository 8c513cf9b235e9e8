// src/math/geometry/isofield/components.rs

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Konfiguration des volumetrischen Skalarfelds und der Flächenextraktion.
///
/// Achsenkonvention im gesamten Crate: `width` liegt auf x, `height` auf y
/// (Höhe), `depth` auf z. Die Höhenkoordinate einer Kugel ist immer `center.y`; es
/// gibt keine vertauschte Parameterreihenfolge mehr, die Aufrufer kennen
/// müssten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Ausdehnung des Felds in Voxeln entlang x.
    pub width: usize,
    /// Ausdehnung des Felds in Voxeln entlang y.
    pub height: usize,
    /// Ausdehnung des Felds in Voxeln entlang z.
    pub depth: usize,
    /// Schwellenwert, an dem die Iso-Fläche extrahiert wird.
    pub iso_level: f32,
    /// Skalierung der extrahierten Positionen pro Achse.
    pub scale: Vec3,
    /// Animiert die Höhenkoordinate der Kugeln über die Zeit.
    pub animate_spheres: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            depth: 50,
            iso_level: 0.8,
            scale: Vec3::ONE,
            animate_spheres: false,
        }
    }
}

impl FieldConfig {
    /// Erstellt eine neue Feld-Konfiguration.
    pub fn new(width: usize, height: usize, depth: usize, iso_level: f32) -> Self {
        Self {
            width,
            height,
            depth,
            iso_level,
            ..Default::default()
        }
    }

    /// Ausdehnung des Felds als Vektor in Voxel-Einheiten.
    pub fn bounds(&self) -> Vec3 {
        Vec3::new(self.width as f32, self.height as f32, self.depth as f32)
    }
}
