// src/math/geometry/isofield/influence.rs

use bevy::math::Vec3;

/// Einflussquelle für ein volumetrisches Skalarfeld.
///
/// Implementierungen liefern an jedem Punkt einen additiven Feldbeitrag;
/// das Feld summiert die Beiträge aller Quellen pro Voxel auf.
pub trait FieldInfluence {
    /// Feldbeitrag am Punkt `point` (Voxelkoordinaten).
    fn influence_at(&self, point: Vec3) -> f32;

    /// Nomineller Abstand, jenseits dessen der Beitrag Null ist.
    fn max_influence_distance(&self) -> Option<f32> {
        None
    }

    /// Kurzname der Quelle, für Logging.
    fn influence_type(&self) -> &'static str;
}
