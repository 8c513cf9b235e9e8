// src/math/geometry/isofield/sphere.rs

use super::influence::FieldInfluence;
use crate::math::utils::constants::{EPSILON, TAU};
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Eine implizite Kugel: glatter Skalarbeitrag zu einem volumetrischen Feld,
/// der später über einen Schwellenwert zu einer Fläche polygonisiert wird.
///
/// Die Felder werden zur Laufzeit interaktiv editiert; jede Neuberechnung
/// des Felds liest den aktuellen Stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereSource {
    /// Mittelpunkt in Voxelkoordinaten; `center.y` ist die Höhenkoordinate.
    pub center: Vec3,
    /// Radius, bis zu dem die Kugel beiträgt (positiv).
    pub radius: f32,
    /// Stärke des Beitrags im Mittelpunkt.
    pub value: f32,
    /// Steilheit des Abfalls; größere Werte ziehen den Beitrag zum Zentrum.
    pub exponent: f32,
}

impl SphereSource {
    /// Kugel mit Standardgewicht und -abfall.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(EPSILON), // Radius muss positiv sein
            value: 1.0,
            exponent: 1.0,
        }
    }

    /// Effektiver Mittelpunkt für die Feldbefüllung.
    ///
    /// Mit aktivierter Animation oszilliert die Höhenkoordinate glatt um
    /// `field_height / 4`, mit Amplitude `(field_height / 2 - radius) / 4`;
    /// der Listenindex wirkt als Phasenversatz, so dass die Kugeln
    /// nacheinander schwingen. Ohne Animation bleibt `center.y` unverändert.
    pub fn effective_center(
        &self,
        field_height: f32,
        animate: bool,
        time: f32,
        index: usize,
    ) -> Vec3 {
        if !animate {
            return self.center;
        }

        let swing = (time + index as f32).cos() / 4.0;
        let y = (field_height / 2.0 - self.radius) * swing + field_height / 4.0;
        Vec3::new(self.center.x, y, self.center.z)
    }

    /// Ordnet `count` Kugeln auf einem ansteigenden Ring an: Kreis in der
    /// x/z-Ebene um `origin`, die Höhe wächst mit dem Index.
    pub fn ring_arrangement(
        origin: Vec3,
        count: usize,
        sphere_radius: f32,
        ring_radius: f32,
    ) -> Vec<SphereSource> {
        (0..count)
            .map(|i| {
                let angle = i as f32 / count as f32 * TAU;
                let offset = Vec3::new(
                    ring_radius * angle.cos(),
                    i as f32 * ring_radius / 6.0,
                    ring_radius * angle.sin(),
                );
                SphereSource::new(origin + offset, sphere_radius)
            })
            .collect()
    }
}

impl FieldInfluence for SphereSource {
    fn influence_at(&self, point: Vec3) -> f32 {
        let distance_sq = self.center.distance_squared(point);
        let radius_sq = self.radius * self.radius;
        if distance_sq >= radius_sq {
            return 0.0;
        }

        // Wyvill-artiger Abfall: `value` im Zentrum, exakt Null am Radius,
        // `exponent` steuert die Steilheit.
        let t = 1.0 - distance_sq / radius_sq;
        self.value * t.powf(self.exponent)
    }

    fn max_influence_distance(&self) -> Option<f32> {
        Some(self.radius)
    }

    fn influence_type(&self) -> &'static str {
        "SphereSource"
    }
}
