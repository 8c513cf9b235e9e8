// src/math/geometry/isofield/field.rs

use super::influence::FieldInfluence;
use crate::math::utils::comparison::lerp;
use bevy::math::Vec3;

/// Dreidimensionales Raster für Skalarwerte.
/// Speicherung zeilenweise (row-major), x läuft am schnellsten.
#[derive(Debug, Clone)]
pub struct VolumeField {
    data: Vec<f32>,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl VolumeField {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            data: vec![0.0; width * height * depth],
            width,
            height,
            depth,
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.idx(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, v: f32) {
        let i = self.idx(x, y, z);
        self.data[i] = v;
    }

    /// Setzt alle Voxel auf Null zurück.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Addiert den Beitrag einer Einflussquelle auf jedes Voxel.
    ///
    /// Voxelkoordinaten sind zugleich die Weltkoordinaten des Felds; die
    /// Skalierung auf Ausgabekoordinaten passiert erst bei der Extraktion.
    pub fn inject(&mut self, source: &impl FieldInfluence) {
        for z in 0..self.depth {
            for y in 0..self.height {
                for x in 0..self.width {
                    let point = Vec3::new(x as f32, y as f32, z as f32);
                    let contribution = source.influence_at(point);
                    if contribution != 0.0 {
                        let i = self.idx(x, y, z);
                        self.data[i] += contribution;
                    }
                }
            }
        }
    }

    /// Trilineare Abtastung über dem Einheitswürfel: (0,0,0) liegt auf dem
    /// ersten, (1,1,1) auf dem letzten Gitterpunkt jeder Achse. Koordinaten
    /// außerhalb [0,1] werden auf den Rand geklemmt.
    pub fn sample_normalized(&self, u: f32, v: f32, w: f32) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }

        let fx = u.clamp(0.0, 1.0) * (self.width - 1) as f32;
        let fy = v.clamp(0.0, 1.0) * (self.height - 1) as f32;
        let fz = w.clamp(0.0, 1.0) * (self.depth - 1) as f32;

        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let z0 = fz.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let z1 = (z0 + 1).min(self.depth - 1);

        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;
        let tz = fz - z0 as f32;

        let c00 = lerp(self.get(x0, y0, z0), self.get(x1, y0, z0), tx);
        let c10 = lerp(self.get(x0, y1, z0), self.get(x1, y1, z0), tx);
        let c01 = lerp(self.get(x0, y0, z1), self.get(x1, y0, z1), tx);
        let c11 = lerp(self.get(x0, y1, z1), self.get(x1, y1, z1), tx);

        let c0 = lerp(c00, c10, ty);
        let c1 = lerp(c01, c11, ty);
        lerp(c0, c1, tz)
    }
}
