// src/math/geometry/grid/triangulation.rs

/// Liefert den Vertex-Index für die Gitterkoordinate (ix, iz).
/// Die X-Achse läuft innen: `index = iz * (quads_x + 1) + ix`.
#[inline]
pub fn grid_vertex_index(ix: usize, iz: usize, quads_x: usize) -> u32 {
    (iz * (quads_x + 1) + ix) as u32
}

/// Erzeugt die feste Dreieckstopologie für `quads_x` × `quads_z` Zellen.
///
/// Unabhängig von den Vertex-Positionen und damit über Frames hinweg
/// wiederverwendbar, solange nur `time` sich ändert. Pro Zelle entstehen
/// zwei Dreiecke (d, c, b) und (b, a, d); diese Wicklung lässt die Normalen
/// eines unausgelenkten Gitters nach +Y zeigen.
pub fn grid_triangles(quads_x: usize, quads_z: usize) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(2 * quads_x * quads_z);

    for iz in 0..quads_z {
        for ix in 0..quads_x {
            let a = grid_vertex_index(ix, iz, quads_x); // unten links
            let b = grid_vertex_index(ix, iz + 1, quads_x); // oben links
            let c = grid_vertex_index(ix + 1, iz + 1, quads_x); // oben rechts
            let d = grid_vertex_index(ix + 1, iz, quads_x); // unten rechts

            triangles.push([d, c, b]);
            triangles.push([b, a, d]);
        }
    }

    triangles
}
