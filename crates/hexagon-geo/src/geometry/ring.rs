//! Ring-by-ring vertex and index generation
//!
//! Ring `lv` (1-based) holds `6 * lv` vertices: six sectors of `lv` vertices,
//! starting at a hexagon corner and walking clockwise along the edge. Rings
//! are stored back to back after the center vertex, so the first vertex of
//! ring `lv` sits at `6 * T(lv - 1) + 1` where `T` is the triangular number.

use glam::Vec2;

use crate::constants::{DEGREE_60, SECTORS};

/// Triangular number `n * (n + 1) / 2`
pub fn triangular(n: u32) -> u32 {
    n * (n + 1) / 2
}

/// Number of vertices contributed by ring `lv` (the center counts as ring 0)
pub fn ring_vertex_count(lv: u32) -> u32 {
    if lv == 0 { 1 } else { SECTORS * lv }
}

/// Index of the first vertex of ring `lv`; ring 0 is the center at index 0
pub fn ring_offset(lv: u32) -> u32 {
    if lv == 0 {
        0
    } else {
        SECTORS * triangular(lv - 1) + 1
    }
}

/// Vertex count of a hexagon with `segment` rings: `1 + 3 * segment * (segment + 1)`
pub fn vertex_count(segment: u32) -> u32 {
    ring_offset(segment + 1)
}

/// Index count of a hexagon with `segment` rings: `18 * segment^2`
pub fn index_count(segment: u32) -> u32 {
    3 * SECTORS * segment * segment
}

/// Outermost ring of a buffer holding `count` vertices: `floor(sqrt((count - 1) / 3))`
pub fn outermost_ring(count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((count - 1) as f64 / 3.0).sqrt().floor() as usize
}

/// A ring's position in the flat vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RingBand {
    lv: u32,
    offset: u32,
}

impl RingBand {
    fn new(lv: u32) -> Self {
        Self {
            lv,
            offset: ring_offset(lv),
        }
    }

    /// Global index of the `local`-th vertex, wrapping past the ring's last vertex.
    /// The center band maps every local index to 0.
    fn index(&self, local: u32) -> u32 {
        if self.lv == 0 {
            0
        } else {
            local % ring_vertex_count(self.lv) + self.offset
        }
    }
}

/// Append ring `lv` of a `segment`-ring hexagon with edge `size`
///
/// Pushes the ring's vertices (as flat `x, y, 0` triples) and the triangles
/// joining it to ring `lv - 1`. Callers must already have pushed the center
/// and rings `1..lv`, with `1 <= lv <= segment <= MAX_SEGMENT`.
pub(crate) fn generate_ring(
    vertices: &mut Vec<f32>,
    indices: &mut Vec<u32>,
    size: f32,
    lv: u32,
    segment: u32,
) {
    debug_assert_eq!(vertices.len() as u32, 3 * ring_offset(lv));

    let low = lv - 1;
    let outer = RingBand::new(lv);
    let inner = RingBand::new(low);
    let step = size / segment as f32;

    for i in 0..SECTORS {
        let corner = Vec2::from_angle(-((i + 1) as f32) * DEGREE_60)
            .rotate(Vec2::new(-step * lv as f32, 0.0));
        let shift =
            Vec2::from_angle(-((i + 3) as f32) * DEGREE_60).rotate(Vec2::new(-step, 0.0));

        let mut point = corner;
        vertices.extend_from_slice(&[point.x, point.y, 0.0]);
        indices.extend_from_slice(&[
            outer.index(i * lv),
            inner.index(i * low),
            outer.index(i * lv + 1),
        ]);

        for j in 0..low {
            point += shift;
            vertices.extend_from_slice(&[point.x, point.y, 0.0]);

            let a = outer.index(i * lv + j + 1);
            let b = inner.index(i * low + j);
            let c = inner.index(i * low + j + 1);
            let d = outer.index(i * lv + j + 2);
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
}
