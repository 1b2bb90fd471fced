//! UV projection from vertex positions

use crate::constants::SECTORS;
use crate::error::{HexagonError, describe_buffer};
use crate::params::TextureFit;

use super::ring::{outermost_ring, vertex_count};

/// Axis-aligned extents of a set of `(x, y)` samples
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extents {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Extents {
    fn of(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        points.into_iter().fold(
            Self {
                min_x: f32::INFINITY,
                max_x: f32::NEG_INFINITY,
                min_y: f32::INFINITY,
                max_y: f32::NEG_INFINITY,
            },
            |e, (x, y)| Self {
                min_x: e.min_x.min(x),
                max_x: e.max_x.max(x),
                min_y: e.min_y.min(y),
                max_y: e.max_y.max(y),
            },
        )
    }

    fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Compute one `(u, v)` pair per vertex of a hexagon vertex buffer
///
/// The UV box is bounded by the six corners of the outermost ring only, and
/// assumes the shape is centered on the origin. After a rotation the corners
/// no longer span the true axis-aligned extents, so UVs are approximate; with
/// [`TextureFit::Fill`] vertices between the corners may fall outside `[0, 1]`.
pub fn compute_uv(vertices: &[f32], texture_fit: TextureFit) -> Result<Vec<f32>, HexagonError> {
    if vertices.len() % 3 != 0 {
        return Err(HexagonError::invalid(
            "compute_uv",
            "vertices",
            "a flat list of xyz triples",
            describe_buffer(vertices),
        ));
    }

    let count = vertices.len() / 3;
    if count < vertex_count(1) as usize {
        return Err(HexagonError::invalid(
            "compute_uv",
            "vertices",
            "a hexagon with at least one ring (7 vertices)",
            describe_buffer(vertices),
        ));
    }

    // corners of the outermost ring, last sector first
    let lv = outermost_ring(count);
    let extents = Extents::of((1..=SECTORS as usize).map(|k| {
        let id = count - lv * k;
        (vertices[id * 3], vertices[id * 3 + 1])
    }));

    let (width, height) = texture_fit.fit(extents.width(), extents.height());
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(HexagonError::invalid(
            "compute_uv",
            "vertices",
            "a hexagon with non-degenerate extents",
            format!("extents {} x {}", extents.width(), extents.height()),
        ));
    }

    let mut uvs = Vec::with_capacity(count * 2);
    for vertex in vertices.chunks_exact(3) {
        uvs.push((vertex[0] + width / 2.0) / width);
        uvs.push((vertex[1] + height / 2.0) / height);
    }
    Ok(uvs)
}
