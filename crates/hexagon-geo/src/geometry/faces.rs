//! Back-face indices and flat normals

use crate::constants::FLAT_NORMAL;
use crate::error::{HexagonError, describe_buffer};

/// Swap the 2nd and 3rd index of every triangle, reversing its winding
///
/// Applying it twice yields the input again.
pub fn compute_inverted_indices(indices: &[u32]) -> Result<Vec<u32>, HexagonError> {
    if indices.len() % 3 != 0 {
        return Err(HexagonError::invalid(
            "compute_inverted_indices",
            "indices",
            "a flat list of index triples",
            describe_buffer(indices),
        ));
    }

    let mut inverted = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        inverted.extend_from_slice(&[tri[0], tri[2], tri[1]]);
    }
    Ok(inverted)
}

/// One `(0, 0, 1)` normal per vertex of a flat `x, y, z` buffer
///
/// The normal ignores any rotation already applied to the positions.
pub fn compute_normals(vertices: &[f32]) -> Result<Vec<f32>, HexagonError> {
    if vertices.len() % 3 != 0 {
        return Err(HexagonError::invalid(
            "compute_normals",
            "vertices",
            "a flat list of xyz triples",
            describe_buffer(vertices),
        ));
    }

    Ok(FLAT_NORMAL.repeat(vertices.len() / 3))
}
