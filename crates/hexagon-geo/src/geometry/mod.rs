//! Subdivided hexagon mesh generation
//!
//! Produces flat vertex, index, normal and UV buffers for a hexagon split into
//! concentric rings:
//! - Ring generation (positions + front-face triangles)
//! - Optional rotation about Z
//! - UV projection, back-face indices and flat normals

mod faces;
mod ring;
mod rotate;
mod uv;

use serde::{Deserialize, Serialize};

use crate::error::HexagonError;
use crate::params::{HexagonParams, TextureFit};
use ring::generate_ring;

pub use faces::{compute_inverted_indices, compute_normals};
pub use ring::{
    index_count, outermost_ring, ring_offset, ring_vertex_count, triangular, vertex_count,
};
pub use rotate::rotate_all;
pub use uv::compute_uv;

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

/// Generated hexagon buffers
///
/// Vertex 0 is the center; rings follow from the innermost outwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagonGeometry {
    /// Positions as flat `x, y, z` triples
    pub vertices: Vec<f32>,
    /// Front-face triangles (counter-clockwise seen from +Z before rotation)
    pub indices: Vec<u32>,
    /// Back-face triangles, `indices` with reversed winding
    pub inverted_indices: Vec<u32>,
    /// One `(0, 0, 1)` normal per vertex, never rotated
    pub normals: Vec<f32>,
    /// Flat `u, v` pairs, one per vertex
    pub uvs: Vec<f32>,
}

impl HexagonGeometry {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of front-face triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as `[x, y, z]` arrays
    pub fn positions(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normals as `[x, y, z]` arrays
    pub fn normal_vectors(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UVs as `[u, v]` arrays
    pub fn uv_pairs(&self) -> &[[f32; 2]] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Front-face triangles
    pub fn triangles(&self) -> &[[u32; 3]] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Back-face triangles
    pub fn back_triangles(&self) -> &[[u32; 3]] {
        bytemuck::cast_slice(&self.inverted_indices)
    }

    /// Front face as `(vertices, normals, indices)`
    pub fn to_mesh_data(&self) -> MeshData {
        (
            self.positions().to_vec(),
            self.normal_vectors().to_vec(),
            self.indices.clone(),
        )
    }

    /// Serialize to a RON string
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }
}

/// Generate a hexagon from optional inputs, defaulting omitted ones
///
/// Defaults: `size = 10`, `segment = 1`, `rotate_angle = 0`, `texture_fit = COVER`.
pub fn generate_hexagon(
    size: Option<f32>,
    segment: Option<u32>,
    rotate_angle: Option<f32>,
    texture_fit: Option<TextureFit>,
) -> Result<HexagonGeometry, HexagonError> {
    let params = HexagonParams::new(size, segment, rotate_angle, texture_fit)?;
    generate(&params)
}

/// Generate a hexagon
pub fn generate(params: &HexagonParams) -> Result<HexagonGeometry, HexagonError> {
    params.validate()?;

    let mut vertices = Vec::with_capacity(3 * vertex_count(params.segment) as usize);
    let mut indices = Vec::with_capacity(index_count(params.segment) as usize);
    vertices.extend_from_slice(&[0.0, 0.0, 0.0]);

    for lv in 1..=params.segment {
        generate_ring(&mut vertices, &mut indices, params.size, lv, params.segment);
    }

    if params.rotate_angle != 0.0 {
        rotate_all(&mut vertices, params.rotate_angle)?;
    }

    let uvs = compute_uv(&vertices, params.texture_fit)?;
    let inverted_indices = compute_inverted_indices(&indices)?;
    let normals = compute_normals(&vertices)?;

    tracing::debug!(
        segment = params.segment,
        vertices = vertices.len() / 3,
        triangles = indices.len() / 3,
        "generated hexagon"
    );

    Ok(HexagonGeometry {
        vertices,
        indices,
        inverted_indices,
        normals,
        uvs,
    })
}
