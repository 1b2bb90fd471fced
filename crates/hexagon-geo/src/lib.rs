//! Subdivided Hexagon Geometry
//!
//! Pure, stateless generator for the mesh of a hexagon split into concentric
//! rings. The output is a set of flat buffers ready for upload by a renderer:
//! - Vertices: center first, then ring by ring outwards
//! - Indices for the front face and the reversed back face
//! - Flat +Z normals
//! - UVs fitted with a [`TextureFit`] strategy
//!
//! ```
//! use hexagon_geo::{HexagonParams, TextureFit, generate};
//!
//! let params = HexagonParams::default()
//!     .with_segment(2)
//!     .with_texture_fit(TextureFit::Fill);
//! let hexagon = generate(&params).unwrap();
//! assert_eq!(hexagon.vertex_count(), 19);
//! assert_eq!(hexagon.indices.len(), 72);
//! ```

pub mod constants;
pub mod error;
pub mod geometry;
pub mod options;
pub mod params;

pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use options::*;
pub use params::*;
