//! Global constants for hexagon-geo

use std::f32::consts::PI;

/// Default hexagon edge length
pub const DEFAULT_SIZE: f32 = 10.0;

/// Default number of rings
pub const DEFAULT_SEGMENT: u32 = 1;

/// Default rotation about the Z axis (radians)
pub const DEFAULT_ROTATE_ANGLE: f32 = 0.0;

/// Largest ring count whose index buffer (`18 * segment^2` entries) fits in `u32`
pub const MAX_SEGMENT: u32 = 15_446;

/// Number of corners (and angular sectors) of a hexagon
pub const SECTORS: u32 = 6;

/// Angle spanned by one sector
pub const DEGREE_60: f32 = PI / 3.0;

/// Normal assigned to every vertex (flat, facing +Z)
pub const FLAT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];
