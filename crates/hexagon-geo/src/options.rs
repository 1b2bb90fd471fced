//! Loosely typed generator inputs, as read from configuration

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROTATE_ANGLE, DEFAULT_SEGMENT, DEFAULT_SIZE};
use crate::error::{HexagonError, describe};
use crate::params::{HexagonParams, TextureFit};

/// Unvalidated generator inputs; `None` means "use the default"
///
/// Numbers are kept as `f64` so that values a typed [`HexagonParams`] cannot
/// even hold (fractional segment counts, out-of-range sizes) are reported as
/// parameter errors instead of being silently truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonOptions {
    /// Length of a hexagon edge
    pub size: Option<f64>,
    /// Number of concentric rings
    pub segment: Option<f64>,
    /// Rotation about the Z axis, in radians
    pub rotate_angle: Option<f64>,
    /// Fitting strategy name: `COVER`, `CONTAIN` or `FILL`
    pub texture_fit: Option<String>,
}

impl HexagonOptions {
    /// Parse options from RON text, e.g. `(size: 4.0, segment: 3, texture_fit: "FILL")`
    pub fn from_ron(content: &str) -> Result<Self, HexagonError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(content)
            .map_err(|e| {
                HexagonError::invalid(
                    "options",
                    "options",
                    "RON hexagon options",
                    e.to_string(),
                )
            })
    }

    /// Apply defaults and validate every field
    pub fn resolve(&self) -> Result<HexagonParams, HexagonError> {
        let size = match self.size {
            None => DEFAULT_SIZE,
            Some(size) if size.is_finite() && size > 0.0 && (size as f32).is_finite() => {
                size as f32
            }
            Some(size) => {
                return Err(HexagonError::invalid(
                    "generate",
                    "size",
                    "a positive number",
                    describe(&size),
                ));
            }
        };

        let segment = match self.segment {
            None => DEFAULT_SEGMENT,
            Some(segment)
                if segment.is_finite()
                    && segment >= 1.0
                    && segment.fract() == 0.0
                    && segment <= u32::MAX as f64 =>
            {
                segment as u32
            }
            Some(segment) => {
                return Err(HexagonError::invalid(
                    "generate",
                    "segment",
                    "a positive integer",
                    describe(&segment),
                ));
            }
        };

        let rotate_angle = match self.rotate_angle {
            None => DEFAULT_ROTATE_ANGLE,
            Some(angle) if (angle as f32).is_finite() => angle as f32,
            Some(angle) => {
                return Err(HexagonError::invalid(
                    "generate",
                    "rotate_angle",
                    "a finite number",
                    describe(&angle),
                ));
            }
        };

        let texture_fit = match self.texture_fit.as_deref() {
            None => TextureFit::default(),
            Some(name) => TextureFit::parse_for("generate", name)?,
        };

        let params = HexagonParams {
            size,
            segment,
            rotate_angle,
            texture_fit,
        };
        params.validate()?;
        Ok(params)
    }
}
