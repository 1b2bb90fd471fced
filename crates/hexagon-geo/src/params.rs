//! Generation parameters and their validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROTATE_ANGLE, DEFAULT_SEGMENT, DEFAULT_SIZE, MAX_SEGMENT};
use crate::error::{HexagonError, describe};

/// How the texture is fitted onto the hexagon's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextureFit {
    /// Square box sized by the larger extent; the texture covers the whole shape
    #[default]
    Cover,
    /// Square box sized by the smaller extent; the texture fits inside the shape
    Contain,
    /// Width and height are fitted independently, stretching the texture
    Fill,
}

impl TextureFit {
    /// All fitting strategies
    pub const ALL: [TextureFit; 3] = [TextureFit::Cover, TextureFit::Contain, TextureFit::Fill];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureFit::Cover => "COVER",
            TextureFit::Contain => "CONTAIN",
            TextureFit::Fill => "FILL",
        }
    }

    /// Side lengths of the UV box for raw sample extents
    pub fn fit(&self, width: f32, height: f32) -> (f32, f32) {
        match self {
            TextureFit::Cover => {
                let side = width.max(height);
                (side, side)
            }
            TextureFit::Contain => {
                let side = width.min(height);
                (side, side)
            }
            TextureFit::Fill => (width, height),
        }
    }

    /// Parse a fitting strategy name, reporting failures against `context`
    pub(crate) fn parse_for(context: &'static str, name: &str) -> Result<Self, HexagonError> {
        TextureFit::ALL
            .into_iter()
            .find(|fit| fit.as_str() == name)
            .ok_or_else(|| {
                HexagonError::invalid(
                    context,
                    "texture_fit",
                    "either 'COVER', 'CONTAIN' or 'FILL'",
                    describe(&name),
                )
            })
    }
}

impl fmt::Display for TextureFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextureFit {
    type Err = HexagonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextureFit::parse_for("texture_fit", s)
    }
}

/// Validated inputs of the generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexagonParams {
    /// Length of a hexagon edge
    pub size: f32,
    /// Number of concentric rings
    pub segment: u32,
    /// Rotation about the Z axis, in radians
    pub rotate_angle: f32,
    /// UV fitting strategy
    pub texture_fit: TextureFit,
}

impl Default for HexagonParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            segment: DEFAULT_SEGMENT,
            rotate_angle: DEFAULT_ROTATE_ANGLE,
            texture_fit: TextureFit::default(),
        }
    }
}

impl HexagonParams {
    /// Fill omitted inputs with defaults and validate the result
    pub fn new(
        size: Option<f32>,
        segment: Option<u32>,
        rotate_angle: Option<f32>,
        texture_fit: Option<TextureFit>,
    ) -> Result<Self, HexagonError> {
        let params = Self {
            size: size.unwrap_or(DEFAULT_SIZE),
            segment: segment.unwrap_or(DEFAULT_SEGMENT),
            rotate_angle: rotate_angle.unwrap_or(DEFAULT_ROTATE_ANGLE),
            texture_fit: texture_fit.unwrap_or_default(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Set the edge length
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the number of rings
    pub fn with_segment(mut self, segment: u32) -> Self {
        self.segment = segment;
        self
    }

    /// Set the rotation angle (radians)
    pub fn with_rotate_angle(mut self, rotate_angle: f32) -> Self {
        self.rotate_angle = rotate_angle;
        self
    }

    /// Set the UV fitting strategy
    pub fn with_texture_fit(mut self, texture_fit: TextureFit) -> Self {
        self.texture_fit = texture_fit;
        self
    }

    /// Check the range constraints of every field
    pub fn validate(&self) -> Result<(), HexagonError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(HexagonError::invalid(
                "generate",
                "size",
                "a positive number",
                describe(&self.size),
            ));
        }
        if self.segment == 0 || self.segment > MAX_SEGMENT {
            return Err(HexagonError::invalid(
                "generate",
                "segment",
                "a positive integer no greater than 15446",
                describe(&self.segment),
            ));
        }
        if !self.rotate_angle.is_finite() {
            return Err(HexagonError::invalid(
                "generate",
                "rotate_angle",
                "a finite number",
                describe(&self.rotate_angle),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = HexagonParams::new(None, None, None, None).unwrap();
        assert_eq!(params, HexagonParams::default());
        assert_eq!(params.size, 10.0);
        assert_eq!(params.segment, 1);
        assert_eq!(params.rotate_angle, 0.0);
        assert_eq!(params.texture_fit, TextureFit::Cover);
    }

    #[test]
    fn test_rejects_bad_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = HexagonParams::new(Some(size), None, None, None).unwrap_err();
            assert_eq!(err.field(), "size");
        }
    }

    #[test]
    fn test_rejects_zero_segment() {
        let err = HexagonParams::default()
            .with_segment(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "segment");
    }

    #[test]
    fn test_segment_upper_bound() {
        assert!(HexagonParams::default().with_segment(MAX_SEGMENT).validate().is_ok());
        for segment in [MAX_SEGMENT + 1, 20_000, u32::MAX] {
            let err = HexagonParams::new(None, Some(segment), None, None).unwrap_err();
            assert_eq!(err.field(), "segment");
        }
    }

    #[test]
    fn test_rotate_angle_accepts_any_finite_value() {
        for angle in [-10.0, 0.0, 7.5, 100.0] {
            assert!(HexagonParams::default().with_rotate_angle(angle).validate().is_ok());
        }
        let err = HexagonParams::default()
            .with_rotate_angle(f32::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "rotate_angle");
    }

    #[test]
    fn test_texture_fit_names() {
        for fit in TextureFit::ALL {
            assert_eq!(fit.as_str().parse::<TextureFit>().unwrap(), fit);
            assert_eq!(fit.to_string(), fit.as_str());
        }
        assert!("cover".parse::<TextureFit>().is_err());
        let err = "STRETCH".parse::<TextureFit>().unwrap_err();
        assert_eq!(err.context(), "texture_fit");
    }

    #[test]
    fn test_texture_fit_box() {
        assert_eq!(TextureFit::Cover.fit(4.0, 2.0), (4.0, 4.0));
        assert_eq!(TextureFit::Contain.fit(4.0, 2.0), (2.0, 2.0));
        assert_eq!(TextureFit::Fill.fit(4.0, 2.0), (4.0, 2.0));
    }
}
