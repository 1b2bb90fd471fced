//! In-place rotation of flat vertex buffers about the Z axis

use glam::Vec2;

use crate::error::{HexagonError, describe, describe_buffer};

/// Rotate every `(x, y)` pair of a flat `x, y, z` buffer by `angle` radians
///
/// Counter-clockwise for positive angles; `z` is left untouched. This is the
/// only operation that mutates caller data. On error the buffer is unchanged.
pub fn rotate_all(vertices: &mut [f32], angle: f32) -> Result<(), HexagonError> {
    if vertices.len() % 3 != 0 {
        return Err(HexagonError::invalid(
            "rotate_all",
            "vertices",
            "a flat list of xyz triples",
            describe_buffer(vertices),
        ));
    }
    if !angle.is_finite() {
        return Err(HexagonError::invalid(
            "rotate_all",
            "angle",
            "a finite number",
            describe(&angle),
        ));
    }
    if angle == 0.0 {
        return Ok(());
    }

    let rotation = Vec2::from_angle(angle);
    for vertex in vertices.chunks_exact_mut(3) {
        let rotated = rotation.rotate(Vec2::new(vertex[0], vertex[1]));
        vertex[0] = rotated.x;
        vertex[1] = rotated.y;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_quarter_turn() {
        let mut vertices = vec![1.0, 0.0, 5.0, 0.0, 2.0, -1.0];
        rotate_all(&mut vertices, FRAC_PI_2).unwrap();
        let expected = [0.0, 1.0, 5.0, -2.0, 0.0, -1.0];
        for (a, b) in vertices.iter().zip(expected) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_angle_is_bitwise_noop() {
        let original = vec![-0.0, 0.0, 0.0, 1.5, -2.25, 3.0];
        let mut vertices = original.clone();
        rotate_all(&mut vertices, 0.0).unwrap();
        let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&vertices), bits(&original));
    }

    #[test]
    fn test_rotate_back_restores_positions() {
        let original = vec![3.0, 4.0, 0.0, -7.5, 0.25, 1.0, 10.0, -10.0, 0.0];
        let mut vertices = original.clone();
        rotate_all(&mut vertices, 1.234).unwrap();
        rotate_all(&mut vertices, -1.234).unwrap();
        for (a, b) in vertices.iter().zip(&original) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_invalid_input_leaves_buffer_untouched() {
        let mut vertices = vec![1.0, 2.0, 3.0, 4.0];
        let err = rotate_all(&mut vertices, 1.0).unwrap_err();
        assert_eq!(err.field(), "vertices");
        assert_eq!(vertices, vec![1.0, 2.0, 3.0, 4.0]);

        let mut vertices = vec![1.0, 2.0, 3.0];
        let err = rotate_all(&mut vertices, f32::NAN).unwrap_err();
        assert_eq!(err.field(), "angle");
        assert_eq!(vertices, vec![1.0, 2.0, 3.0]);
    }
}
