use ndarray::{arr1, arr2, Array2};

use crate::{config::TransformConfig, coordinates::Position};

pub trait Transform<T> {
    fn transform(&self, value: &T) -> T;
}

/// Rigid planar transform as a 3×3 homogeneous matrix: rotation about a
/// chosen center, then an independent translation. Built once per run.
///
/// Row-vector convention throughout: points multiply as `[x y 1] · M`, so the
/// leftmost factor applies first and the rotation block is
/// `[[cos, sin], [-sin, cos]]`. Flipping those signs reverses the rotation
/// direction.
pub struct PlanarTransform {
    matrix: Array2<f64>,
}

fn translation(x: f64, y: f64) -> Array2<f64> {
    arr2(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [x, y, 1.0]])
}

impl PlanarTransform {
    pub fn new(config: &TransformConfig) -> Self {
        let (sin, cos) = config.angle_radians.sin_cos();
        let rotation = arr2(&[[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]]);
        let (center_x, center_y) = config.center;
        let (translate_x, translate_y) = config.translate;
        let matrix = translation(-center_x, -center_y)
            .dot(&rotation)
            .dot(&translation(center_x, center_y))
            .dot(&translation(translate_x, translate_y));
        PlanarTransform { matrix }
    }
}

impl Transform<Position> for PlanarTransform {
    fn transform(&self, value: &Position) -> Position {
        let transformed = arr1(&[value.0, value.1, 1.0]).dot(&self.matrix);
        Position(transformed[0], transformed[1])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn transform(angle_degrees: f64, center: (f64, f64), translate: (f64, f64)) -> PlanarTransform {
        PlanarTransform::new(&TransformConfig::from_degrees(
            angle_degrees,
            center,
            translate,
            3,
        ))
    }

    fn assert_close(actual: Position, expected: Position) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_quarter_turn_about_origin() {
        let result = transform(90.0, (0.0, 0.0), (0.0, 0.0)).transform(&Position(10.0, 0.0));
        assert_close(result, Position(0.0, 10.0));
    }

    #[test]
    fn test_rotation_composes_about_the_center() {
        let result = transform(90.0, (5.0, 0.0), (0.0, 0.0)).transform(&Position(10.0, 0.0));
        assert_close(result, Position(5.0, 5.0));
    }

    #[test]
    fn test_translation_is_independent_of_center() {
        let result = transform(0.0, (125.0, 100.0), (2.0, -3.0)).transform(&Position(1.0, 1.0));
        assert_close(result, Position(3.0, -2.0));
    }

    #[test]
    fn test_rotate_then_unrotate_round_trips() {
        let there = transform(37.0, (125.0, 100.0), (0.0, 0.0));
        let back = transform(-37.0, (125.0, 100.0), (0.0, 0.0));
        let original = Position(3.2, -4.5);
        assert_close(back.transform(&there.transform(&original)), original);
    }

    #[test]
    fn test_identity_preserves_points() {
        let result = transform(0.0, (125.0, 100.0), (0.0, 0.0)).transform(&Position(12.5, -3.0));
        assert_close(result, Position(12.5, -3.0));
    }
}
