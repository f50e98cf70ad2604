pub struct TransformConfig {
    pub angle_radians: f64,
    pub center: (f64, f64),
    pub translate: (f64, f64),
    pub precision: usize,
}

impl TransformConfig {
    /// The CLI speaks degrees; everything past the boundary is radians.
    pub fn from_degrees(
        angle_degrees: f64,
        center: (f64, f64),
        translate: (f64, f64),
        precision: usize,
    ) -> Self {
        TransformConfig {
            angle_radians: angle_degrees.to_radians(),
            center,
            translate,
            precision,
        }
    }

    /// True when the transform would leave every coordinate unchanged.
    /// The center is irrelevant without a rotation.
    pub fn is_noop(&self) -> bool {
        self.angle_radians == 0.0 && self.translate == (0.0, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_noop_detection() {
        assert!(TransformConfig::from_degrees(0.0, (125.0, 100.0), (0.0, 0.0), 3).is_noop());
        assert!(!TransformConfig::from_degrees(90.0, (125.0, 100.0), (0.0, 0.0), 3).is_noop());
        assert!(!TransformConfig::from_degrees(0.0, (125.0, 100.0), (2.0, 0.0), 3).is_noop());
    }
}
