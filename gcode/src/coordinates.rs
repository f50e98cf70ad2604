/// A resolved absolute XY position, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub f64, pub f64);

/// The axis words found on one line; a missing axis means "unchanged" in
/// absolute mode and "zero delta" in relative mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialPosition(pub Option<f64>, pub Option<f64>);

impl PartialPosition {
    pub fn is_empty(&self) -> bool {
        self.0.is_none() && self.1.is_none()
    }
}
