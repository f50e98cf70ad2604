use crate::coordinates::{PartialPosition, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMode {
    Absolute,
    Relative,
}

/// Owns the modal state and the absolute cursor; every positional mutation
/// goes through `resolve`.
pub struct PositionResolver {
    mode: Option<CoordinateMode>,
    cursor: Position,
}

impl PositionResolver {
    pub fn new() -> Self {
        PositionResolver {
            mode: None,
            cursor: Position(0.0, 0.0),
        }
    }

    /// `None` until the first modal marker line; resolved as absolute.
    pub fn mode(&self) -> Option<CoordinateMode> {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CoordinateMode) {
        self.mode = Some(mode);
    }

    /// Fold one line's axis words into the cursor and return the updated
    /// absolute position. Absent axes carry forward in absolute mode and
    /// contribute a zero delta in relative mode.
    pub fn resolve(&mut self, axes: &PartialPosition) -> Position {
        match self.mode {
            Some(CoordinateMode::Relative) => {
                self.cursor.0 += axes.0.unwrap_or(0.0);
                self.cursor.1 += axes.1.unwrap_or(0.0);
            }
            Some(CoordinateMode::Absolute) | None => {
                if let Some(x) = axes.0 {
                    self.cursor.0 = x;
                }
                if let Some(y) = axes.1 {
                    self.cursor.1 = y;
                }
            }
        }
        self.cursor
    }
}
