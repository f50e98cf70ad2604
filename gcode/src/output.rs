use std::fmt::{self, Display, Formatter};

use crate::{config::TransformConfig, coordinates::Position, gcode::RewrittenMove};

pub struct MachineFormatter<'a, T>(pub &'a TransformConfig, pub T);

impl<'a, 'b> Display for MachineFormatter<'a, &'b Position> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X{:.precision$} Y{:.precision$}",
            self.1 .0,
            self.1 .1,
            precision = self.0.precision
        )
    }
}

impl<'a, 'b> Display for MachineFormatter<'a, &'b RewrittenMove> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "G1 {}{}",
            MachineFormatter(self.0, &self.1.target),
            self.1.suffix
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(precision: usize) -> TransformConfig {
        TransformConfig::from_degrees(0.0, (0.0, 0.0), (0.0, 0.0), precision)
    }

    #[test]
    fn test_position_formatting() {
        let result = MachineFormatter(&config(2), &Position(50.004, 12.5)).to_string();
        assert_eq!(result, "X50.00 Y12.50");
    }

    #[test]
    fn test_rewritten_move_keeps_the_suffix() {
        let rewritten = RewrittenMove {
            target: Position(1.0, 2.0),
            suffix: " Z0.4 E1.2 F1800 ; wipe".to_string(),
        };
        let result = MachineFormatter(&config(3), &rewritten).to_string();
        assert_eq!(result, "G1 X1.000 Y2.000 Z0.4 E1.2 F1800 ; wipe");
    }

    #[test]
    fn test_both_axes_are_always_written() {
        let rewritten = RewrittenMove {
            target: Position(0.0, 10.0),
            suffix: String::new(),
        };
        let result = MachineFormatter(&config(3), &rewritten).to_string();
        assert_eq!(result, "G1 X0.000 Y10.000");
    }
}
