use bounds::MotionObserver;
use config::TransformConfig;
use gcode::{LineAction, LineError, LineTransformer};
use output::MachineFormatter;
use transform::PlanarTransform;

pub mod bounds;
pub mod config;
pub mod coordinates;
pub mod gcode;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod transform;

/// Transform every line of `input`, returning the rewritten program. Output
/// order is input order; `observer` sees each rewritten move's position
/// before and after the transform.
pub fn transform_gcode_file(
    config: &TransformConfig,
    input: &str,
    observer: &mut impl MotionObserver,
) -> Result<String, LineError> {
    let transform = PlanarTransform::new(config);
    let mut transformer = LineTransformer::new(&transform);
    let mut output = String::new();
    for (index, line) in input.lines().enumerate() {
        let action = transformer
            .transform_line(line)
            .map_err(|cause| LineError {
                line: index + 1,
                cause,
            })?;
        match action {
            LineAction::Keep => {
                output.push_str(line);
                output.push('\n');
            }
            LineAction::Drop => (),
            LineAction::Rewrite {
                original,
                rewritten,
            } => {
                observer.observe(&original, &rewritten.target);
                output.push_str(&format!("{}\n", MachineFormatter(config, &rewritten)));
            }
        }
    }
    Ok(output)
}
