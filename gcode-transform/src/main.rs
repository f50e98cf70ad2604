use anyhow::Context;
use clap::{ArgAction, Parser};
use clap_stdin::FileOrStdin;
use gcode::{
    bounds::{Bounds, BoundsTracker},
    config::TransformConfig,
    transform_gcode_file,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "rotate and translate G-code XY coordinates", long_about = None)]
struct Args {
    /// Z rotation angle (degrees).
    #[arg(short, long, default_value_t = 0.0)]
    rotate: f64,

    /// XxY rotation center (mm).
    #[arg(short, long, default_value = "125x100", value_parser = coord_pair)]
    center: (f64, f64),

    /// XxY translation (mm).
    #[arg(short, long, default_value = "0x0", value_parser = coord_pair)]
    translate: (f64, f64),

    /// Output coordinate decimal precision.
    #[arg(long, default_value_t = 3)]
    precision: usize,

    /// Increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The file to process (defaults to stdin).
    #[arg(default_value = "-")]
    file: FileOrStdin,
}

fn coord_pair(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once('x')
        .ok_or_else(|| format!("expected XxY, got {value:?}"))?;
    match (x.parse(), y.parse()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(format!("expected a numeric XxY pair, got {value:?}")),
    }
}

fn warn(message: &str) {
    eprintln!("gcode-transform: {message}");
}

fn report_bounds(header: &str, bounds: &Option<Bounds>, precision: usize) {
    let Some(bounds) = bounds else { return };
    let width = precision + 5;
    eprintln!(
        "{header} -X{min_x:width$.precision$} +X{max_x:width$.precision$} -Y{min_y:width$.precision$} +Y{max_y:width$.precision$}",
        min_x = bounds.min_x,
        max_x = bounds.max_x,
        min_y = bounds.min_y,
        max_y = bounds.max_y,
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = TransformConfig::from_degrees(
        args.rotate,
        args.center,
        args.translate,
        args.precision,
    );
    if args.verbose >= 1 && config.is_noop() {
        warn("performing no-op transform");
    }

    if args.verbose >= 1 {
        let mut tracker = BoundsTracker::default();
        let result = transform_gcode_file(&config, &args.file, &mut tracker)
            .context("failed to transform input")?;
        print!("{result}");
        report_bounds("initial boundaries:", &tracker.original, args.precision);
        report_bounds("transf. boundaries:", &tracker.transformed, args.precision);
    } else {
        let result = transform_gcode_file(&config, &args.file, &mut ())
            .context("failed to transform input")?;
        print!("{result}");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_coord_pair_accepts_the_default_shapes() {
        assert_eq!(coord_pair("125x100"), Ok((125.0, 100.0)));
        assert_eq!(coord_pair("0x0"), Ok((0.0, 0.0)));
        assert_eq!(coord_pair("-12.5x3.25"), Ok((-12.5, 3.25)));
    }

    #[test]
    fn test_coord_pair_rejects_malformed_input() {
        assert!(coord_pair("125").is_err());
        assert!(coord_pair("125xx100").is_err());
        assert!(coord_pair("axb").is_err());
    }
}
