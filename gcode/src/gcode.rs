use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{
    coordinates::Position,
    parse::{classify, scan_axis_words, BadAxisWord, LineKind},
    resolve::{CoordinateMode, PositionResolver},
    transform::{PlanarTransform, Transform},
};

/// The move re-emitted in place of the original line. Both axes are always
/// written out, since a rotation mixes the two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenMove {
    pub target: Position,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineAction {
    /// Emit the original line unchanged.
    Keep,
    /// Consume the line; the rewritten stream is all-absolute.
    Drop,
    Rewrite {
        original: Position,
        rewritten: RewrittenMove,
    },
}

/// One line at a time: classify, extract, resolve against the modal cursor,
/// transform, and decide what to emit.
pub struct LineTransformer<'a> {
    transform: &'a PlanarTransform,
    resolver: PositionResolver,
}

impl<'a> LineTransformer<'a> {
    pub fn new(transform: &'a PlanarTransform) -> Self {
        LineTransformer {
            transform,
            resolver: PositionResolver::new(),
        }
    }

    pub fn transform_line(&mut self, line: &str) -> Result<LineAction, BadAxisWord> {
        match classify(line) {
            LineKind::AbsoluteMode => {
                let first_marker = self.resolver.mode().is_none();
                self.resolver.set_mode(CoordinateMode::Absolute);
                // Only the first marker survives; the output is absolute from
                // here on either way.
                Ok(if first_marker {
                    LineAction::Keep
                } else {
                    LineAction::Drop
                })
            }
            LineKind::RelativeMode => {
                self.resolver.set_mode(CoordinateMode::Relative);
                Ok(LineAction::Drop)
            }
            LineKind::Motion => {
                let fields = scan_axis_words(line)?;
                if fields.axes.is_empty() {
                    return Ok(LineAction::Keep);
                }
                let original = self.resolver.resolve(&fields.axes);
                let target = self.transform.transform(&original);
                Ok(LineAction::Rewrite {
                    original,
                    rewritten: RewrittenMove {
                        target,
                        suffix: fields.suffix,
                    },
                })
            }
        }
    }
}

/// A bad axis word tagged with its 1-based input line number.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    pub line: usize,
    pub cause: BadAxisWord,
}

impl Display for LineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} axis word {:?} is not a number",
            self.line, self.cause.axis, self.cause.word
        )
    }
}

impl Error for LineError {}
