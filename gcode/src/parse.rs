use crate::coordinates::PartialPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    AbsoluteMode,
    RelativeMode,
    /// Anything else is a candidate for coordinate extraction; candidates
    /// without axis words degrade to pass-through.
    Motion,
}

// Start-anchored with a word boundary after the token, so "G911" is not "G91".
fn matches_word(line: &str, word: &str) -> bool {
    line.starts_with(word)
        && line[word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric())
}

pub fn classify(line: &str) -> LineKind {
    if matches_word(line, "G90") {
        LineKind::AbsoluteMode
    } else if matches_word(line, "G91") {
        LineKind::RelativeMode
    } else {
        LineKind::Motion
    }
}

/// An X or Y word whose value does not parse as a number. Guessing here would
/// silently corrupt the toolpath, so this fails the run.
#[derive(Debug, Clone, PartialEq)]
pub struct BadAxisWord {
    pub axis: char,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionFields {
    pub axes: PartialPosition,
    /// Whatever trailed the command word, axis words removed, spacing intact.
    pub suffix: String,
}

/// Single pass over one line: read the first X and Y words, strip every
/// space-or-start-preceded X/Y word (duplicates included), and keep the rest
/// of the line byte-for-byte as the command suffix.
pub fn scan_axis_words(line: &str) -> Result<MotionFields, BadAxisWord> {
    let bytes = line.as_bytes();
    let mut axes = PartialPosition::default();
    let mut stripped = String::with_capacity(line.len());
    let mut kept_from = 0;
    let mut leading_axis_word = false;
    let mut i = 0;
    while i < bytes.len() {
        let label = bytes[i];
        let at_token_start = i == 0 || bytes[i - 1] == b' ';
        if at_token_start && (label == b'X' || label == b'Y') {
            let mut end = i + 1;
            while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            let word = &line[i + 1..end];
            if word.is_empty() {
                // A bare label is not an axis word; leave it in place.
                i = end;
                continue;
            }
            let slot = if label == b'X' { &mut axes.0 } else { &mut axes.1 };
            if slot.is_none() {
                *slot = Some(word.parse::<f64>().map_err(|_| BadAxisWord {
                    axis: label as char,
                    word: word.to_string(),
                })?);
            }
            if i == 0 {
                leading_axis_word = true;
            }
            // Drop the word together with the space before it.
            let cut = if i > 0 { i - 1 } else { i };
            stripped.push_str(&line[kept_from..cut]);
            kept_from = end;
            i = end;
        } else {
            i += 1;
        }
    }
    stripped.push_str(&line[kept_from..]);
    // A line that opened with an axis word has no command word to drop.
    let suffix = if leading_axis_word {
        stripped
    } else {
        strip_command_word(&stripped).to_string()
    };
    Ok(MotionFields { axes, suffix })
}

// The rewritten line starts with its own "G1 X... Y..."; the original command
// word is dropped as a whole token.
fn strip_command_word(stripped: &str) -> &str {
    let trimmed = stripped.trim_start();
    let word_start = stripped.len() - trimmed.len();
    match trimmed.find(|c: char| c.is_ascii_whitespace()) {
        Some(word_len) => &stripped[word_start + word_len..],
        None => "",
    }
}
