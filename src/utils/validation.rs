//! Centralized input limits.
//!
//! Span extraction is quadratic in line length and match generation is
//! quadratic in the span count, so verse size is bounded before analysis.

use crate::core::verse::Verse;

/// Maximum number of lines analysed in one call (DOS protection)
pub const MAX_LINES: usize = 1_000;

/// Maximum number of characters in a single line (DOS protection)
pub const MAX_LINE_LENGTH: usize = 500;

/// Verse size validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Too many lines: {count} exceeds maximum of {max}")]
    TooManyLines { count: usize, max: usize },
    #[error("Line {line} is too long: {length} characters exceeds maximum of {max}")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },
}

/// Check a verse against line-count and line-length limits.
///
/// Line numbers in errors are 0-based, matching result positions.
///
/// # Errors
///
/// Returns `ValidationError::TooManyLines` if the verse has more than
/// `max_lines` lines, or `ValidationError::LineTooLong` for the first line
/// with more than `max_line_length` characters.
pub fn check_verse_size(
    verse: &Verse,
    max_lines: usize,
    max_line_length: usize,
) -> Result<(), ValidationError> {
    if verse.len() > max_lines {
        return Err(ValidationError::TooManyLines {
            count: verse.len(),
            max: max_lines,
        });
    }

    if let Some((line, l)) = verse
        .lines
        .iter()
        .enumerate()
        .find(|(_, l)| l.len() > max_line_length)
    {
        return Err(ValidationError::LineTooLong {
            line,
            length: l.len(),
            max: max_line_length,
        });
    }

    Ok(())
}
