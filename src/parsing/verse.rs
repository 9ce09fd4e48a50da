use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::core::verse::{CharInfo, Line, Verse};

/// Structural problems in an untyped verse document.
///
/// Line and character indices are 0-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Verse must be an ordered sequence of lines")]
    InputShape,

    #[error("Line {line} has no {field}")]
    LineShape { line: usize, field: &'static str },

    #[error("Character {index} of line {line} has no text value for '{field}'")]
    CharInfoShape {
        line: usize,
        index: usize,
        field: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid verse: {0}")]
    Shape(#[from] ShapeError),
}

const CHAR_FIELDS: [&str; 4] = ["character", "transcription", "normalGroup", "strictGroup"];

/// Parse a verse JSON file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json` if
/// it is not JSON, or `ParseError::Shape` if the document is not a verse.
pub fn parse_verse_file(path: &Path) -> Result<Verse, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_verse_text(&content)
}

/// Parse a verse from JSON text
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON or `ParseError::Shape` if the
/// document is not a verse.
pub fn parse_verse_text(text: &str) -> Result<Verse, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(verse_from_value(&value)?)
}

/// Convert an untyped JSON document into a [`Verse`].
///
/// The whole document is checked before anything is returned: the root must
/// be an array, every line an object with a string `text` and an array
/// `chars`, and every character an object whose four label fields are
/// strings. Extra fields are ignored.
///
/// # Errors
///
/// Returns the first `ShapeError` found, scanning lines and characters in order.
pub fn verse_from_value(value: &Value) -> Result<Verse, ShapeError> {
    let lines = value.as_array().ok_or(ShapeError::InputShape)?;

    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, line)| line_from_value(i, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Verse::new(lines))
}

fn line_from_value(line: usize, value: &Value) -> Result<Line, ShapeError> {
    let text = value
        .get("text")
        .and_then(Value::as_str)
        .ok_or(ShapeError::LineShape {
            line,
            field: "text",
        })?;

    let chars = value
        .get("chars")
        .and_then(Value::as_array)
        .ok_or(ShapeError::LineShape {
            line,
            field: "chars",
        })?;

    let chars = chars
        .iter()
        .enumerate()
        .map(|(index, c)| char_from_value(line, index, c))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line::new(text, chars))
}

fn char_from_value(line: usize, index: usize, value: &Value) -> Result<CharInfo, ShapeError> {
    let mut fields = [""; 4];
    for (slot, field) in fields.iter_mut().zip(CHAR_FIELDS) {
        *slot = value
            .get(field)
            .and_then(Value::as_str)
            .ok_or(ShapeError::CharInfoShape { line, index, field })?;
    }

    let [character, transcription, normal_group, strict_group] = fields;
    Ok(CharInfo::new(
        character,
        transcription,
        normal_group,
        strict_group,
    ))
}
