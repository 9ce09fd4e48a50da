use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::verse::{CharInfo, Line, Verse};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read phonetic table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid phonetic table format: {0}")]
    InvalidFormat(String),
}

/// Phonetic labels for one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub transcription: String,
    pub normal_group: String,
    pub strict_group: String,
}

/// Character-to-rhyme-group mapping used to turn raw text into a [`Verse`].
///
/// A table is built once and is immutable afterwards; text can only be
/// converted through an instance, so there is no "not yet loaded" state.
#[derive(Debug, Clone, Default)]
pub struct PhoneticTable {
    readings: HashMap<char, Reading>,
}

impl PhoneticTable {
    /// Load a table from a TSV file
    ///
    /// # Errors
    ///
    /// Returns `TableError::Io` if the file cannot be read, or
    /// `TableError::InvalidFormat` if the content is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_tsv(&content)
    }

    /// Parse a TSV table with columns: character, transcription, normal group, strict group
    ///
    /// Blank lines and `#` comments are skipped, as is a header row whose first
    /// field is `char` or `character`. When a character is listed more than once
    /// its first reading is kept.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidFormat` if a row has fewer than 4 fields,
    /// its first field is not exactly one character, or no rows are found.
    pub fn from_tsv(text: &str) -> Result<Self, TableError> {
        let mut readings = HashMap::new();
        let mut first_data_line = true;

        for (i, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

            if first_data_line {
                first_data_line = false;
                let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
                if first == "char" || first == "character" {
                    continue;
                }
            }

            // Line numbers in errors are 1-based for user friendliness
            let line_num = i + 1;

            if fields.len() < 4 {
                return Err(TableError::InvalidFormat(format!(
                    "Line {line_num} has fewer than 4 fields"
                )));
            }

            let mut chars = fields[0].chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(TableError::InvalidFormat(format!(
                        "Line {line_num}: expected a single character, found '{}'",
                        fields[0]
                    )))
                }
            };

            let reading = Reading {
                transcription: fields[1].to_string(),
                normal_group: fields[2].to_string(),
                strict_group: fields[3].to_string(),
            };

            if readings.contains_key(&ch) {
                warn!("Duplicate reading for '{ch}' on line {line_num}, keeping the first");
                continue;
            }
            readings.insert(ch, reading);
        }

        if readings.is_empty() {
            return Err(TableError::InvalidFormat(
                "No characters found in table".to_string(),
            ));
        }

        debug!("Loaded phonetic table with {} characters", readings.len());
        Ok(Self { readings })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub fn get(&self, ch: char) -> Option<&Reading> {
        self.readings.get(&ch)
    }

    /// Label one character; unmapped characters get the `unknown` group
    #[must_use]
    pub fn char_info(&self, ch: char) -> CharInfo {
        match self.readings.get(&ch) {
            Some(r) => CharInfo::new(
                ch.to_string(),
                r.transcription.clone(),
                r.normal_group.clone(),
                r.strict_group.clone(),
            ),
            None => CharInfo::unknown(ch.to_string()),
        }
    }

    /// Convert raw text into a verse, one line per non-blank input line
    #[must_use]
    pub fn to_verse(&self, text: &str) -> Verse {
        let lines = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .map(|l| Line::new(l, l.chars().map(|c| self.char_info(c)).collect()))
            .collect();

        Verse::new(lines)
    }
}
