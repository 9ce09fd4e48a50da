use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::result::AnalysisResult;
use crate::core::verse::Verse;
use crate::matching::assembler::assemble_results;
use crate::matching::extractor::{extract_spans, CandidateSpan};
use crate::matching::generator::generate_matches;
use crate::matching::selector::select_matches;
use crate::parsing::verse::{verse_from_value, ShapeError};
use crate::utils::validation::{check_verse_size, ValidationError, MAX_LINES, MAX_LINE_LENGTH};

/// Default maximum position offset for inter-line rhymes
pub const DEFAULT_INTER_LINE_TOLERANCE: usize = 2;

/// Default maximum number of lines between two spans of any cross-line rhyme
pub const DEFAULT_LINE_DIFF_TOLERANCE: usize = 4;

/// Default extra gap allowed between the two sides of an internal rhyme
pub const DEFAULT_INTERNAL_RHYME_TOLERANCE: usize = 0;

/// Why an analysis was refused. Nothing is analysed when any of these occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Size(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the rhyme engine.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Match spans at the end of a line
    pub detect_end_rhyme: bool,
    /// Match non-terminal spans on different lines
    pub detect_inter_line_rhyme: bool,
    /// Match spans on the same line
    pub detect_internal_rhyme: bool,
    /// Maximum position offset for inter-line rhymes
    pub inter_line_tolerance: usize,
    /// Maximum line distance for any cross-line match
    pub inter_line_line_diff_tolerance: usize,
    /// Extra gap allowed for internal rhymes, on top of the shorter span's length
    pub internal_rhyme_tolerance: usize,
    /// Largest verse accepted, in lines
    pub max_lines: usize,
    /// Longest line accepted, in characters
    pub max_line_length: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            detect_end_rhyme: true,
            detect_inter_line_rhyme: true,
            detect_internal_rhyme: true,
            inter_line_tolerance: DEFAULT_INTER_LINE_TOLERANCE,
            inter_line_line_diff_tolerance: DEFAULT_LINE_DIFF_TOLERANCE,
            internal_rhyme_tolerance: DEFAULT_INTERNAL_RHYME_TOLERANCE,
            max_lines: MAX_LINES,
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl AnalysisOptions {
    /// Load options from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Io` if the file cannot be read or
    /// `OptionsError::Json` if it is not a valid options object.
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse options from JSON text
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Json` if the text is not a valid options object.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The rhyme engine: extraction, pairing, greedy selection and assembly.
///
/// Holds only its options; every call owns its working state, so one engine
/// can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RhymeEngine {
    options: AnalysisOptions,
}

impl RhymeEngine {
    #[must_use]
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyse a verse
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Size` if the verse exceeds the configured limits.
    pub fn analyze(&self, verse: &Verse) -> Result<AnalysisResult, AnalysisError> {
        let spans = self.extract_spans(verse)?;
        let matches = generate_matches(&spans, verse, &self.options);
        let selection = select_matches(matches);
        let result = assemble_results(verse, selection);

        debug!(
            "Analysis found {} rhymes ({} end, {} other) in {} lines",
            result.summary.total_rhyme_count,
            result.summary.rhyme_types.end_rhyme,
            result.summary.rhyme_types.internal_rhyme,
            result.summary.total_lines
        );
        Ok(result)
    }

    /// Validate an untyped JSON verse, then analyse it
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Shape` if the document is not a verse, or
    /// `AnalysisError::Size` if it exceeds the configured limits.
    pub fn analyze_value(&self, value: &serde_json::Value) -> Result<AnalysisResult, AnalysisError> {
        let verse = verse_from_value(value)?;
        self.analyze(&verse)
    }

    /// Candidate spans of a verse, highest priority first
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Size` if the verse exceeds the configured limits.
    pub fn extract_spans(&self, verse: &Verse) -> Result<Vec<CandidateSpan>, AnalysisError> {
        check_verse_size(verse, self.options.max_lines, self.options.max_line_length)?;
        Ok(extract_spans(verse))
    }
}
