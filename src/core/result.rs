use serde::{Deserialize, Serialize};

use crate::core::types::RhymeType;
use crate::core::verse::Verse;

/// Location of one side of a rhyme: a run of characters on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: usize,
    pub start_char: usize,
    pub length: usize,
}

impl Position {
    /// True if the cell `(line, char_index)` falls inside this position
    #[must_use]
    pub fn covers(&self, line: usize, char_index: usize) -> bool {
        self.line == line
            && char_index >= self.start_char
            && char_index < self.start_char + self.length
    }

    /// Every `(line, char_index)` cell inside this position
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start_char..self.start_char + self.length).map(move |c| (self.line, c))
    }
}

/// A committed rhyme between two spans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RhymeResult {
    /// Sequential identifier in commitment order (`rhyme_001`, ...)
    pub id: String,

    pub rhyme_type: RhymeType,

    /// First label of `sequence`
    pub rhyme_group: String,

    /// Coarse rhyme-group labels shared by both spans
    pub sequence: Vec<String>,

    pub positions: [Position; 2],

    pub characters: [Vec<String>; 2],

    pub transcriptions: [Vec<String>; 2],

    /// Display color, shared by all results with the same label sequence
    pub color: String,

    /// Always 1.0: only identical label sequences are matched
    pub similarity: f64,
}

impl RhymeResult {
    /// True if either side of this rhyme covers the cell
    #[must_use]
    pub fn touches(&self, line: usize, char_index: usize) -> bool {
        self.positions.iter().any(|p| p.covers(line, char_index))
    }
}

/// Result counts by type.
///
/// `internal_rhyme` counts every result that is not an end rhyme, so
/// inter-line rhymes land in it too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RhymeTypeCounts {
    pub end_rhyme: usize,
    pub internal_rhyme: usize,
}

impl RhymeTypeCounts {
    pub fn record(&mut self, rhyme_type: RhymeType) {
        match rhyme_type {
            RhymeType::EndRhyme => self.end_rhyme += 1,
            RhymeType::InterLineRhyme | RhymeType::InternalRhyme => self.internal_rhyme += 1,
        }
    }
}

/// Aggregate statistics of an analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_lines: usize,
    pub total_rhyme_count: usize,
    pub rhyme_types: RhymeTypeCounts,
}

/// Everything an analysis produces, handed to renderers as is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verse: Verse,
    pub results: Vec<RhymeResult>,
    pub summary: AnalysisSummary,
}

impl AnalysisResult {
    /// All results whose positions cover the cell `(line, char_index)`
    #[must_use]
    pub fn results_at(&self, line: usize, char_index: usize) -> Vec<&RhymeResult> {
        self.results
            .iter()
            .filter(|r| r.touches(line, char_index))
            .collect()
    }
}
