use std::collections::HashMap;

use crate::core::result::{AnalysisResult, AnalysisSummary, Position, RhymeResult};
use crate::core::verse::Verse;
use crate::matching::extractor::CandidateSpan;
use crate::matching::selector::Selection;

/// Display colors handed out to rhyme sequences in order of first appearance
pub const PALETTE: [&str; 12] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#bfef45",
    "#fabed4", "#469990", "#9a6324", "#800000",
];

/// Assigns one palette color per sequence key, cycling when the palette runs out.
///
/// Lives for a single analysis so colors never leak between calls.
#[derive(Debug, Default)]
struct ColorAssigner {
    assigned: HashMap<String, &'static str>,
}

impl ColorAssigner {
    fn color_for(&mut self, sequence_key: &str) -> &'static str {
        if let Some(&color) = self.assigned.get(sequence_key) {
            return color;
        }

        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(sequence_key.to_string(), color);
        color
    }
}

fn position_of(span: &CandidateSpan) -> Position {
    Position {
        line: span.line_index,
        start_char: span.start_index,
        length: span.length,
    }
}

/// Turn committed matches into identified, colored results plus a summary
#[must_use]
pub fn assemble_results(verse: &Verse, selection: Selection<'_>) -> AnalysisResult {
    let mut colors = ColorAssigner::default();

    let results: Vec<RhymeResult> = selection
        .committed
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let sequence = m.first.sequence.clone();
            RhymeResult {
                id: format!("rhyme_{:03}", i + 1),
                rhyme_type: m.rhyme_type,
                rhyme_group: sequence.first().cloned().unwrap_or_default(),
                sequence,
                positions: [position_of(m.first), position_of(m.second)],
                characters: [m.first.characters.clone(), m.second.characters.clone()],
                transcriptions: [
                    m.first.transcriptions.clone(),
                    m.second.transcriptions.clone(),
                ],
                color: colors.color_for(&m.first.sequence_key).to_string(),
                similarity: 1.0,
            }
        })
        .collect();

    let summary = AnalysisSummary {
        total_lines: verse.len(),
        total_rhyme_count: results.len(),
        rhyme_types: selection.counts,
    };

    AnalysisResult {
        verse: verse.clone(),
        results,
        summary,
    }
}
