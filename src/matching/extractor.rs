use serde::Serialize;
use tracing::debug;

use crate::core::verse::Verse;
use crate::matching::scoring::span_priority;

/// Separator between labels in a span's sequence key
pub const SEQUENCE_KEY_SEPARATOR: &str = "|";

/// A contiguous run of rhyme-labelled characters within one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSpan {
    pub line_index: usize,
    pub start_index: usize,
    /// Inclusive
    pub end_index: usize,
    pub length: usize,
    /// Coarse rhyme-group label of each character
    pub sequence: Vec<String>,
    /// `sequence` joined with [`SEQUENCE_KEY_SEPARATOR`]
    pub sequence_key: String,
    pub characters: Vec<String>,
    pub transcriptions: Vec<String>,
    pub is_end_of_line: bool,
    pub priority_score: i64,
}

impl CandidateSpan {
    /// Every `(line, char)` cell covered by this span
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start_index..=self.end_index).map(move |c| (self.line_index, c))
    }
}

/// Enumerate every valid span in every line, highest priority first.
///
/// A span `[start, end]` is valid when none of its characters has an
/// `unknown` or empty coarse label. Extending a span past such a character can
/// never become valid again, so the scan for a start position stops there.
/// The sort is stable: equal priorities keep (line, start, end) order.
#[must_use]
pub fn extract_spans(verse: &Verse) -> Vec<CandidateSpan> {
    let mut spans = Vec::new();

    for (line_index, line) in verse.lines.iter().enumerate() {
        let line_len = line.len();

        for start in 0..line_len {
            let mut sequence = Vec::new();
            let mut characters = Vec::new();
            let mut transcriptions = Vec::new();

            for end in start..line_len {
                let info = &line.chars[end];
                if !info.has_rhyme_group() {
                    break;
                }

                sequence.push(info.normal_group.clone());
                characters.push(info.character.clone());
                transcriptions.push(info.transcription.clone());

                let length = end - start + 1;
                let is_end_of_line = end == line_len - 1;
                spans.push(CandidateSpan {
                    line_index,
                    start_index: start,
                    end_index: end,
                    length,
                    sequence_key: sequence.join(SEQUENCE_KEY_SEPARATOR),
                    sequence: sequence.clone(),
                    characters: characters.clone(),
                    transcriptions: transcriptions.clone(),
                    is_end_of_line,
                    priority_score: span_priority(is_end_of_line, length),
                });
            }
        }
    }

    spans.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

    debug!(
        "Extracted {} candidate spans from {} lines",
        spans.len(),
        verse.len()
    );
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verse::{CharInfo, Line, UNKNOWN_GROUP};

    fn line(groups: &[&str]) -> Line {
        let chars = groups
            .iter()
            .enumerate()
            .map(|(i, g)| CharInfo::new(format!("c{i}"), format!("t{i}"), *g, *g))
            .collect();
        Line::new("", chars)
    }

    #[test]
    fn test_all_spans_of_clean_line() {
        let verse = Verse::new(vec![line(&["a", "b", "c"])]);
        let spans = extract_spans(&verse);
        // n * (n + 1) / 2
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_unknown_breaks_spans() {
        let verse = Verse::new(vec![line(&["a", UNKNOWN_GROUP, "b", ""])]);
        let spans = extract_spans(&verse);

        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.length == 1));
        assert!(spans
            .iter()
            .all(|s| !s.sequence.iter().any(|g| g == UNKNOWN_GROUP || g.is_empty())));
        // The last character is unlabelled, so no span ends the line
        assert!(spans.iter().all(|s| !s.is_end_of_line));
    }

    #[test]
    fn test_span_fields() {
        let verse = Verse::new(vec![line(&["x", "ang", "an"])]);
        let spans = extract_spans(&verse);
        let span = spans
            .iter()
            .find(|s| s.start_index == 1 && s.end_index == 2)
            .unwrap();

        assert_eq!(span.length, 2);
        assert_eq!(span.sequence, vec!["ang", "an"]);
        assert_eq!(span.sequence_key, "ang|an");
        assert_eq!(span.characters, vec!["c1", "c2"]);
        assert_eq!(span.transcriptions, vec!["t1", "t2"]);
        assert!(span.is_end_of_line);
        assert_eq!(span.priority_score, 1020);
        assert_eq!(span.cells().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_sorted_by_priority() {
        let verse = Verse::new(vec![line(&["a", "b"]), line(&["c", "d", "e"])]);
        let spans = extract_spans(&verse);

        assert!(spans
            .windows(2)
            .all(|w| w[0].priority_score >= w[1].priority_score));
        // Longest end-of-line span comes first
        assert_eq!(spans[0].line_index, 1);
        assert_eq!(spans[0].length, 3);
    }

    #[test]
    fn test_empty_verse() {
        assert!(extract_spans(&Verse::default()).is_empty());
        assert!(extract_spans(&Verse::new(vec![line(&[])])).is_empty());
    }
}
