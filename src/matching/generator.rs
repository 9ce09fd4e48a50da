use std::collections::HashMap;

use tracing::debug;

use crate::core::types::RhymeType;
use crate::core::verse::Verse;
use crate::matching::engine::AnalysisOptions;
use crate::matching::extractor::CandidateSpan;
use crate::matching::scoring::match_priority;

/// Two spans with the same label sequence, classified and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    pub first: &'a CandidateSpan,
    pub second: &'a CandidateSpan,
    pub rhyme_type: RhymeType,
    /// Type-specific distance: lines apart, position offset, or character gap
    pub interval: usize,
    pub priority: i64,
}

impl<'a> CandidateMatch<'a> {
    fn new(
        first: &'a CandidateSpan,
        second: &'a CandidateSpan,
        rhyme_type: RhymeType,
        interval: usize,
    ) -> Self {
        Self {
            first,
            second,
            rhyme_type,
            interval,
            priority: match_priority(rhyme_type, interval, first.length),
        }
    }

    /// Cells of both spans
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.first.cells().chain(self.second.cells())
    }
}

/// Pair up spans sharing a sequence key and keep the pairs that rhyme.
///
/// Pairs are produced in `(i, j)` order over `spans` with `i < j`, which is
/// the tie-break order for selection. Spans are bucketed by key so only
/// pairs with equal keys are visited.
#[must_use]
pub fn generate_matches<'a>(
    spans: &'a [CandidateSpan],
    verse: &Verse,
    options: &AnalysisOptions,
) -> Vec<CandidateMatch<'a>> {
    let mut buckets: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, span) in spans.iter().enumerate() {
        buckets.entry(span.sequence_key.as_str()).or_default().push(i);
    }

    let mut matches = Vec::new();
    for (i, a) in spans.iter().enumerate() {
        let Some(bucket) = buckets.get(a.sequence_key.as_str()) else {
            continue;
        };

        // Bucket indices are increasing; only look at partners after `i`
        let after = bucket.partition_point(|&j| j <= i);
        for &j in &bucket[after..] {
            if let Some(m) = classify(a, &spans[j], verse, options) {
                matches.push(m);
            }
        }
    }

    debug!(
        "Generated {} candidate matches from {} spans",
        matches.len(),
        spans.len()
    );
    matches
}

/// Classify a pair of spans with equal keys.
///
/// Rules are tried in order and the first whose line conditions hold decides
/// the pair: end rhyme, then inter-line rhyme, then internal rhyme.
fn classify<'a>(
    a: &'a CandidateSpan,
    b: &'a CandidateSpan,
    verse: &Verse,
    options: &AnalysisOptions,
) -> Option<CandidateMatch<'a>> {
    let line_diff = a.line_index.abs_diff(b.line_index);
    if line_diff > options.inter_line_line_diff_tolerance {
        return None;
    }
    let same_line = line_diff == 0;

    if options.detect_end_rhyme && (a.is_end_of_line || b.is_end_of_line) {
        return Some(CandidateMatch::new(a, b, RhymeType::EndRhyme, line_diff));
    }

    if options.detect_inter_line_rhyme && !a.is_end_of_line && !b.is_end_of_line && !same_line {
        // Verbatim repetition is not rhyme
        if a.characters == b.characters {
            return None;
        }

        let forward = a.start_index.abs_diff(b.start_index);
        let reverse = tail_offset(a, verse).abs_diff(tail_offset(b, verse));
        let interval = forward.min(reverse);

        return (interval <= options.inter_line_tolerance)
            .then(|| CandidateMatch::new(a, b, RhymeType::InterLineRhyme, interval));
    }

    if options.detect_internal_rhyme && same_line {
        let gap = span_gap(a, b);
        let max_gap = a.length.min(b.length) + options.internal_rhyme_tolerance;

        return (gap <= max_gap).then(|| CandidateMatch::new(a, b, RhymeType::InternalRhyme, gap));
    }

    None
}

/// Characters between the end of the span and the end of its line
fn tail_offset(span: &CandidateSpan, verse: &Verse) -> usize {
    verse
        .line_len(span.line_index)
        .saturating_sub(span.end_index + 1)
}

/// Characters strictly between two spans on the same line; 0 if they touch or overlap
fn span_gap(a: &CandidateSpan, b: &CandidateSpan) -> usize {
    if a.end_index < b.start_index {
        b.start_index - a.end_index - 1
    } else if b.end_index < a.start_index {
        a.start_index - b.end_index - 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verse::{CharInfo, Line};
    use crate::matching::extractor::extract_spans;

    /// Build a line from (character, group) pairs
    fn line(chars: &[(&str, &str)]) -> Line {
        let text: String = chars.iter().map(|(c, _)| *c).collect();
        Line::new(
            text,
            chars
                .iter()
                .map(|(c, g)| CharInfo::new(*c, *c, *g, *g))
                .collect(),
        )
    }

    fn span(line_index: usize, start: usize, end: usize, group: &str) -> CandidateSpan {
        let length = end - start + 1;
        CandidateSpan {
            line_index,
            start_index: start,
            end_index: end,
            length,
            sequence: vec![group.to_string(); length],
            sequence_key: vec![group; length].join("|"),
            characters: (start..=end).map(|i| format!("c{i}")).collect(),
            transcriptions: vec![String::new(); length],
            is_end_of_line: false,
            priority_score: 0,
        }
    }

    #[test]
    fn test_span_gap() {
        assert_eq!(span_gap(&span(0, 0, 0, "a"), &span(0, 3, 3, "a")), 2);
        assert_eq!(span_gap(&span(0, 3, 3, "a"), &span(0, 0, 0, "a")), 2);
        assert_eq!(span_gap(&span(0, 0, 1, "a"), &span(0, 2, 3, "a")), 0);
        assert_eq!(span_gap(&span(0, 0, 2, "a"), &span(0, 1, 3, "a")), 0);
    }

    #[test]
    fn test_end_rhyme_between_adjacent_lines() {
        let verse = Verse::new(vec![
            line(&[("x", "i"), ("a", "ang")]),
            line(&[("y", "u"), ("b", "ang")]),
        ]);
        let spans = extract_spans(&verse);
        let matches = generate_matches(&spans, &verse, &AnalysisOptions::default());

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.rhyme_type, RhymeType::EndRhyme);
        assert_eq!(m.interval, 1);
        assert_eq!(m.priority, 1009);
    }

    #[test]
    fn test_line_distance_gate() {
        let mut lines = vec![line(&[("a", "ang")])];
        for _ in 0..4 {
            lines.push(line(&[("z", "unknown")]));
        }
        lines.push(line(&[("b", "ang")]));
        let verse = Verse::new(lines);
        let spans = extract_spans(&verse);

        let options = AnalysisOptions::default();
        assert_eq!(options.inter_line_line_diff_tolerance, 4);
        assert!(generate_matches(&spans, &verse, &options).is_empty());

        let options = AnalysisOptions {
            inter_line_line_diff_tolerance: 5,
            ..AnalysisOptions::default()
        };
        assert_eq!(generate_matches(&spans, &verse, &options).len(), 1);
    }

    #[test]
    fn test_inter_line_rhyme_interval() {
        let verse = Verse::new(vec![
            line(&[("a", "ang"), ("x", "i"), ("x", "i"), ("x", "i"), ("e", "e")]),
            line(&[("y", "u"), ("y", "u"), ("b", "ang"), ("y", "u"), ("f", "o")]),
        ]);
        let a = span(0, 0, 0, "ang");
        let b = span(1, 2, 2, "ang");

        // forward = 2, reverse = |4 - 2| = 2
        let m = classify(&a, &b, &verse, &AnalysisOptions::default()).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::InterLineRhyme);
        assert_eq!(m.interval, 2);
        assert_eq!(m.priority, 508);

        let strict = AnalysisOptions {
            inter_line_tolerance: 1,
            ..AnalysisOptions::default()
        };
        assert!(classify(&a, &b, &verse, &strict).is_none());
    }

    #[test]
    fn test_inter_line_uses_closer_of_forward_and_reverse() {
        // Same distance from the line end, far apart from the start
        let verse = Verse::new(vec![
            line(&[("a", "ang"), ("x", "i"), ("e", "e")]),
            line(&[("y", "u"), ("y", "u"), ("y", "u"), ("y", "u"), ("b", "ang"), ("x", "i"), ("f", "o")]),
        ]);
        let a = span(0, 0, 0, "ang");
        let b = span(1, 4, 4, "ang");

        let m = classify(&a, &b, &verse, &AnalysisOptions::default()).unwrap();
        assert_eq!(m.interval, 0);
    }

    #[test]
    fn test_inter_line_skips_verbatim_repeats() {
        let verse = Verse::new(vec![
            line(&[("a", "ang"), ("x", "i")]),
            line(&[("a", "ang"), ("y", "u")]),
        ]);
        let a = span(0, 0, 0, "ang");
        let mut b = span(1, 0, 0, "ang");
        b.characters = a.characters.clone();

        assert!(classify(&a, &b, &verse, &AnalysisOptions::default()).is_none());
    }

    #[test]
    fn test_internal_rhyme_gap_boundary() {
        let verse = Verse::new(vec![line(&[
            ("a", "ang"),
            ("x", "i"),
            ("b", "ang"),
            ("x", "i"),
            ("x", "i"),
            ("c", "ang"),
            ("e", "e"),
        ])]);
        let options = AnalysisOptions::default();
        let (a, b, c) = (
            span(0, 0, 0, "ang"),
            span(0, 2, 2, "ang"),
            span(0, 5, 5, "ang"),
        );

        // gap 1 == min(length) + 0: accepted
        let m = classify(&a, &b, &verse, &options).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::InternalRhyme);
        assert_eq!(m.interval, 1);
        assert_eq!(m.priority, 109);

        // gap 2 > 1: rejected
        assert!(classify(&b, &c, &verse, &options).is_none());

        let tolerant = AnalysisOptions {
            internal_rhyme_tolerance: 1,
            ..AnalysisOptions::default()
        };
        assert!(classify(&b, &c, &verse, &tolerant).is_some());
    }

    #[test]
    fn test_overlapping_same_line_spans_pair_up() {
        let verse = Verse::new(vec![line(&[("a", "ang"), ("b", "ang"), ("c", "ang")])]);
        let first = span(0, 0, 1, "ang");
        let mut second = span(0, 1, 2, "ang");
        second.is_end_of_line = true;

        let m = classify(&first, &second, &verse, &AnalysisOptions::default()).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::EndRhyme);
        assert_eq!(m.interval, 0);

        let no_end = AnalysisOptions {
            detect_end_rhyme: false,
            ..AnalysisOptions::default()
        };
        let m = classify(&first, &second, &verse, &no_end).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::InternalRhyme);
        assert_eq!(m.interval, 0);
    }

    #[test]
    fn test_end_rhyme_takes_precedence_on_same_line() {
        let verse = Verse::new(vec![line(&[("a", "ang"), ("b", "ang")])]);
        let a = span(0, 0, 0, "ang");
        let mut b = span(0, 1, 1, "ang");
        b.is_end_of_line = true;

        let m = classify(&a, &b, &verse, &AnalysisOptions::default()).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::EndRhyme);
        assert_eq!(m.interval, 0);

        let no_end = AnalysisOptions {
            detect_end_rhyme: false,
            ..AnalysisOptions::default()
        };
        let m = classify(&a, &b, &verse, &no_end).unwrap();
        assert_eq!(m.rhyme_type, RhymeType::InternalRhyme);
    }

    #[test]
    fn test_disabled_types_produce_nothing() {
        let verse = Verse::new(vec![
            line(&[("a", "ang"), ("x", "i"), ("c", "ang")]),
            line(&[("b", "ang"), ("y", "u"), ("d", "ang")]),
        ]);
        let spans = extract_spans(&verse);
        let options = AnalysisOptions {
            detect_end_rhyme: false,
            detect_inter_line_rhyme: false,
            detect_internal_rhyme: false,
            ..AnalysisOptions::default()
        };
        assert!(generate_matches(&spans, &verse, &options).is_empty());
    }

    #[test]
    fn test_generation_order_follows_span_order() {
        let verse = Verse::new(vec![
            line(&[("a", "ang"), ("b", "ang")]),
            line(&[("c", "ang"), ("d", "ang")]),
        ]);
        let spans = extract_spans(&verse);
        let matches = generate_matches(&spans, &verse, &AnalysisOptions::default());

        let position = |s: &CandidateSpan| {
            spans
                .iter()
                .position(|x| std::ptr::eq(x, s))
                .unwrap()
        };
        let order: Vec<(usize, usize)> = matches
            .iter()
            .map(|m| (position(m.first), position(m.second)))
            .collect();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
        assert!(order.iter().all(|(i, j)| i < j));
    }
}
