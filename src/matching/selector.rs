use std::collections::HashSet;

use tracing::debug;

use crate::core::result::RhymeTypeCounts;
use crate::matching::generator::CandidateMatch;

/// Matches committed by [`select_matches`], in commitment order
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    pub committed: Vec<CandidateMatch<'a>>,
    pub counts: RhymeTypeCounts,
}

/// Greedily commit the highest-priority matches whose cells are all free.
///
/// Matches are stably sorted by descending priority, so ties keep generation
/// order. A match is committed only if none of the cells of either span has
/// been claimed; committing claims all of them. This is a greedy pass, not an
/// optimal assignment: a high-priority match can block two lower ones whose
/// combined value is larger.
#[must_use]
pub fn select_matches<'a>(mut matches: Vec<CandidateMatch<'a>>) -> Selection<'a> {
    matches.sort_by(|a, b| b.priority.cmp(&a.priority));

    let total = matches.len();
    let mut claimed: HashSet<(usize, usize)> = HashSet::new();
    let mut selection = Selection::default();

    for m in matches {
        if m.cells().any(|cell| claimed.contains(&cell)) {
            continue;
        }

        claimed.extend(m.cells());
        selection.counts.record(m.rhyme_type);
        selection.committed.push(m);
    }

    debug!(
        "Committed {} of {} candidate matches ({} cells claimed)",
        selection.committed.len(),
        total,
        claimed.len()
    );
    selection
}
