use crate::core::types::RhymeType;

/// Bonus for spans that end their line
pub const END_OF_LINE_BONUS: i64 = 1000;

/// Score added per character of span length
pub const LENGTH_WEIGHT: i64 = 10;

/// Safely convert a character count or distance to a score component
#[inline]
fn count_to_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Priority of a single span: end-of-line spans first, then longer spans
#[must_use]
pub fn span_priority(is_end_of_line: bool, length: usize) -> i64 {
    let bonus = if is_end_of_line { END_OF_LINE_BONUS } else { 0 };
    bonus + count_to_i64(length) * LENGTH_WEIGHT
}

/// Priority of a candidate match: type base, minus interval, plus length bonus
#[must_use]
pub fn match_priority(rhyme_type: RhymeType, interval: usize, length: usize) -> i64 {
    rhyme_type.base_priority() - count_to_i64(interval) + count_to_i64(length) * LENGTH_WEIGHT
}
