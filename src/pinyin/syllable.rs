//! Syllable-level matching of a query against one pinyin variant.

use crate::fuzzy_matcher::{BONUS_CONSECUTIVE, BONUS_EXACT_MATCH, SCORE_MATCH, ScoreType};

use super::MAX_CONSECUTIVE_SKIPPED_SYLLABLES;

/// Length of `part` in code points when `remaining` starts with it.
fn full_syllable(remaining: &[char], part: &str) -> Option<usize> {
    let mut len = 0;
    let mut chars = remaining.iter();
    for c in part.chars() {
        if chars.next() != Some(&c) {
            return None;
        }
        len += 1;
    }
    Some(len)
}

/// Whether `remaining` is a prefix of `part`.
fn partial_syllable(remaining: &[char], part: &str) -> bool {
    let mut chars = part.chars();
    remaining.iter().all(|&r| chars.next() == Some(r))
}

/// Walk `parts` and `pattern` together.
///
/// At each syllable the remaining query either consumes the whole syllable,
/// is a prefix of it (typing in progress), or the syllable is skipped. Once
/// anything has been skipped, partial syllables are no longer accepted, so
/// initials cannot be mixed with half-typed syllables. A lone trailing
/// character after a matched syllable is rejected outright; initials are
/// handled by the first-letter forms instead.
///
/// Returns the score when the query is fully consumed.
pub(crate) fn match_syllables(parts: &[String], pattern: &[char]) -> Option<ScoreType> {
    if pattern.is_empty() || parts.is_empty() {
        return None;
    }

    let mut pos = 0;
    let mut idx = 0;
    let mut matched: ScoreType = 0;
    let mut skipped = 0usize;
    let mut consecutive_skipped = 0usize;
    let mut last_partial = false;

    while pos < pattern.len() && idx < parts.len() {
        let part = parts[idx].as_str();
        let remaining = &pattern[pos..];
        idx += 1;

        if let Some(len) = full_syllable(remaining, part) {
            pos += len;
            matched += 1;
            last_partial = false;
            consecutive_skipped = 0;
            continue;
        }

        let part_len = part.chars().count();
        if remaining.len() <= part_len
            && partial_syllable(remaining, part)
            && !(skipped > 0 && remaining.len() < part_len)
        {
            if matched > 0 && remaining.len() == 1 {
                return None;
            }
            pos += remaining.len();
            matched += 1;
            last_partial = true;
            consecutive_skipped = 0;
            continue;
        }

        skipped += 1;
        consecutive_skipped += 1;
        if matched > 0 && consecutive_skipped > MAX_CONSECUTIVE_SKIPPED_SYLLABLES {
            return None;
        }
    }

    if pos != pattern.len() || matched == 0 {
        return None;
    }

    let mut score = matched * SCORE_MATCH * 2;
    if skipped == 0 {
        score += BONUS_CONSECUTIVE * matched;
        if !last_partial && idx == parts.len() {
            score += BONUS_EXACT_MATCH;
        }
    }
    Some(score)
}
