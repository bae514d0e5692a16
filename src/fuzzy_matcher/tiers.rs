//! The match tiers: exact, prefix, subsequence, then (through the caller)
//! transliteration, and finally plain substring containment.

use super::score::{is_boundary, min_score_threshold, score};
use super::{BONUS_EXACT_MATCH, BONUS_FIRST_CHAR_MATCH, BONUS_PREFIX_MATCH, Haystack, SCORE_MATCH, ScoreType};
use crate::MatchOutcome;
use crate::pool;

/// How far past a non-boundary match to look for the same character on a
/// boundary.
pub(crate) const LOOKAHEAD_WINDOW: usize = 10;

/// Shortest query the substring fallback accepts. Single characters have to
/// clear the subsequence threshold, unless the candidate is short.
pub(crate) const MIN_SUBSTRING_FALLBACK_LEN: usize = 2;

/// Candidates up to this many characters let a single-character query fall
/// back to containment.
pub(crate) const SHORT_CANDIDATE_LEN: usize = 2;

/// Run every tier in priority order; the first one that accepts wins.
///
/// `transliterate` is consulted after the subsequence tier fails and before
/// the substring fallback, so routes that cannot transliterate pass `|| None`.
pub(crate) fn run_tiers<H, F>(text: &H, pattern: &H, transliterate: F) -> MatchOutcome
where
    H: Haystack,
    F: FnOnce() -> Option<MatchOutcome>,
{
    let n = text.len();
    let k = pattern.len();
    if k == 0 {
        return MatchOutcome::matched(0);
    }

    let fits = k <= n;
    if fits {
        if let Some(outcome) = exact_or_prefix(text, pattern) {
            return outcome;
        }
        if let Some(outcome) = subsequence(text, pattern) {
            return outcome;
        }
    }

    if let Some(outcome) = transliterate() {
        return outcome;
    }

    let fallback_allowed = k >= MIN_SUBSTRING_FALLBACK_LEN || n <= SHORT_CANDIDATE_LEN;
    if fits && fallback_allowed && contains(text, pattern) {
        return MatchOutcome::matched(k as ScoreType);
    }

    MatchOutcome::NO_MATCH
}

#[inline]
fn eq_at<H: Haystack>(text: &H, pattern: &H, offset: usize) -> bool {
    (0..pattern.len()).all(|i| text.folded(offset + i) == pattern.folded(i))
}

fn exact_or_prefix<H: Haystack>(text: &H, pattern: &H) -> Option<MatchOutcome> {
    if !eq_at(text, pattern, 0) {
        return None;
    }
    let k = pattern.len() as ScoreType;
    let score = if text.len() == pattern.len() {
        BONUS_EXACT_MATCH + k * SCORE_MATCH
    } else {
        BONUS_PREFIX_MATCH + k * SCORE_MATCH + BONUS_FIRST_CHAR_MATCH
    };
    Some(MatchOutcome::matched(score))
}

fn contains<H: Haystack>(text: &H, pattern: &H) -> bool {
    let (n, k) = (text.len(), pattern.len());
    k <= n && (0..=n - k).any(|offset| eq_at(text, pattern, offset))
}

/// Left-most subsequence scan. Fills `out` with one index per query
/// character and returns whether every character was found in order.
pub(crate) fn find_subsequence<H: Haystack>(text: &H, pattern: &H, out: &mut Vec<usize>) -> bool {
    out.clear();
    let k = pattern.len();
    let mut pi = 0;
    for ti in 0..text.len() {
        if pi == k {
            break;
        }
        if text.folded(ti) == pattern.folded(pi) {
            out.push(ti);
            pi += 1;
        }
    }
    pi == k
}

/// Move non-boundary matches forward onto a boundary occurrence of the same
/// character, without passing the next match or the lookahead window.
/// A match directly after the previous one stays put.
pub(crate) fn improve_positions<H: Haystack>(text: &H, pattern: &H, matched: &mut [usize]) {
    for qi in 0..matched.len() {
        let idx = matched[qi];
        let consecutive = qi > 0 && matched[qi - 1] + 1 == idx;
        if consecutive || is_boundary(text, idx) {
            continue;
        }
        let limit = matched
            .get(qi + 1)
            .copied()
            .unwrap_or(text.len())
            .min(idx + 1 + LOOKAHEAD_WINDOW);
        let target = pattern.folded(qi);
        if let Some(better) = (idx + 1..limit).find(|&j| text.folded(j) == target && is_boundary(text, j)) {
            matched[qi] = better;
        }
    }
}

/// Score of the better of the left-most positions and their improved form.
fn best_score<H: Haystack>(text: &H, pattern: &H, leftmost: &[usize]) -> ScoreType {
    let mut improved = pool::indices().acquire();
    improved.extend_from_slice(leftmost);
    improve_positions(text, pattern, &mut improved);
    score(text, &improved).max(score(text, leftmost))
}

fn subsequence<H: Haystack>(text: &H, pattern: &H) -> Option<MatchOutcome> {
    let mut matched = pool::indices().acquire();
    if !find_subsequence(text, pattern, &mut matched) {
        return None;
    }

    let score = best_score(text, pattern, &matched);
    if score < min_score_threshold(pattern.len(), text.len()) {
        return None;
    }
    Some(MatchOutcome::matched(score))
}
