//! Scoring of a matched-index set and the minimum acceptable score.

use super::{
    BONUS_BOUNDARY, BONUS_CAMEL_CASE, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MATCH, BONUS_NON_WORD, Haystack,
    SCORE_GAP_EXTENSION, SCORE_GAP_START, SCORE_MATCH, ScoreType,
};

/// Floor for the penalty on characters before the first match.
const MAX_LEADING_GAP_PENALTY: ScoreType = -15;
/// Floor for the penalty on characters after the last match.
const MAX_TRAILING_GAP_PENALTY: ScoreType = -10;
/// Above this query/candidate length ratio the match earns a coverage bonus.
const MATCH_RATIO_BONUS_THRESHOLD: f64 = 0.5;
const MATCH_RATIO_BONUS_SCALE: f64 = 10.0;

#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ' ' | '-' | '_' | '.' | '/' | '\\' | ':' | ',' | ';' | '(' | ')' | '[' | ']' | '{' | '}'
    )
}

#[inline]
fn is_word(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

#[inline]
fn is_camel_transition(prev: char, cur: char) -> bool {
    prev.is_lowercase() && cur.is_uppercase()
}

#[inline]
fn is_non_word_transition(prev: char, cur: char) -> bool {
    !is_word(prev) && is_word(cur)
}

#[inline]
fn is_digit_transition(prev: char, cur: char) -> bool {
    (prev.is_alphabetic() && cur.is_numeric()) || (prev.is_numeric() && cur.is_alphabetic())
}

/// Whether position `i` is a natural word start: string start, after a
/// delimiter, a camelCase hump, a non-word to word step, or a letter/digit
/// switch.
pub(crate) fn is_boundary<H: Haystack>(text: &H, i: usize) -> bool {
    if i == 0 {
        return true;
    }
    if i >= text.len() {
        return false;
    }
    let prev = text.original(i - 1);
    let cur = text.original(i);
    is_camel_transition(prev, cur)
        || is_delimiter(prev)
        || is_non_word_transition(prev, cur)
        || is_digit_transition(prev, cur)
}

/// Score a strictly increasing matched-index set over `text`.
pub(crate) fn score<H: Haystack>(text: &H, matched: &[usize]) -> ScoreType {
    if matched.is_empty() {
        return 0;
    }

    let mut score: ScoreType = 0;
    let mut prev_idx: Option<usize> = None;

    for &idx in matched {
        score += SCORE_MATCH;

        if idx == 0 {
            score += BONUS_FIRST_CHAR_MATCH;
        } else {
            let prev = text.original(idx - 1);
            let cur = text.original(idx);
            if is_camel_transition(prev, cur) {
                score += BONUS_CAMEL_CASE;
            }
            if is_delimiter(prev) {
                score += BONUS_BOUNDARY;
            }
            if is_non_word_transition(prev, cur) {
                score += BONUS_NON_WORD;
            }
        }

        match prev_idx {
            Some(p) if idx == p + 1 => score += BONUS_CONSECUTIVE,
            Some(p) => {
                let gap = (idx - p - 1) as ScoreType;
                score += SCORE_GAP_START + (gap - 1) * SCORE_GAP_EXTENSION;
            }
            None if idx > 0 => {
                score += (idx as ScoreType * SCORE_GAP_EXTENSION).max(MAX_LEADING_GAP_PENALTY);
            }
            None => {}
        }

        prev_idx = Some(idx);
    }

    let n = text.len();
    if let Some(last) = prev_idx
        && last + 1 < n
    {
        let trailing = (n - last - 1) as ScoreType;
        score += (trailing * SCORE_GAP_EXTENSION / 2).max(MAX_TRAILING_GAP_PENALTY);
    }

    let ratio = matched.len() as f64 / n as f64;
    if ratio > MATCH_RATIO_BONUS_THRESHOLD {
        score += (ratio * MATCH_RATIO_BONUS_SCALE) as ScoreType;
    }

    score
}

/// Minimum score a subsequence match of `k` query characters over `n`
/// candidate characters needs to be accepted.
pub(crate) fn min_score_threshold(k: usize, n: usize) -> ScoreType {
    let kk = k as ScoreType;
    match k {
        0 => 0,
        1 if n <= 2 => SCORE_MATCH,
        // needs a boundary or the first position
        1 => SCORE_MATCH + BONUS_BOUNDARY,
        2 if n <= 4 => SCORE_MATCH * 2,
        2 => SCORE_MATCH * 2 + BONUS_CONSECUTIVE,
        3 if n <= 6 => kk * SCORE_MATCH * 2 / 3,
        3 => kk * SCORE_MATCH * 2 / 3 + BONUS_CONSECUTIVE,
        _ => {
            let ratio = k as f64 / n as f64;
            if ratio < 0.15 {
                kk * SCORE_MATCH
            } else if ratio < 0.3 {
                kk * SCORE_MATCH * 3 / 4
            } else if ratio < 0.5 {
                kk * SCORE_MATCH * 2 / 3
            } else {
                kk * SCORE_MATCH / 2
            }
        }
    }
}
