//! Pinyin transliteration of Chinese-script candidates.
//!
//! A candidate is split into segments: runs of non-Han text are kept as
//! literal tokens, each Han character becomes the list of its toneless
//! readings. The Cartesian product of those lists, capped at
//! [`MAX_PINYIN_VARIANTS`], gives the [`PinyinVariant`]s a Latin query is
//! matched against, first by initials and then syllable by syllable.

mod cache;
mod syllable;

use ::pinyin::ToPinyinMulti;

use crate::MatchOutcome;
use crate::fuzzy_matcher::{BONUS_EXACT_MATCH, BONUS_FIRST_CHAR_MATCH, BONUS_PREFIX_MATCH, SCORE_MATCH, ScoreType};
use crate::normalize::{fold_str, is_han};

pub use cache::{BoundedCache, LruCache, NoCache, PinyinCache, Variants};

/// Hard cap on the number of variants generated for one candidate.
pub const MAX_PINYIN_VARIANTS: usize = 16;

/// Candidates with more segments than this only use the first reading of each
/// character.
pub const MAX_POLYPHONIC_SEGMENTS: usize = 10;

/// Syllables that may be skipped in a row once something has matched.
pub const MAX_CONSECUTIVE_SKIPPED_SYLLABLES: usize = 3;

/// One consistent romanization of a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinVariant {
    parts: Vec<String>,
    first_letters: Vec<char>,
}

impl PinyinVariant {
    fn from_parts(parts: Vec<String>) -> Option<Self> {
        if parts.is_empty() {
            return None;
        }
        let first_letters = parts.iter().filter_map(|p| p.chars().next()).collect();
        Some(Self { parts, first_letters })
    }

    /// Lower-case syllables, plus any Latin words of the candidate.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// First letter of every part.
    pub fn first_letters(&self) -> &[char] {
        &self.first_letters
    }

    /// Space-joined syllables, e.g. `ni hao`.
    pub fn full_form(&self) -> String {
        self.parts.join(" ")
    }

    /// Space-joined initials, e.g. `n h`.
    pub fn initials_form(&self) -> String {
        let mut out = String::with_capacity(self.first_letters.len() * 2);
        for (i, c) in self.first_letters.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Han(Vec<&'static str>),
}

impl Segment<'_> {
    fn options(&self, polyphonic: bool) -> &[&str] {
        match self {
            Segment::Literal(s) => std::slice::from_ref(s),
            Segment::Han(readings) if polyphonic => readings,
            Segment::Han(readings) => &readings[..1],
        }
    }
}

/// Distinct toneless readings of `c`, most common first.
fn readings(c: char) -> Option<Vec<&'static str>> {
    let multi = c.to_pinyin_multi()?;
    let mut out: Vec<&'static str> = Vec::new();
    for reading in multi {
        let plain = reading.plain();
        if !plain.is_empty() && !out.contains(&plain) {
            out.push(plain);
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = None;
    for (i, c) in text.char_indices() {
        let han = if is_han(c) { readings(c) } else { None };
        match han {
            Some(r) => {
                if let Some(start) = literal_start.take() {
                    out.push(Segment::Literal(&text[start..i]));
                }
                out.push(Segment::Han(r));
            }
            None => {
                literal_start.get_or_insert(i);
            }
        }
    }
    if let Some(start) = literal_start {
        out.push(Segment::Literal(&text[start..]));
    }
    out
}

/// A literal word takes part in syllable matching only when it is all
/// letters with at least one lower-case one; `QQ` or `.app` do not.
fn is_pinyin_word(word: &str) -> bool {
    word.chars().all(char::is_alphabetic) && word.chars().any(char::is_lowercase)
}

fn variant(pieces: &[&str]) -> Option<PinyinVariant> {
    let parts = pieces
        .iter()
        .flat_map(|piece| piece.split_whitespace())
        .filter(|word| is_pinyin_word(word))
        .map(fold_str)
        .collect();
    PinyinVariant::from_parts(parts)
}

/// Expand `text` into its pinyin variants.
///
/// Returns nothing for text without a Han character the dictionary knows.
pub fn expand(text: &str) -> Vec<PinyinVariant> {
    let segments = segments(text);
    if !segments.iter().any(|s| matches!(s, Segment::Han(_))) {
        return Vec::new();
    }
    let polyphonic = segments.len() <= MAX_POLYPHONIC_SEGMENTS;

    let mut combos: Vec<Vec<&str>> = vec![Vec::with_capacity(segments.len())];
    for segment in &segments {
        let options = segment.options(polyphonic);
        let mut next: Vec<Vec<&str>> = Vec::with_capacity(MAX_PINYIN_VARIANTS.min(combos.len() * options.len()));
        for combo in &combos {
            let mut extended = combo.clone();
            extended.push(options[0]);
            next.push(extended);
        }
        'alternatives: for &alt in &options[1..] {
            for combo in &combos {
                if next.len() >= MAX_PINYIN_VARIANTS {
                    break 'alternatives;
                }
                let mut extended = combo.clone();
                extended.push(alt);
                next.push(extended);
            }
        }
        combos = next;
    }

    combos.iter().filter_map(|pieces| variant(pieces)).collect()
}

/// Match a folded query against `variants`, keeping the best score.
///
/// An exact hit on a variant's initials wins immediately.
pub(crate) fn match_variants(variants: &[PinyinVariant], pattern: &[char]) -> Option<MatchOutcome> {
    if pattern.is_empty() {
        return None;
    }
    let k = pattern.len() as ScoreType;
    let mut best: Option<ScoreType> = None;

    for variant in variants {
        let initials = variant.first_letters();
        if initials == pattern {
            return Some(MatchOutcome::matched(BONUS_EXACT_MATCH + k * SCORE_MATCH));
        }
        let score = if initials.starts_with(pattern) {
            Some(BONUS_PREFIX_MATCH + k * SCORE_MATCH + BONUS_FIRST_CHAR_MATCH)
        } else {
            syllable::match_syllables(variant.parts(), pattern)
        };
        if score > best {
            best = score;
        }
    }

    best.map(MatchOutcome::matched)
}
