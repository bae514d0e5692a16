//! Tiered fuzzy matching over folded text.
//!
//! The matcher and scorer are written once, generic over [`Haystack`], and
//! instantiated for the two routes a call can take:
//!
//! - [`AsciiText`]: both strings are pure ASCII. Bytes are compared with
//!   ASCII case folding on the fly, nothing is materialized.
//! - [`UnicodeText`]: anything else. Index-aligned original and folded code
//!   point sequences, drawn from the buffer pools.

pub(crate) mod tiers;
pub(crate) mod score;

/// Score of a match; only comparable between outcomes for the same query.
pub type ScoreType = i64;

/// Points awarded for each matched character.
pub const SCORE_MATCH: ScoreType = 16;
/// Opening a gap between two matched characters.
pub const SCORE_GAP_START: ScoreType = -3;
/// Each further unmatched character in a gap.
pub const SCORE_GAP_EXTENSION: ScoreType = -1;
/// Match right after a delimiter.
pub const BONUS_BOUNDARY: ScoreType = SCORE_MATCH / 2;
/// Match on a word character right after a non-word character.
pub const BONUS_NON_WORD: ScoreType = SCORE_MATCH / 2;
/// Match on an upper-case letter right after a lower-case one.
pub const BONUS_CAMEL_CASE: ScoreType = BONUS_BOUNDARY + 2;
/// Match at the very first character.
pub const BONUS_FIRST_CHAR_MATCH: ScoreType = BONUS_BOUNDARY + 4;
/// Match directly after the previous match.
pub const BONUS_CONSECUTIVE: ScoreType = 5;
/// Candidate starts with the query.
pub const BONUS_PREFIX_MATCH: ScoreType = 20;
/// Candidate equals the query.
pub const BONUS_EXACT_MATCH: ScoreType = 100;

/// Index-addressable text with a folded comparison form.
pub(crate) trait Haystack {
    fn len(&self) -> usize;

    /// Comparison form of the unit at `i`.
    fn folded(&self, i: usize) -> char;

    /// Unit at `i` as written, used for case and boundary detection.
    fn original(&self, i: usize) -> char;
}

/// ASCII route: raw bytes, folded on access.
#[derive(Clone, Copy)]
pub(crate) struct AsciiText<'a>(pub(crate) &'a [u8]);

impl Haystack for AsciiText<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn folded(&self, i: usize) -> char {
        self.0[i].to_ascii_lowercase() as char
    }

    #[inline(always)]
    fn original(&self, i: usize) -> char {
        self.0[i] as char
    }
}

/// Unicode route: parallel original and folded code points.
#[derive(Clone, Copy)]
pub(crate) struct UnicodeText<'a> {
    original: &'a [char],
    folded: &'a [char],
}

impl<'a> UnicodeText<'a> {
    pub(crate) fn new(original: &'a [char], folded: &'a [char]) -> Self {
        debug_assert_eq!(original.len(), folded.len());
        Self { original, folded }
    }

    /// A query only needs its folded form.
    pub(crate) fn folded_only(folded: &'a [char]) -> Self {
        Self::new(folded, folded)
    }
}

impl Haystack for UnicodeText<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.folded.len()
    }

    #[inline(always)]
    fn folded(&self, i: usize) -> char {
        self.folded[i]
    }

    #[inline(always)]
    fn original(&self, i: usize) -> char {
        self.original[i]
    }
}
