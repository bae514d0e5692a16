//! Comparison-form folding: lower-casing plus diacritic stripping.
//!
//! Folding is strictly one code point in, one code point out, so the folded
//! sequence stays index-aligned with the original one. Boundary and case
//! detection read the original sequence; equality reads the folded one.

use std::sync::LazyLock;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// First code point covered by the dense folding tables.
const LATIN_START: u32 = 0x00C0;
/// End (exclusive) of Latin-1 Supplement through Latin Extended-B.
const LATIN_END: u32 = 0x0250;
const LATIN_ADDITIONAL_START: u32 = 0x1E00;
const LATIN_ADDITIONAL_END: u32 = 0x1F00;

/// Letters with a stroke or bar have no canonical decomposition.
const STROKED: &[(char, char)] = &[
    ('ø', 'o'),
    ('đ', 'd'),
    ('ħ', 'h'),
    ('ı', 'i'),
    ('ł', 'l'),
    ('ŀ', 'l'),
    ('ŧ', 't'),
    ('ƀ', 'b'),
    ('ƈ', 'c'),
    ('ǥ', 'g'),
    ('ƙ', 'k'),
    ('ƚ', 'l'),
    ('ƶ', 'z'),
];

struct FoldTable {
    latin: Box<[char]>,
    latin_additional: Box<[char]>,
}

impl FoldTable {
    fn build() -> Self {
        let fill = |start: u32, end: u32| -> Box<[char]> {
            (start..end)
                .map(|cp| char::from_u32(cp).map_or('\0', base_letter))
                .collect()
        };
        let mut latin = fill(LATIN_START, LATIN_END);
        for &(from, to) in STROKED {
            let cp = from as u32;
            if (LATIN_START..LATIN_END).contains(&cp) {
                latin[(cp - LATIN_START) as usize] = to;
            }
        }
        Self {
            latin,
            latin_additional: fill(LATIN_ADDITIONAL_START, LATIN_ADDITIONAL_END),
        }
    }

    #[inline]
    fn lookup(&self, c: char) -> char {
        let cp = c as u32;
        if (LATIN_START..LATIN_END).contains(&cp) {
            self.latin[(cp - LATIN_START) as usize]
        } else if (LATIN_ADDITIONAL_START..LATIN_ADDITIONAL_END).contains(&cp) {
            self.latin_additional[(cp - LATIN_ADDITIONAL_START) as usize]
        } else {
            c
        }
    }
}

/// The base letter of `c` when its canonical decomposition is one base letter
/// followed only by combining marks; `c` itself otherwise.
fn base_letter(c: char) -> char {
    let mut base = None;
    let mut only_marks = true;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else if !is_combining_mark(d) {
            only_marks = false;
        }
    });
    match base {
        Some(b) if only_marks && b != c && !is_combining_mark(b) => b,
        _ => c,
    }
}

static FOLD_TABLE: LazyLock<FoldTable> = LazyLock::new(FoldTable::build);

/// Fold one code point to comparison form.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    FOLD_TABLE.lookup(lower)
}

/// Whether `c` is a Han (Chinese script) ideograph.
///
/// Covers the Han blocks of Unicode 15.1: CJK Radicals Supplement, Kangxi
/// Radicals, the ideographic iteration mark, number zero and Hangzhou
/// numerals, CJK Unified Ideographs with Extensions A to I, and both CJK
/// Compatibility Ideographs blocks. Unassigned code points inside those
/// blocks count as Han.
pub fn is_han(c: char) -> bool {
    matches!(c as u32,
        0x2E80..=0x2FDF
        | 0x3005
        | 0x3007
        | 0x3021..=0x3029
        | 0x3038..=0x303B
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xF900..=0xFAFF
        | 0x20000..=0x2A6DF
        | 0x2A700..=0x2EBEF
        | 0x2EBF0..=0x2EE5F
        | 0x2F800..=0x2FA1F
        | 0x30000..=0x3134F
        | 0x31350..=0x323AF
    )
}

/// Whether any code point of `s` is Han.
pub fn contains_han(s: &str) -> bool {
    !s.is_ascii() && s.chars().any(is_han)
}

/// Fold `text` in a single pass, filling the index-aligned `original` and
/// `folded` sequences. Returns whether a Han character was seen.
pub fn fold_text_into(text: &str, original: &mut Vec<char>, folded: &mut Vec<char>) -> bool {
    original.clear();
    folded.clear();
    original.reserve(text.len());
    folded.reserve(text.len());

    let mut has_han = false;
    for c in text.chars() {
        original.push(c);
        if !c.is_ascii() && is_han(c) {
            has_han = true;
        }
        folded.push(fold_char(c));
    }
    has_han
}

/// Fold a query into `out`.
pub fn fold_into(s: &str, out: &mut Vec<char>) {
    out.clear();
    out.extend(s.chars().map(fold_char));
}

/// Fold `s` into a new string.
pub fn fold_str(s: &str) -> String {
    s.chars().map(fold_char).collect()
}
