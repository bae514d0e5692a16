//! The matching entry point.
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::fuzzy_matcher::tiers::run_tiers;
use crate::fuzzy_matcher::{AsciiText, UnicodeText};
use crate::normalize::{fold_into, fold_text_into};
use crate::options::{CachePolicy, MatcherOptions};
use crate::pinyin::{self, PinyinCache, Variants};
use crate::{MatchOutcome, pool};

/// How a call is served, decided once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// Both strings are ASCII: compare bytes directly.
    AsciiPath,
    /// Fold both strings into pooled code point buffers.
    UnicodePath,
}

impl Route {
    fn select(text: &str, pattern: &str) -> Self {
        if text.is_ascii() && pattern.is_ascii() {
            Route::AsciiPath
        } else {
            Route::UnicodePath
        }
    }
}

//==============================================================================
/// Matches queries against candidates.
///
/// The only state is the pinyin cache, so one matcher is meant to be shared
/// by reference between threads.
pub struct Matcher {
    cache: Arc<dyn PinyinCache>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(CachePolicy::default().build())
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("cached_entries", &self.cache.len())
            .finish()
    }
}

impl Matcher {
    /// Creates a matcher memoizing pinyin expansions in `cache`.
    pub fn new(cache: Arc<dyn PinyinCache>) -> Self {
        Self { cache }
    }

    /// Creates a matcher with the cache policy of `options`.
    pub fn from_options(options: &MatcherOptions) -> Self {
        debug!("building matcher with pinyin cache policy {}", options.cache);
        Self::new(options.cache.build())
    }

    /// The pinyin cache in use.
    pub fn cache(&self) -> &Arc<dyn PinyinCache> {
        &self.cache
    }

    /// Pinyin variants of `text`, from the cache when possible.
    pub fn pinyin_variants(&self, text: &str) -> Variants {
        if let Some(variants) = self.cache.get(text) {
            return variants;
        }
        let variants: Variants = pinyin::expand(text).into();
        trace!("expanded {:?} into {} pinyin variants", text, variants.len());
        self.cache.put(text, Arc::clone(&variants));
        variants
    }

    /// Match `pattern` against `text`.
    ///
    /// With `use_pinyin`, a Latin query may also match Chinese characters of
    /// `text` through their pinyin. Never fails: every input pair yields an
    /// outcome.
    pub fn fuzzy_match(&self, text: &str, pattern: &str, use_pinyin: bool) -> MatchOutcome {
        if pattern.is_empty() {
            return MatchOutcome::matched(0);
        }
        if text.is_empty() {
            return MatchOutcome::NO_MATCH;
        }

        match Route::select(text, pattern) {
            Route::AsciiPath => run_tiers(&AsciiText(text.as_bytes()), &AsciiText(pattern.as_bytes()), || None),
            Route::UnicodePath => self.match_unicode(text, pattern, use_pinyin),
        }
    }

    fn match_unicode(&self, text: &str, pattern: &str, use_pinyin: bool) -> MatchOutcome {
        let chars = pool::chars();
        let mut original = chars.acquire();
        let mut folded = chars.acquire();
        let mut query = chars.acquire();

        let has_han = fold_text_into(text, &mut original, &mut folded);
        fold_into(pattern, &mut query);

        let haystack = UnicodeText::new(&original, &folded);
        let needle = UnicodeText::folded_only(&query);
        run_tiers(&haystack, &needle, || {
            if use_pinyin && has_han {
                pinyin::match_variants(&self.pinyin_variants(text), &query)
            } else {
                None
            }
        })
    }
}

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(Matcher::default);

/// The process-wide matcher behind [`fuzzy_match`].
pub fn default_matcher() -> &'static Matcher {
    &DEFAULT_MATCHER
}

/// Match `pattern` against `text` with the process-wide matcher.
pub fn fuzzy_match(text: &str, pattern: &str, use_pinyin: bool) -> MatchOutcome {
    DEFAULT_MATCHER.fuzzy_match(text, pattern, use_pinyin)
}
