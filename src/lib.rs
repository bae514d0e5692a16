//! Fuzzy matching of short queries against candidate strings, with pinyin
//! support for Chinese candidates.
//!
//! Matching runs through a fixed order of tiers: exact, prefix, scored
//! subsequence, pinyin (when enabled and the candidate contains Han
//! characters), then plain substring. The first tier that accepts decides the
//! outcome. Scores are only meaningful for ranking candidates against the
//! same query.
//!
//! # Examples
//!
//! ```
//! use fuzzymatch::fuzzy_match;
//!
//! assert!(fuzzy_match("moduleNameResolver", "mnr", false).is_match);
//! assert!(fuzzy_match("Café", "cafe", false).is_match);
//! assert!(fuzzy_match("你好", "nihao", true).is_match);
//! assert!(!fuzzy_match("你好", "nihao", false).is_match);
//!
//! let exact = fuzzy_match("term", "term", false);
//! let prefix = fuzzy_match("Terminal", "term", false);
//! assert!(exact.score > prefix.score);
//! ```
//!
//! A [`Matcher`] carries its own pinyin cache:
//!
//! ```
//! use fuzzymatch::prelude::*;
//!
//! let options = MatcherOptionsBuilder::default()
//!     .cache("lru:256".parse::<CachePolicy>().unwrap())
//!     .build()
//!     .unwrap();
//! let matcher = Matcher::from_options(&options);
//! assert!(matcher.fuzzy_match("微信", "wx", true).is_match);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod fuzzy_matcher;
mod matcher;
pub mod normalize;
pub mod options;
pub mod pinyin;
pub mod pool;
pub mod prelude;

pub use crate::fuzzy_matcher::ScoreType;
pub use crate::matcher::{Matcher, default_matcher, fuzzy_match};
pub use crate::options::{CachePolicy, MatcherOptions, MatcherOptionsBuilder};

//------------------------------------------------------------------------------
/// Result of matching one query against one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Whether the candidate matched.
    pub is_match: bool,
    /// Ranking score; higher is better. Zero when not matched.
    pub score: ScoreType,
}

impl MatchOutcome {
    /// The outcome of a rejected candidate.
    pub const NO_MATCH: Self = Self {
        is_match: false,
        score: 0,
    };

    /// An accepted candidate with `score`.
    pub const fn matched(score: ScoreType) -> Self {
        Self { is_match: true, score }
    }
}
