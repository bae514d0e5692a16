//! Configuration options for the matcher and the `fzm` binary.
//!
//! [`MatcherOptions`] is built either through [`MatcherOptionsBuilder`] or,
//! with the `cli` feature, parsed from the command line.

use std::fmt::{self, Display};
use std::num::{NonZeroUsize, ParseIntError};
use std::str::FromStr;
use std::sync::Arc;

use derive_builder::Builder;
use thiserror::Error;

use crate::pinyin::{BoundedCache, LruCache, NoCache, PinyinCache};

/// Capacity of the default pinyin cache.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(4096).unwrap();

/// Which pinyin cache a [`Matcher`](crate::Matcher) is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Clear the whole cache once it holds this many entries.
    Bounded(NonZeroUsize),
    /// Evict the least recently used entry beyond this many.
    Lru(NonZeroUsize),
    /// Recompute every expansion.
    Disabled,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::Bounded(DEFAULT_CACHE_CAPACITY)
    }
}

impl CachePolicy {
    /// Create the cache this policy describes.
    pub fn build(self) -> Arc<dyn PinyinCache> {
        match self {
            Self::Bounded(capacity) => Arc::new(BoundedCache::new(capacity)),
            Self::Lru(capacity) => Arc::new(LruCache::new(capacity)),
            Self::Disabled => Arc::new(NoCache),
        }
    }
}

impl Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(capacity) => write!(f, "bounded:{capacity}"),
            Self::Lru(capacity) => write!(f, "lru:{capacity}"),
            Self::Disabled => f.write_str("off"),
        }
    }
}

/// Error type for parsing a cache policy
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CachePolicyParseError {
    /// Not one of `bounded`, `lru`, `off`
    #[error("Unknown cache policy {0:?}, expected bounded[:N], lru[:N] or off")]
    UnknownPolicy(String),
    /// Error parsing the capacity
    #[error("Error parsing {0}: {1:?}")]
    ParseError(String, ParseIntError),
    /// A capacity of zero
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,
}

impl FromStr for CachePolicy {
    type Err = CachePolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let (name, capacity) = match value.split_once(':') {
            Some((name, capacity)) => (name, Some(capacity)),
            None => (value, None),
        };
        let capacity = match capacity {
            None => DEFAULT_CACHE_CAPACITY,
            Some(raw) => {
                let n = raw
                    .parse::<usize>()
                    .map_err(|e| CachePolicyParseError::ParseError(raw.to_string(), e))?;
                NonZeroUsize::new(n).ok_or(CachePolicyParseError::ZeroCapacity)?
            }
        };
        match name.to_lowercase().as_str() {
            "bounded" => Ok(Self::Bounded(capacity)),
            "lru" => Ok(Self::Lru(capacity)),
            "off" | "disabled" | "none" if value == name => Ok(Self::Disabled),
            _ => Err(CachePolicyParseError::UnknownPolicy(value.to_string())),
        }
    }
}

/// fzm - fuzzy filter with pinyin support
///
/// Reads candidate lines from stdin and prints the ones matching the query,
/// best first.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fzm", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct MatcherOptions {
    /// Pinyin cache policy
    ///
    /// One of `bounded[:N]` (cleared when full), `lru[:N]` or `off`.
    #[cfg_attr(feature = "cli", arg(long, default_value = "bounded:4096", help_heading = "Matching"))]
    pub cache: CachePolicy,

    /// Query to filter with
    #[cfg_attr(feature = "cli", arg(long, short, default_value = "", help_heading = "Matching"))]
    pub query: String,

    /// Let Latin queries match Chinese candidates through their pinyin
    #[cfg_attr(feature = "cli", arg(long, short, help_heading = "Matching"))]
    pub pinyin: bool,

    /// Print the score before each item
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_score: bool,

    /// Print at most this many items
    #[cfg_attr(feature = "cli", arg(long, short = 'n', help_heading = "Output"))]
    pub limit: Option<usize>,

    /// Print output delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            cache: CachePolicy::default(),
            query: String::new(),
            pinyin: false,
            print_score: false,
            limit: None,
            print0: false,
        }
    }
}
