//! Convenience re-exports of commonly used types.
//!
//! `use fuzzymatch::prelude::*;` brings in the matcher, its options and the
//! pinyin cache implementations.

pub use crate::pinyin::{BoundedCache, LruCache, NoCache, PinyinCache, PinyinVariant};
pub use crate::*;
pub use std::sync::Arc;
