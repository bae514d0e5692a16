//! Memoization of pinyin expansions.
//!
//! Expansion walks the dictionary for every character and builds the
//! variant product, which is too slow to redo on every keystroke. A
//! [`PinyinCache`] remembers the result per candidate string. Caches are
//! only ever an optimization: a miss recomputes the same variants.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::{AHashMap, AHasher};
use parking_lot::{Mutex, RwLock};

use super::PinyinVariant;

/// Shared, immutable expansion of one candidate.
pub type Variants = Arc<[PinyinVariant]>;

/// Storage for candidate expansions. Implementations must tolerate
/// concurrent callers.
pub trait PinyinCache: Send + Sync {
    /// Cached expansion of `key`, if any.
    fn get(&self, key: &str) -> Option<Variants>;

    /// Remember the expansion of `key`. May evict other entries.
    fn put(&self, key: &str, value: Variants);

    /// Drop every entry.
    fn clear(&self);

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Whether the cache holds nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const SHARDS: usize = 16;

/// Bounded map that is wiped wholesale once it reaches capacity.
///
/// Entries are spread over independently locked shards, so lookups of
/// unrelated candidates do not contend.
pub struct BoundedCache {
    shards: Box<[RwLock<AHashMap<Box<str>, Variants>>]>,
    len: AtomicUsize,
    capacity: usize,
}

impl BoundedCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            shards: (0..SHARDS).map(|_| RwLock::new(AHashMap::new())).collect(),
            len: AtomicUsize::new(0),
            capacity: capacity.get(),
        }
    }

    /// Maximum number of entries before the cache is cleared.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn shard(&self, key: &str) -> &RwLock<AHashMap<Box<str>, Variants>> {
        let mut hasher = AHasher::default();
        key.hash(&mut hasher);
        &self.shards[hasher.finish() as usize % SHARDS]
    }
}

impl PinyinCache for BoundedCache {
    fn get(&self, key: &str) -> Option<Variants> {
        self.shard(key).read().get(key).cloned()
    }

    fn put(&self, key: &str, value: Variants) {
        if self.len.load(Ordering::Relaxed) >= self.capacity {
            debug!("pinyin cache reached {} entries, clearing", self.capacity);
            self.clear();
        }
        let mut shard = self.shard(key).write();
        if shard.insert(key.into(), value).is_none() {
            self.len.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn clear(&self) {
        for shard in self.shards.iter() {
            let mut map = shard.write();
            self.len.fetch_sub(map.len(), Ordering::Relaxed);
            map.clear();
        }
    }

    fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }
}

/// Least-recently-used cache behind a single lock.
pub struct LruCache {
    inner: Mutex<lru::LruCache<Box<str>, Variants>>,
}

impl LruCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(lru::LruCache::new(capacity)),
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}

impl PinyinCache for LruCache {
    fn get(&self, key: &str) -> Option<Variants> {
        self.inner.lock().get(key).cloned()
    }

    fn put(&self, key: &str, value: Variants) {
        if let Some((evicted, _)) = self.inner.lock().push(key.into(), value)
            && &*evicted != key
        {
            trace!("pinyin cache evicted {evicted:?}");
        }
    }

    fn clear(&self) {
        self.inner.lock().clear();
    }

    fn len(&self) -> usize {
        self.inner.lock().len()
    }
}

/// Cache that never stores anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl PinyinCache for NoCache {
    fn get(&self, _key: &str) -> Option<Variants> {
        None
    }

    fn put(&self, _key: &str, _value: Variants) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinyin::expand;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn variants(text: &str) -> Variants {
        expand(text).into()
    }

    #[test]
    fn bounded_get_after_put() {
        let cache = BoundedCache::new(cap(4));
        assert!(cache.get("你好").is_none());
        cache.put("你好", variants("你好"));
        assert_eq!(cache.get("你好").as_deref(), Some(&expand("你好")[..]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn bounded_replacing_does_not_grow() {
        let cache = BoundedCache::new(cap(4));
        cache.put("a", variants("你好"));
        cache.put("a", variants("世界"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").as_deref(), Some(&expand("世界")[..]));
    }

    #[test]
    fn bounded_clears_everything_at_capacity() {
        let cache = BoundedCache::new(cap(3));
        for key in ["a", "b", "c"] {
            cache.put(key, variants("你好"));
        }
        assert_eq!(cache.len(), 3);
        cache.put("d", variants("你好"));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("a").is_none());
        assert!(cache.get("d").is_some());
    }

    #[test]
    fn bounded_is_shared_across_threads() {
        let cache = BoundedCache::new(cap(1024));
        std::thread::scope(|s| {
            for t in 0..4 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..50 {
                        cache.put(&format!("{t}-{i}"), variants("你好"));
                    }
                });
            }
        });
        assert_eq!(cache.len(), 200);
        assert!(cache.get("3-49").is_some());
    }

    #[test]
    fn lru_evicts_least_recent() {
        let cache = LruCache::new(cap(2));
        cache.put("a", variants("你好"));
        cache.put("b", variants("你好"));
        assert!(cache.get("a").is_some());
        cache.put("c", variants("你好"));
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn clear_empties() {
        let caches: [Box<dyn PinyinCache>; 2] = [Box::new(BoundedCache::new(cap(8))), Box::new(LruCache::new(cap(8)))];
        for cache in &caches {
            cache.put("x", variants("你好"));
            assert!(!cache.is_empty());
            cache.clear();
            assert!(cache.is_empty());
            assert!(cache.get("x").is_none());
        }
    }

    #[test]
    fn no_cache_stores_nothing() {
        let cache = NoCache;
        cache.put("x", variants("你好"));
        assert!(cache.get("x").is_none());
        assert!(cache.is_empty());
    }
}
