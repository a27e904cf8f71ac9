use std::hash::Hash;

use cached::{Cached, SizedCache};

/// Small fixed-size result cache keyed by an input tuple
///
/// Wraps a `cached::SizedCache` so pure computations (style tables, layout
/// hints) can be memoized without tying them to a rendering framework.
/// With a capacity of one this behaves like memoize-one: only the most
/// recent arguments are remembered.
pub struct Memo<K, V>
where
    K: Hash + Eq + Clone,
{
    cache: SizedCache<K, V>,
}

impl<K, V> Memo<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` results (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: SizedCache::with_size(capacity.max(1)),
        }
    }

    /// Cache that only remembers the most recent call
    pub fn memoize_one() -> Self {
        Self::with_capacity(1)
    }

    /// Return the cached result for `key`, computing and storing it on a miss
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.cache.cache_get(&key) {
            return value.clone();
        }
        let value = compute(&key);
        self.cache.cache_set(key, value.clone());
        value
    }

    pub fn hits(&self) -> u64 {
        self.cache.cache_hits().unwrap_or(0)
    }

    pub fn misses(&self) -> u64 {
        self.cache.cache_misses().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.cache.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.cache.cache_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computes_once_per_key() {
        let mut memo: Memo<(u32, bool), u32> = Memo::with_capacity(4);
        let mut calls = 0;

        let a = memo.get_or_compute((2, true), |(n, _)| {
            calls += 1;
            n * 10
        });
        let b = memo.get_or_compute((2, true), |(n, _)| {
            calls += 1;
            n * 10
        });

        assert_eq!(a, 20);
        assert_eq!(b, 20);
        assert_eq!(calls, 1);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn test_memoize_one_forgets_older_arguments() {
        let mut memo: Memo<u32, u32> = Memo::memoize_one();
        let mut calls = 0;

        for key in [1, 2, 1] {
            memo.get_or_compute(key, |k| {
                calls += 1;
                *k
            });
        }

        // 1 was evicted by 2, so the third call recomputes
        assert_eq!(calls, 3);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_zero_capacity_is_bumped_to_one() {
        let mut memo: Memo<u8, u8> = Memo::with_capacity(0);
        assert!(memo.is_empty());
        memo.get_or_compute(1, |k| *k);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut memo: Memo<u8, u8> = Memo::with_capacity(2);
        memo.get_or_compute(1, |k| *k);
        memo.clear();
        assert!(memo.is_empty());
    }
}
