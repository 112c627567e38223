//! Memoization of computed meander paths.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SpaceResult;
use crate::path::MeanderPath;

/// Session-lifetime memo of meander paths keyed by `(start, goal)`.
///
/// Keys are ordered pairs: the greedy search is not reversible, so
/// `(a, b)` and `(b, a)` are independent entries. The cache only grows;
/// entries are never invalidated or evicted while the value lives.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: Mutex<HashMap<(usize, usize), Arc<MeanderPath>>>,
}

impl PathCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached path for `(start, goal)`, if any.
    pub fn get(&self, start: usize, goal: usize) -> Option<Arc<MeanderPath>> {
        self.lock().get(&(start, goal)).cloned()
    }

    /// Returns the cached path for `(start, goal)`, computing and
    /// storing it on a miss.
    ///
    /// The computation runs outside the lock. Two callers racing on the
    /// same missing key may both compute; the first insert wins and
    /// every later call returns that same entry, so a hit is always the
    /// identical path the cache first stored.
    pub fn get_or_compute<F>(
        &self,
        start: usize,
        goal: usize,
        compute: F,
    ) -> SpaceResult<Arc<MeanderPath>>
    where
        F: FnOnce() -> SpaceResult<MeanderPath>,
    {
        if let Some(hit) = self.get(start, goal) {
            return Ok(hit);
        }
        let computed = Arc::new(compute()?);
        Ok(self
            .lock()
            .entry((start, goal))
            .or_insert(computed)
            .clone())
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are append-only, so a panic mid-update cannot leave them
    // inconsistent; recover the map from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, HashMap<(usize, usize), Arc<MeanderPath>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::StopReason;

    fn path(indices: Vec<usize>) -> MeanderPath {
        MeanderPath {
            indices,
            stop: StopReason::ReachedGoal,
        }
    }

    #[test]
    fn test_hit_returns_identical_entry() {
        let cache = PathCache::new();
        let first = cache.get_or_compute(0, 2, || Ok(path(vec![0, 1, 2]))).unwrap();
        let second = cache
            .get_or_compute(0, 2, || panic!("cached key must not recompute"))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_keys_are_ordered_pairs() {
        let cache = PathCache::new();
        cache.get_or_compute(0, 2, || Ok(path(vec![0, 1, 2]))).unwrap();
        let reverse = cache.get_or_compute(2, 0, || Ok(path(vec![2, 0]))).unwrap();
        assert_eq!(reverse.indices, vec![2, 0]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_compute_error_is_not_cached() {
        let cache = PathCache::new();
        let result = cache.get_or_compute(0, 1, || {
            Err(crate::error::SpaceError::out_of_range(1, 1))
        });
        assert!(result.is_err());
        assert!(cache.is_empty());

        let recovered = cache.get_or_compute(0, 1, || Ok(path(vec![0, 1]))).unwrap();
        assert_eq!(recovered.indices, vec![0, 1]);
    }
}
