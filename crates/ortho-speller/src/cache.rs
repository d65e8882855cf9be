// Per-rule memoization of word verdicts keyed by (word, variant)

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashMap;
use parking_lot::Mutex;

/// Cache key: normalized word plus variant identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub word: String,
    pub variant: String,
}

impl CacheKey {
    pub fn new(word: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            variant: variant.into(),
        }
    }
}

/// Hit and miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Default number of slots before the cache starts over.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

type Slot<V> = Arc<Mutex<Option<V>>>;

/// Thread-safe get-or-compute cache.
///
/// Each key owns a slot with its own lock. The map lock is held only to
/// find or create a slot, so different keys compute in parallel, while
/// callers of the same key queue on the slot and the first one computes.
/// A failed computation removes its empty slot; the next caller retries.
///
/// The cache holds at most `capacity` slots. Creating a slot beyond that
/// drops every existing one first.
pub struct SuggestionCache<V> {
    slots: Mutex<HashMap<CacheKey, Slot<V>>>,
    capacity: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<V: Clone> SuggestionCache<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// A cache bounded to `capacity` slots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the cached value for `key`, computing it on first use.
    ///
    /// Errors from `compute` are returned to this caller only and are not
    /// stored.
    pub fn get_or_compute<E>(
        &self,
        key: &CacheKey,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        let slot = {
            let mut slots = self.slots.lock();
            match slots.get(key) {
                Some(slot) => Arc::clone(slot),
                None => {
                    if slots.len() >= self.capacity {
                        log::trace!("cache full ({} slots), starting over", slots.len());
                        slots.clear();
                    }
                    let slot: Slot<V> = Arc::new(Mutex::new(None));
                    slots.insert(key.clone(), Arc::clone(&slot));
                    slot
                }
            }
        };

        let mut value = slot.lock();
        if let Some(v) = value.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("cache hit: {:?} ({})", key.word, key.variant);
            return Ok(v.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::trace!("cache miss: {:?} ({})", key.word, key.variant);
        match compute() {
            Ok(computed) => {
                *value = Some(computed.clone());
                Ok(computed)
            }
            Err(e) => {
                drop(value);
                self.discard_empty(key, &slot);
                Err(e)
            }
        }
    }

    /// Remove `slot` for `key` if it is still the mapped slot and holds no
    /// value. A slot locked by another caller is left to that caller.
    fn discard_empty(&self, key: &CacheKey, slot: &Slot<V>) {
        let mut slots = self.slots.lock();
        let empty = slots
            .get(key)
            .filter(|current| Arc::ptr_eq(current, slot))
            .and_then(|current| current.try_lock().map(|v| v.is_none()))
            .unwrap_or(false);
        if empty {
            slots.remove(key);
        }
    }

    /// Return the cached value without computing. Waits for a computation
    /// of the same key that is already running.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let slot = self.slots.lock().get(key).cloned()?;
        let value = slot.lock();
        value.clone()
    }

    /// Drop every entry. Computations already running finish into their
    /// detached slots and are not visible afterwards.
    pub fn clear(&self) {
        let mut slots = self.slots.lock();
        log::trace!("cache cleared ({} slots)", slots.len());
        slots.clear();
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.lock().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<V: Clone> Default for SuggestionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for SuggestionCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionCache")
            .field("capacity", &self.capacity)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
