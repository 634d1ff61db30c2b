//! Result caching.
//!
//! A TTL'd, capacity-bounded, in-memory store for classification
//! results. The cache never computes anything itself; callers decide
//! what to memoize and under which key (see [`generate_cache_key`] for
//! the conventional one).
//!
//! Eviction is first-in-first-out: reads never refresh an entry's
//! position and updates keep it, so once an entry is the oldest it will
//! be evicted no matter how hot it is. Expiry is lazy; an entry past its
//! TTL keeps occupying a slot until a lookup touches it.

pub mod clock;

pub use self::clock::{Clock, ManualClock, SystemClock};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ahash::AHashMap;
use log::trace;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::router::{Classification, Intent};

/// Cache tuning parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of live entries. Values below 1 are clamped to 1.
    pub capacity: usize,
    /// How long an entry stays servable after the `set` that wrote it.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            capacity: 10_000,
            ttl: Duration::from_secs(60 * 60),
        }
    }
}

/// Counters and occupancy for one cache instance.
///
/// Counters are lifetime totals; [`ResultCache::clear`] empties the
/// store but does not reset them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Live entries right now (expired-but-untouched ones included).
    pub entries: usize,
    /// The configured capacity.
    pub capacity: usize,
    /// Lookups served from the store.
    pub hits: u64,
    /// Lookups that found nothing servable.
    pub misses: u64,
    /// Entries dropped because a lookup found them past their TTL.
    pub expirations: u64,
    /// Entries dropped to make room at capacity.
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the store, 0.0 when none were
    /// made yet.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// One stored result plus its write timestamp.
#[derive(Debug, Clone)]
struct CacheEntry {
    result: Classification,
    written_at: Instant,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: AHashMap<String, CacheEntry>,
    /// Keys in insertion order, kept in lockstep with `entries`.
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
    expirations: u64,
    evictions: u64,
}

/// What a lookup found, resolved before any counter is touched.
enum Lookup {
    Hit(Classification),
    Expired,
    Miss,
}

/// An in-memory classification cache with lazy expiry and FIFO eviction.
///
/// All operations go through one internal lock, so a `set` that has to
/// evict is atomic with respect to concurrent callers: no reader ever
/// observes more than `capacity` entries.
///
/// # Examples
///
/// ```
/// use sekisho::cache::{ResultCache, generate_cache_key};
/// use sekisho::router::classify;
///
/// let cache = ResultCache::new();
/// let result = classify("ビタミンD");
/// let key = generate_cache_key(&result.normalized_input, result.intent);
///
/// cache.set(key.clone(), result.clone());
/// assert_eq!(cache.get(&key), Some(result));
/// ```
#[derive(Debug)]
pub struct ResultCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResultCache {
    /// A cache with the default configuration (10,000 entries, one hour
    /// TTL) on the system clock.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// A cache with `config` on the system clock.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// A cache with `config` reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        ResultCache {
            inner: Mutex::new(CacheInner::default()),
            capacity: config.capacity.max(1),
            ttl: config.ttl,
            clock,
        }
    }

    /// Look up `key`.
    ///
    /// An entry strictly older than the TTL is dropped on the spot and
    /// reported as a miss; an entry exactly at the TTL is still served.
    pub fn get(&self, key: &str) -> Option<Classification> {
        let now = self.clock.now();
        let mut inner = self.inner.lock();

        let outcome = match inner.entries.get(key) {
            Some(entry) if now.duration_since(entry.written_at) > self.ttl => Lookup::Expired,
            Some(entry) => Lookup::Hit(entry.result.clone()),
            None => Lookup::Miss,
        };

        match outcome {
            Lookup::Hit(result) => {
                inner.hits += 1;
                trace!("cache hit: {key}");
                Some(result)
            }
            Lookup::Expired => {
                inner.entries.remove(key);
                inner.order.retain(|k| k != key);
                inner.expirations += 1;
                inner.misses += 1;
                trace!("cache expired: {key}");
                None
            }
            Lookup::Miss => {
                inner.misses += 1;
                trace!("cache miss: {key}");
                None
            }
        }
    }

    /// Insert or update `key` with a fresh timestamp.
    ///
    /// When the store is at capacity the oldest-inserted key is evicted
    /// before the write goes in, even when the write only updates a key
    /// that is already live. An updated key keeps its original place in
    /// the eviction order; only a re-insert after removal moves it to the
    /// back.
    pub fn set<S: Into<String>>(&self, key: S, result: Classification) {
        let key = key.into();
        let now = self.clock.now();
        let mut inner = self.inner.lock();

        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                inner.evictions += 1;
                trace!("cache evicted: {oldest}");
            }
        }

        let entry = CacheEntry {
            result,
            written_at: now,
        };
        if inner.entries.insert(key.clone(), entry).is_none() {
            inner.order.push_back(key);
        }
    }

    /// Drop every entry. Lifetime counters survive.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
        trace!("cache cleared");
    }

    /// Number of stored entries, expired-but-untouched ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// True when the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A point-in-time snapshot of occupancy and lifetime counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.capacity,
            hits: inner.hits,
            misses: inner.misses,
            expirations: inner.expirations,
            evictions: inner.evictions,
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the conventional cache key: `<normalized input>:<intent tag>`.
///
/// The key embeds the intent the pipeline already resolved, so it
/// addresses work done *after* classification (a downstream lookup keyed
/// by the outcome), not the classification call itself.
///
/// # Examples
///
/// ```
/// use sekisho::cache::generate_cache_key;
/// use sekisho::router::Intent;
///
/// assert_eq!(
///     generate_cache_key("ビタミンd", Intent::Ingredient),
///     "ビタミンd:ingredient"
/// );
/// ```
pub fn generate_cache_key(normalized_input: &str, intent: Intent) -> String {
    format!("{normalized_input}:{intent}")
}
