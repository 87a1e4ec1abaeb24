//! Local Cache Facade
//!
//! Composes the bounded store with the background reaper and exposes the
//! public insert/get/remove contract.
//!
//! This is an explicit instance with an explicit lifecycle: construct it once
//! at process startup with [`LocalCache::start`], pass it by reference to
//! consumers, and stop the reaper with [`LocalCache::shutdown`] on the way
//! out.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{BoundedStore, CacheEntry, CacheStats};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Local Cache ==
/// Process-local bounded cache with TTL expiration and LRU eviction.
///
/// Reads use a lazy deadline check: an entry found past its deadline is
/// reported absent (and removed on the spot) even if the reaper has not swept
/// it yet, so a coarse sweep interval never weakens read-time correctness.
///
/// A `put` followed by a `get` on the same task always observes the new value;
/// the single reader/writer lock makes every mutation atomic and immediately
/// visible.
pub struct LocalCache<V> {
    /// Shared store, guarded by a single reader/writer lock
    store: Arc<RwLock<BoundedStore<V>>>,
    /// TTL in seconds applied when the caller does not specify one
    default_ttl: u64,
    /// Handle to the background reaper task
    reaper: JoinHandle<()>,
    /// Cooperative shutdown signal for the reaper
    shutdown: Arc<Notify>,
}

impl<V> LocalCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Lifecycle ==
    /// Validates the configuration, creates the store and starts the reaper.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] or [`CacheError::InvalidTtl`]
    /// when the configuration is unusable; misconfiguration is fatal at
    /// startup rather than discovered later.
    pub fn start(config: Config) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(RwLock::new(BoundedStore::new(
            config.initial_capacity,
            config.max_capacity,
        )));
        let shutdown = Arc::new(Notify::new());
        let reaper = spawn_reaper(
            Arc::clone(&store),
            Duration::from_secs(config.sweep_interval),
            Arc::clone(&shutdown),
        );

        Ok(Self {
            store,
            default_ttl: config.default_ttl,
            reaper,
            shutdown,
        })
    }

    /// Signals the reaper to stop and waits for it to finish.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        if let Err(err) = self.reaper.await {
            if !err.is_cancelled() {
                warn!(error = %err, "reaper task ended abnormally");
            }
        }
    }

    // == Set ==
    /// Inserts `value` under `key` with the default TTL.
    ///
    /// Overwriting an existing key replaces both the value and the deadline.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.insert(key.into(), value, self.default_ttl).await;
    }

    /// Inserts `value` under `key` with a caller-specified TTL in seconds.
    ///
    /// # Errors
    /// A zero TTL is rejected with [`CacheError::InvalidTtl`]; nothing is
    /// stored.
    pub async fn set_with_ttl(
        &self,
        key: impl Into<String>,
        value: V,
        ttl_seconds: u64,
    ) -> Result<()> {
        if ttl_seconds == 0 {
            return Err(CacheError::InvalidTtl(ttl_seconds));
        }
        self.insert(key.into(), value, ttl_seconds).await;
        Ok(())
    }

    /// Inserts every pair in `entries` with the same TTL (`None` = default).
    ///
    /// The batch is not atomic: the lock is taken per key, so a concurrent
    /// reader may observe a partially applied batch.
    pub async fn set_many(
        &self,
        entries: HashMap<String, V>,
        ttl_seconds: Option<u64>,
    ) -> Result<()> {
        let ttl = match ttl_seconds {
            Some(0) => return Err(CacheError::InvalidTtl(0)),
            Some(ttl) => ttl,
            None => self.default_ttl,
        };

        for (key, value) in entries {
            self.insert(key, value, ttl).await;
        }
        Ok(())
    }

    async fn insert(&self, key: String, value: V, ttl_seconds: u64) {
        let entry = CacheEntry::new(value, Some(ttl_seconds));
        let mut store = self.store.write().await;
        if let Some((victim, _)) = store.put(key, entry) {
            debug!(key = %victim, "evicted least recently used entry");
        }
    }

    // == Get ==
    /// Returns the value at `key` if present and not past its deadline.
    ///
    /// A hit promotes the key to most-recently-used. An entry found past its
    /// deadline is removed on the spot and reported as absent, regardless of
    /// whether the reaper has swept it yet.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.store.write().await;
        let found = store.get(key).map(|e| (e.value.clone(), e.is_expired()));

        match found {
            Some((value, false)) => {
                store.record_hit();
                Some(value)
            }
            Some((_, true)) => {
                store.remove(key);
                store.record_expiration();
                store.record_miss();
                None
            }
            None => {
                store.record_miss();
                None
            }
        }
    }

    // == Contains Key ==
    /// Checks whether `key` holds a live entry, with the same lazy deadline
    /// check as `get`. Does not promote the key.
    pub async fn contains_key(&self, key: &str) -> bool {
        let store = self.store.read().await;
        store.peek(key).is_some_and(|entry| !entry.is_expired())
    }

    // == Remove ==
    /// Removes `key` unconditionally. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    // == Size ==
    /// Returns the current physical entry count.
    ///
    /// The count may include expired entries the reaper has not reclaimed
    /// yet; callers needing an exact live count must probe per key.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    /// Returns true if the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.is_empty()
    }

    // == Clear ==
    /// Removes all entries atomically.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }
}
