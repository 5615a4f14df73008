use super::CacheProvider;
use crate::Result;

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, PoisonError,
    },
    time::{Duration, Instant},
};
use tracing::trace;

/// Configuration for [`MemoryCache`].
#[derive(Debug, Clone)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries before the least recently used one is
    /// evicted.
    pub max_entries: usize,

    /// Expiry applied when the caller does not pass one.
    pub default_ttl: Option<Duration>,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        MemoryCacheConfig {
            max_entries: 1000,
            default_ttl: None,
        }
    }
}

/// An in-process [`CacheProvider`] with LRU eviction and per-entry expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    config: MemoryCacheConfig,
    clock: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetrics {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
    last_accessed: u64,
}

impl MemoryCache {
    pub fn new(config: MemoryCacheConfig) -> MemoryCache {
        MemoryCache {
            entries: Mutex::new(HashMap::new()),
            config,
            clock: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &MemoryCacheConfig {
        &self.config
    }

    pub fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            entries: self.lock().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    fn evict_lru(&self, entries: &mut HashMap<String, Entry>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            trace!(key = %key, "evicting least recently used result");
            entries.remove(&key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[async_trait]
impl CacheProvider for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let tick = self.tick();
        let mut entries = self.lock();

        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }

        let value = entries.get_mut(key).map(|entry| {
            entry.last_accessed = tick;
            entry.value.clone()
        });

        match value {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };

        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<bool> {
        if self.config.max_entries == 0 {
            return Ok(false);
        }

        let now = Instant::now();
        let entry = Entry {
            value,
            expires_at: ttl.or(self.config.default_ttl).map(|ttl| now + ttl),
            last_accessed: self.tick(),
        };

        let mut entries = self.lock();

        if !entries.contains_key(key) {
            entries.retain(|_, entry| !entry.is_expired(now));

            while entries.len() >= self.config.max_entries {
                self.evict_lru(&mut entries);
            }
        }

        entries.insert(key.to_string(), entry);
        Ok(true)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.lock().remove(key).is_some())
    }

    async fn flush_all(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
}
