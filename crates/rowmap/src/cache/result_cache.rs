use super::{CacheKey, CacheProvider, MemoryCache};
use crate::Result;

use serde::{de::DeserializeOwned, Serialize};
use std::{future::Future, sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Stores materialized collections in a [`CacheProvider`].
#[derive(Clone)]
pub struct ResultCache {
    provider: Arc<dyn CacheProvider>,
    ttl: Option<Duration>,
}

impl ResultCache {
    pub fn new(provider: impl CacheProvider + 'static) -> ResultCache {
        ResultCache::from_arc(Arc::new(provider))
    }

    pub fn from_arc(provider: Arc<dyn CacheProvider>) -> ResultCache {
        ResultCache {
            provider,
            ttl: None,
        }
    }

    /// A cache backed by a default [`MemoryCache`].
    pub fn in_memory() -> ResultCache {
        ResultCache::new(MemoryCache::default())
    }

    /// Expiry applied to every collection this cache stores.
    pub fn with_ttl(mut self, ttl: Duration) -> ResultCache {
        self.ttl = Some(ttl);
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn provider(&self) -> &Arc<dyn CacheProvider> {
        &self.provider
    }

    /// Returns the cached collection for `key`.
    ///
    /// A payload that no longer deserializes into `Vec<T>` is removed and
    /// reported as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<Vec<T>>> {
        let Some(payload) = self.provider.get(key.as_str()).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(items) => Ok(Some(items)),
            Err(err) => {
                warn!(%key, error = %err, "discarding unreadable cached result");
                self.provider.remove(key.as_str()).await?;
                Ok(None)
            }
        }
    }

    /// Stores `items` under `key`. Returns `false` if the provider declined
    /// the write.
    pub async fn set<T: Serialize>(&self, key: &CacheKey, items: &[T]) -> Result<bool> {
        let payload = serde_json::to_string(items)?;
        self.provider.set(key.as_str(), payload, self.ttl).await
    }

    pub async fn remove(&self, key: &CacheKey) -> Result<bool> {
        self.provider.remove(key.as_str()).await
    }

    pub async fn flush_all(&self) -> Result<()> {
        self.provider.flush_all().await
    }

    /// Returns the cached collection for `key`, running `load` and caching
    /// its output on a miss. Failed loads are not cached.
    pub async fn get_or_load<T, F, Fut>(&self, key: &CacheKey, load: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if let Some(items) = self.get(key).await? {
            debug!(%key, rows = items.len(), "result cache hit");
            return Ok(items);
        }

        let items = load().await?;
        if self.set(key, &items).await? {
            debug!(%key, rows = items.len(), "cached result");
        } else {
            debug!(%key, rows = items.len(), "result cache declined write");
        }

        Ok(items)
    }
}

impl core::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ResultCache").field("ttl", &self.ttl).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandKind, Params};

    fn key() -> CacheKey {
        CacheKey::new("select id from users", CommandKind::Text, &Params::new()).unwrap()
    }

    #[tokio::test]
    async fn loads_once() {
        let cache = ResultCache::in_memory();
        let key = key();

        let first: Vec<i64> = cache
            .get_or_load(&key, || async { Ok(vec![1, 2, 3]) })
            .await
            .unwrap();
        let second: Vec<i64> = cache
            .get_or_load(&key, || async { Err(crate::err!("loaded twice")) })
            .await
            .unwrap();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn failed_loads_are_not_cached() {
        let cache = ResultCache::in_memory();
        let key = key();

        let err = cache
            .get_or_load::<i64, _, _>(&key, || async { Err(crate::err!("boom")) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(cache.get::<i64>(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_is_a_miss() {
        let memory = Arc::new(MemoryCache::default());
        let cache = ResultCache::from_arc(memory.clone());
        let key = key();

        memory
            .set(key.as_str(), "{not json".to_string(), None)
            .await
            .unwrap();

        assert!(cache.get::<i64>(&key).await.unwrap().is_none());
        assert_eq!(memory.get(key.as_str()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn mismatched_payload_is_a_miss() {
        let cache = ResultCache::in_memory();
        let key = key();

        cache.set(&key, &["a", "b"]).await.unwrap();
        assert!(cache.get::<i64>(&key).await.unwrap().is_none());
    }
}
