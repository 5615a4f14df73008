use crate::Result;

use async_trait::async_trait;
use std::time::Duration;

/// A key-value store for serialized result collections.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, expiring it after `ttl` when given.
    /// Returns `false` if the provider declined to store it.
    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<bool>;

    /// Removes `key`. Returns `true` if an entry was removed.
    async fn remove(&self, key: &str) -> Result<bool>;

    async fn flush_all(&self) -> Result<()>;
}
