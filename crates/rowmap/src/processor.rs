//! A reusable read of one command's results into `T`.

mod builder;
pub use builder::Builder;

use crate::{
    AsyncCursor, CacheKey, Cancellation, ColumnChecker, CommandKind, Cursor, DeserializeFn,
    Materialize, Params, Result, ResultCache,
};

use serde::{de::DeserializeOwned, Serialize};
use std::{
    future::Future,
    sync::{Mutex, PoisonError},
};
use tracing::debug;

/// Materializes the results of one command.
///
/// The processor owns the compiled deserializer for its target type and a
/// [`ColumnChecker`] that is reused across executions. Each execution takes
/// the checker for its duration, so concurrent executions never share one;
/// the last execution to finish leaves its checker behind for the next.
pub struct Processor<T> {
    command: String,
    kind: CommandKind,
    deserializer: DeserializeFn<T>,
    columns: Mutex<Option<ColumnChecker>>,
    column_caching: bool,
    cache: Option<ResultCache>,
}

impl<T: Materialize> Processor<T> {
    pub fn builder(command: impl Into<String>) -> Builder<T> {
        Builder::new(command.into())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn deserializer(&self) -> &DeserializeFn<T> {
        &self.deserializer
    }

    /// A copy of the column checker left by the last execution.
    pub fn columns(&self) -> Option<ColumnChecker> {
        self.lock().clone()
    }

    /// Forgets every column ordinal resolved so far.
    pub fn invalidate_columns(&self) {
        *self.lock() = None;
    }

    /// Reads every remaining row of the cursor's current result set.
    pub fn execute<C: Cursor>(&self, cursor: &mut C) -> Result<Vec<T>> {
        let mut columns = self.take_columns();
        let items = self.deserializer.deserialize(cursor, &mut columns);
        self.return_columns(columns);

        let items = items?;
        debug!(command = %self.command, rows = items.len(), "materialized result set");
        Ok(items)
    }

    /// Reads every remaining row of an asynchronous cursor's current result
    /// set.
    pub async fn execute_async<C: AsyncCursor>(
        &self,
        cursor: &mut C,
        cancel: Option<&Cancellation>,
    ) -> Result<Vec<T>> {
        let mut columns = self.take_columns();
        let items = self
            .deserializer
            .deserialize_async(cursor, &mut columns, cancel)
            .await;
        self.return_columns(columns);

        let items = items?;
        debug!(command = %self.command, rows = items.len(), "materialized result set");
        Ok(items)
    }

    /// Returns the cached collection for `params`, or opens a cursor with
    /// `open`, materializes it and caches the result.
    ///
    /// Without a result cache this always opens a cursor.
    pub async fn fetch<C, F, Fut>(&self, params: &Params, open: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        C: AsyncCursor,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<C>>,
    {
        let load = || async {
            let mut cursor = open().await?;
            self.execute_async(&mut cursor, None).await
        };

        match &self.cache {
            Some(cache) => {
                let key = self.cache_key(params)?;
                cache.get_or_load(&key, load).await
            }
            None => load().await,
        }
    }

    /// The key results for `params` are cached under.
    pub fn cache_key(&self, params: &Params) -> Result<CacheKey> {
        CacheKey::new(&self.command, self.kind, params)
    }

    pub fn result_cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    fn take_columns(&self) -> ColumnChecker {
        if !self.column_caching {
            return ColumnChecker::uncached();
        }

        self.lock().take().unwrap_or_default()
    }

    fn return_columns(&self, columns: ColumnChecker) {
        if self.column_caching {
            *self.lock() = Some(columns);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ColumnChecker>> {
        self.columns.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: 'static> core::fmt::Debug for Processor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Processor")
            .field("command", &self.command)
            .field("kind", &self.kind)
            .field("deserializer", &self.deserializer)
            .field("column_caching", &self.column_caching)
            .field("cache", &self.cache)
            .finish()
    }
}
