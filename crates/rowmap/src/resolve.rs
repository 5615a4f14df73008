use crate::{
    strategy::{Compiler, DynamicStrategy, ScalarStrategy, Strategy, StrategyKind},
    AsyncCursor, Cancellation, ColumnChecker, Cursor, Kind, MappingExport, Materialize, Result,
};

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, LazyLock, PoisonError, RwLock,
    },
};
use tokio_stream::Stream;
use tracing::{debug, trace};

/// Compiles and caches one [`DeserializeFn`] per target type and mapping
/// shape.
///
/// Lookups take a read lock. On a miss the deserializer is built outside the
/// lock and published with compute-if-absent semantics: when two threads
/// race on the same shape, both may build but only the first insert is kept
/// and both callers receive it.
#[derive(Default)]
pub struct Resolver {
    cache: RwLock<HashMap<ShapeKey, Arc<dyn Any + Send + Sync>>>,
    compilations: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ShapeKey {
    target: TypeId,
    export: u64,
}

/// A compiled row-to-object function.
///
/// Cheap to clone; all clones share the underlying strategy.
pub struct DeserializeFn<T> {
    strategy: Arc<dyn Strategy<T>>,
    shape: u64,
}

/// Lazily materializes the rows of a cursor's current result set.
///
/// Produced by [`DeserializeFn::rows`]. The iterator stops after the first
/// error. Column diagnostics are recorded once the result set is exhausted.
pub struct Rows<'a, T, C> {
    deserializer: &'a DeserializeFn<T>,
    cursor: &'a mut C,
    columns: &'a mut ColumnChecker,
    cancel: Option<Cancellation>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Reading,
    Done,
}

static GLOBAL: LazyLock<Arc<Resolver>> = LazyLock::new(|| Arc::new(Resolver::new()));

impl Resolver {
    pub fn new() -> Resolver {
        Resolver::default()
    }

    /// The process-wide resolver.
    pub fn global() -> Arc<Resolver> {
        GLOBAL.clone()
    }

    /// Returns the deserializer for `T` under `export`, compiling it on
    /// first use.
    pub fn resolve<T: Materialize>(&self, export: &MappingExport<T>) -> DeserializeFn<T> {
        let key = ShapeKey {
            target: TypeId::of::<T>(),
            export: export.cache_hash(),
        };

        if let Some(hit) = self.lookup::<T>(&key) {
            trace!(target_type = T::type_name(), shape = key.export, "deserializer cache hit");
            return hit;
        }

        let built = Arc::new(self.build(export, key.export));

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache.entry(key).or_insert(built);

        match entry.clone().downcast::<DeserializeFn<T>>() {
            Ok(deserializer) => (*deserializer).clone(),
            // Keys include the `TypeId`, so the entry always holds a `DeserializeFn<T>`.
            Err(_) => unreachable!("deserializer cache entry has the wrong type"),
        }
    }

    /// Resolves using the declarative export for `T`.
    pub fn resolve_default<T: Materialize>(&self) -> DeserializeFn<T> {
        self.resolve(&MappingExport::declarative())
    }

    /// Number of complex-type plans compiled so far.
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }

    /// Number of cached deserializers.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached deserializer.
    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn lookup<T: Materialize>(&self, key: &ShapeKey) -> Option<DeserializeFn<T>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(key)?
            .downcast_ref::<DeserializeFn<T>>()
            .cloned()
    }

    fn build<T: Materialize>(&self, export: &MappingExport<T>, shape: u64) -> DeserializeFn<T> {
        let strategy: Arc<dyn Strategy<T>> = match T::kind() {
            Kind::Dynamic(from_row) => Arc::new(DynamicStrategy::new(from_row)),
            Kind::Scalar { ty, nullable, load } => {
                Arc::new(ScalarStrategy::new(ty, nullable, load))
            }
            Kind::Custom(build) => build(export),
            Kind::Complex(new) => {
                let plan = Compiler::new(export, T::type_name()).compile(new);
                self.compilations.fetch_add(1, Ordering::Relaxed);

                debug!(
                    target_type = T::type_name(),
                    shape,
                    properties = plan.steps().len(),
                    "compiled deserializer"
                );

                Arc::new(plan)
            }
        };

        DeserializeFn { strategy, shape }
    }
}

impl core::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Resolver")
            .field("cached", &self.len())
            .field("compilations", &self.compilations())
            .finish()
    }
}

impl<T: 'static> DeserializeFn<T> {
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Structural hash of the export this function was compiled from.
    pub fn shape(&self) -> u64 {
        self.shape
    }

    /// Returns `true` if both handles share the same compiled strategy.
    pub fn ptr_eq(&self, other: &DeserializeFn<T>) -> bool {
        Arc::ptr_eq(&self.strategy, &other.strategy)
    }

    /// Reads every remaining row of the cursor's current result set.
    pub fn deserialize<C: Cursor>(
        &self,
        cursor: &mut C,
        columns: &mut ColumnChecker,
    ) -> Result<Vec<T>> {
        self.rows(cursor, columns).collect()
    }

    /// Reads rows lazily, one per call to `next`.
    pub fn rows<'a, C: Cursor>(
        &'a self,
        cursor: &'a mut C,
        columns: &'a mut ColumnChecker,
    ) -> Rows<'a, T, C> {
        Rows {
            deserializer: self,
            cursor,
            columns,
            cancel: None,
            state: State::Pending,
        }
    }

    /// Reads every remaining row of an asynchronous cursor's current result
    /// set, checking `cancel` before each advance.
    pub async fn deserialize_async<C: AsyncCursor>(
        &self,
        cursor: &mut C,
        columns: &mut ColumnChecker,
        cancel: Option<&Cancellation>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();

        columns.bind(&*cursor);
        if !self.strategy.applies_to(&*cursor) {
            return Ok(items);
        }

        loop {
            if let Some(cancel) = cancel {
                cancel.check()?;
            }

            if !cursor.advance().await? {
                break;
            }

            items.push(self.strategy.materialize(&*cursor, columns)?);
        }

        columns.build_report(&*cursor);
        Ok(items)
    }

    /// Streams the rows of an asynchronous cursor's current result set.
    pub fn stream<'a, C: AsyncCursor>(
        &'a self,
        cursor: &'a mut C,
        columns: &'a mut ColumnChecker,
        cancel: Option<Cancellation>,
    ) -> impl Stream<Item = Result<T>> + 'a {
        async_stream::try_stream! {
            columns.bind(&*cursor);

            if self.strategy.applies_to(&*cursor) {
                loop {
                    if let Some(cancel) = &cancel {
                        cancel.check()?;
                    }

                    if !cursor.advance().await? {
                        break;
                    }

                    let item = self.strategy.materialize(&*cursor, columns)?;
                    yield item;
                }

                columns.build_report(&*cursor);
            }
        }
    }
}

impl<T> Clone for DeserializeFn<T> {
    fn clone(&self) -> Self {
        DeserializeFn {
            strategy: self.strategy.clone(),
            shape: self.shape,
        }
    }
}

impl<T: 'static> core::fmt::Debug for DeserializeFn<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("DeserializeFn")
            .field("kind", &self.strategy.kind())
            .field("shape", &self.shape)
            .finish()
    }
}

impl<T, C> Rows<'_, T, C> {
    /// Stops reading with [`Error::cancelled`](crate::Error::cancelled)
    /// once `cancel` fires.
    pub fn with_cancellation(mut self, cancel: Cancellation) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl<T: 'static, C: Cursor> Iterator for Rows<'_, T, C> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        let deserializer = self.deserializer;
        let strategy = &deserializer.strategy;

        match self.state {
            State::Done => return None,
            State::Pending => {
                self.columns.bind(&*self.cursor);
                if !strategy.applies_to(&*self.cursor) {
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Reading;
            }
            State::Reading => {}
        }

        let item = match self.advance() {
            Ok(true) => strategy.materialize(&*self.cursor, self.columns).map(Some),
            Ok(false) => {
                self.columns.build_report(&*self.cursor);
                Ok(None)
            }
            Err(err) => Err(err),
        };

        match item {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl<T, C: Cursor> Rows<'_, T, C> {
    fn advance(&mut self) -> Result<bool> {
        if let Some(cancel) = &self.cancel {
            cancel.check()?;
        }
        self.cursor.advance()
    }
}

impl<T: 'static, C: Cursor> std::iter::FusedIterator for Rows<'_, T, C> {}
