use crate::{ColumnChecker, Cursor, MappingExport, Materialize, Resolver, Result};

use std::sync::Arc;
use tracing::trace;

/// Reads a cursor that carries several result sets, one target type per
/// set.
///
/// Each result set position keeps its own [`ColumnChecker`]. Hand the
/// checkers back with [`with_columns`](MultiReader::with_columns) to reuse
/// resolved ordinals across executions of the same batch.
pub struct MultiReader<'c, C> {
    cursor: &'c mut C,
    resolver: Arc<Resolver>,
    columns: Vec<ColumnChecker>,
    position: usize,
}

impl<'c, C: Cursor> MultiReader<'c, C> {
    pub fn new(cursor: &'c mut C) -> MultiReader<'c, C> {
        MultiReader {
            cursor,
            resolver: Resolver::global(),
            columns: Vec::new(),
            position: 0,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<Resolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnChecker>) -> Self {
        self.columns = columns;
        self
    }

    /// Reads the next result set into `T` using its declarative mapping.
    pub fn read<T: Materialize>(&mut self) -> Result<Vec<T>> {
        self.read_with(&MappingExport::declarative())
    }

    /// Reads the next result set into `T` using `export`.
    ///
    /// Returns an empty collection once the cursor has no more result sets.
    pub fn read_with<T: Materialize>(&mut self, export: &MappingExport<T>) -> Result<Vec<T>> {
        if self.position > 0 && !self.cursor.next_result()? {
            trace!(position = self.position, "no more result sets");
            return Ok(Vec::new());
        }

        let deserializer = self.resolver.resolve(export);

        if self.columns.len() <= self.position {
            self.columns.resize_with(self.position + 1, ColumnChecker::new);
        }

        let items = deserializer.deserialize(&mut *self.cursor, &mut self.columns[self.position]);
        self.position += 1;
        items
    }

    /// Number of result sets read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The per-position column checkers.
    pub fn into_columns(self) -> Vec<ColumnChecker> {
        self.columns
    }
}
