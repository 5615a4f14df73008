//! The row cursor boundary.
//!
//! Database clients expose their result sets through these traits. The
//! mapping layer never opens connections or issues commands; it only pulls
//! rows from a cursor it is handed.

use crate::{stmt::Value, Result};

/// Access to the current row of a result set.
pub trait Row {
    /// Number of columns in the current result set.
    fn field_count(&self) -> usize;

    /// Name of the column at `ordinal`, or `None` when out of range.
    fn column_name(&self, ordinal: usize) -> Option<&str>;

    /// Reads the cell at `ordinal` of the current row.
    ///
    /// A database NULL is returned as [`Value::Null`].
    fn value(&self, ordinal: usize) -> Result<Value>;
}

/// A synchronous, forward-only cursor.
pub trait Cursor: Row {
    /// Moves to the next row. Returns `false` once the result set is
    /// exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Moves to the next result set. Returns `false` when there is none.
    fn next_result(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// An asynchronous, forward-only cursor.
///
/// Advancing is the only point where the cursor waits on I/O.
#[async_trait::async_trait]
pub trait AsyncCursor: Row + Send {
    /// Moves to the next row. Returns `false` once the result set is
    /// exhausted.
    async fn advance(&mut self) -> Result<bool>;

    /// Moves to the next result set. Returns `false` when there is none.
    async fn next_result(&mut self) -> Result<bool> {
        Ok(false)
    }
}

impl<R: Row + ?Sized> Row for &mut R {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        (**self).column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        (**self).value(ordinal)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn next_result(&mut self) -> Result<bool> {
        (**self).next_result()
    }
}
