use rowmap::{async_trait, AsyncCursor, Cursor, MemoryCursor, Result, ResultSet, Row, Value};

use std::sync::{Arc, Mutex};

/// A cursor wrapper that logs every call made through it.
#[derive(Debug)]
pub struct LoggingCursor {
    inner: MemoryCursor,

    /// Shared with the test so the log can be inspected after the cursor has
    /// been handed to a reader.
    ops_log: Arc<Mutex<Vec<CursorOp>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorOp {
    Advance(bool),
    NextResult(bool),
    Value(usize),
}

impl LoggingCursor {
    pub fn new(sets: impl IntoIterator<Item = ResultSet>) -> Self {
        Self {
            inner: MemoryCursor::new(sets),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<CursorOp>>> {
        self.ops_log.clone()
    }

    pub fn ops(&self) -> Vec<CursorOp> {
        self.ops_log.lock().unwrap().clone()
    }

    /// Number of successful row advances.
    pub fn rows_read(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, CursorOp::Advance(true)))
            .count()
    }

    /// Ordinals of every cell read, in order.
    pub fn cells_read(&self) -> Vec<usize> {
        self.ops()
            .iter()
            .filter_map(|op| match op {
                CursorOp::Value(ordinal) => Some(*ordinal),
                _ => None,
            })
            .collect()
    }

    fn log(&self, op: CursorOp) {
        self.ops_log.lock().unwrap().push(op);
    }
}

impl Row for LoggingCursor {
    fn field_count(&self) -> usize {
        self.inner.field_count()
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.inner.column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        self.log(CursorOp::Value(ordinal));
        self.inner.value(ordinal)
    }
}

impl Cursor for LoggingCursor {
    fn advance(&mut self) -> Result<bool> {
        let more = Cursor::advance(&mut self.inner)?;
        self.log(CursorOp::Advance(more));
        Ok(more)
    }

    fn next_result(&mut self) -> Result<bool> {
        let more = Cursor::next_result(&mut self.inner)?;
        self.log(CursorOp::NextResult(more));
        Ok(more)
    }
}

#[async_trait]
impl AsyncCursor for LoggingCursor {
    async fn advance(&mut self) -> Result<bool> {
        let more = AsyncCursor::advance(&mut self.inner).await?;
        self.log(CursorOp::Advance(more));
        Ok(more)
    }

    async fn next_result(&mut self) -> Result<bool> {
        let more = AsyncCursor::next_result(&mut self.inner).await?;
        self.log(CursorOp::NextResult(more));
        Ok(more)
    }
}
