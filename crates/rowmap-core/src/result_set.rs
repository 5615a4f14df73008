use crate::{
    cursor::{AsyncCursor, Cursor, Row},
    stmt::Value,
    Error, Result,
};

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A fully buffered result set: column names and rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row. The row must have one cell per column.
    #[track_caller]
    pub fn row<I, V>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push(cells.into_iter().map(Into::into).collect());
        self
    }

    #[track_caller]
    pub fn push(&mut self, row: Vec<Value>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row has {} cells; result set has {} columns",
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_cursor(self) -> MemoryCursor {
        MemoryCursor::new(vec![self])
    }
}

/// A cursor over one or more buffered result sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    current: Option<ResultSet>,
    pending: VecDeque<ResultSet>,
    position: Option<usize>,
}

impl MemoryCursor {
    pub fn new(sets: impl IntoIterator<Item = ResultSet>) -> Self {
        let mut pending: VecDeque<_> = sets.into_iter().collect();
        Self {
            current: pending.pop_front(),
            pending,
            position: None,
        }
    }

    fn current_row(&self) -> Result<&[Value]> {
        let (Some(set), Some(position)) = (&self.current, self.position) else {
            crate::bail!("cursor is not positioned on a row");
        };

        match set.rows.get(position) {
            Some(row) => Ok(row),
            None => crate::bail!("cursor is past the last row"),
        }
    }

    fn step(&mut self) -> bool {
        let Some(set) = &self.current else {
            return false;
        };

        let next = self.position.map_or(0, |position| position + 1);
        if next < set.rows.len() {
            self.position = Some(next);
            true
        } else {
            self.position = Some(set.rows.len());
            false
        }
    }

    fn step_result(&mut self) -> bool {
        self.current = self.pending.pop_front();
        self.position = None;
        self.current.is_some()
    }
}

impl Row for MemoryCursor {
    fn field_count(&self) -> usize {
        self.current.as_ref().map_or(0, |set| set.columns.len())
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|set| set.columns.get(ordinal))
            .map(String::as_str)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        let row = self.current_row()?;
        row.get(ordinal).cloned().ok_or_else(|| {
            Error::from_args(format_args!(
                "column ordinal {ordinal} out of range ({} columns)",
                row.len()
            ))
        })
    }
}

impl Cursor for MemoryCursor {
    fn advance(&mut self) -> Result<bool> {
        Ok(self.step())
    }

    fn next_result(&mut self) -> Result<bool> {
        Ok(self.step_result())
    }
}

#[async_trait::async_trait]
impl AsyncCursor for MemoryCursor {
    async fn advance(&mut self) -> Result<bool> {
        Ok(self.step())
    }

    async fn next_result(&mut self) -> Result<bool> {
        Ok(self.step_result())
    }
}

impl From<ResultSet> for MemoryCursor {
    fn from(set: ResultSet) -> Self {
        set.into_cursor()
    }
}
