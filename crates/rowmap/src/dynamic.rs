use crate::{Primitive, Result, Value};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A row materialized without a target type: column names to cells, in
/// column order.
///
/// Lookups by name are case-insensitive. When a result set repeats a column
/// name, the later cell replaces the earlier one and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRow {
    cells: IndexMap<String, Value>,
}

impl DynamicRow {
    pub fn new() -> DynamicRow {
        DynamicRow::default()
    }

    pub fn with_capacity(capacity: usize) -> DynamicRow {
        DynamicRow {
            cells: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) -> Option<Value> {
        self.cells.insert(column.into(), value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.position(column).map(|index| &self.cells[index])
    }

    /// Loads the named cell into `T`. Returns `None` if there is no such
    /// column.
    pub fn get_as<T: Primitive>(&self, column: &str) -> Result<Option<T>> {
        self.get(column).cloned().map(T::load).transpose()
    }

    /// The cell at `index`, in column order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.cells
            .get_index(index)
            .map(|(column, value)| (column.as_str(), value))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.cells
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.cells
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.cells.get_index_of(column).or_else(|| {
            let lower = column.to_lowercase();
            self.cells
                .keys()
                .position(|name| name.to_lowercase() == lower)
        })
    }
}

impl FromIterator<(String, Value)> for DynamicRow {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        DynamicRow {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DynamicRow {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
