//! Column alias resolution.
//!
//! A [`ColumnChecker`] maps column aliases to ordinals for a result set. The
//! first lookup of an alias scans the row's columns case-insensitively;
//! later lookups are answered from a per-checker cache. The cache is keyed
//! on the shape of the result set it was built against, so handing the
//! checker a result set with different columns discards stale ordinals
//! instead of reading the wrong cells.

use crate::Row;

use indexmap::IndexMap;
use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ColumnChecker {
    /// Alias, as requested, to the ordinal it resolved to. Misses are cached
    /// as `None`.
    ordinals: HashMap<Box<str>, Option<usize>>,

    /// Shape of the result set the cache was built against.
    signature: Option<Signature>,

    caching: bool,

    report: Option<ColumnReport>,
}

/// Every column of a result set and its ordinal, captured after the result
/// set has been consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnReport {
    columns: IndexMap<String, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Signature {
    field_count: usize,
    names: u64,
}

impl ColumnChecker {
    pub fn new() -> ColumnChecker {
        ColumnChecker {
            ordinals: HashMap::new(),
            signature: None,
            caching: true,
            report: None,
        }
    }

    /// A checker that never retains resolved ordinals.
    pub fn uncached() -> ColumnChecker {
        ColumnChecker {
            caching: false,
            ..ColumnChecker::new()
        }
    }

    pub fn is_caching(&self) -> bool {
        self.caching
    }

    /// Points the checker at the result set `row` belongs to.
    ///
    /// Cached ordinals are dropped when the result set's columns differ from
    /// those the cache was built against.
    pub fn bind(&mut self, row: &dyn Row) {
        if !self.caching {
            return;
        }

        let signature = Signature::of(row);

        match self.signature {
            Some(current) if current == signature => {}
            Some(_) => {
                debug!(
                    field_count = signature.field_count,
                    cached = self.ordinals.len(),
                    "result set shape changed; discarding cached column ordinals"
                );
                self.ordinals.clear();
                self.report = None;
                self.signature = Some(signature);
            }
            None => self.signature = Some(signature),
        }
    }

    /// Returns the ordinal of the column named `alias`, if the result set
    /// has one. Names compare case-insensitively; an exact match wins over a
    /// case-insensitive one.
    pub fn has_column(&mut self, row: &dyn Row, alias: &str) -> Option<usize> {
        if let Some(ordinal) = self.ordinals.get(alias) {
            return *ordinal;
        }

        let ordinal = scan(row, alias);

        if self.caching {
            self.ordinals.insert(alias.into(), ordinal);
        }

        ordinal
    }

    /// Returns the name of the column at `ordinal`.
    pub fn column_name<'r>(&mut self, row: &'r dyn Row, ordinal: usize) -> Option<&'r str> {
        let name = row.column_name(ordinal)?;

        if self.caching && !self.ordinals.contains_key(name) {
            self.ordinals.insert(name.into(), Some(ordinal));
        }

        Some(name)
    }

    /// Records every column of the result set `row` belongs to.
    pub fn build_report(&mut self, row: &dyn Row) {
        if !self.caching {
            return;
        }

        let mut columns = IndexMap::with_capacity(row.field_count());

        for ordinal in 0..row.field_count() {
            if let Some(name) = row.column_name(ordinal) {
                columns.entry(name.to_string()).or_insert(ordinal);
            }
        }

        self.report = Some(ColumnReport { columns });
    }

    /// The report built for the last fully consumed result set.
    pub fn report(&self) -> Option<&ColumnReport> {
        self.report.as_ref()
    }

    /// Number of aliases currently cached, including misses.
    pub fn cached(&self) -> usize {
        self.ordinals.len()
    }

    /// Drops all cached state.
    pub fn invalidate(&mut self) {
        self.ordinals.clear();
        self.signature = None;
        self.report = None;
    }
}

impl Default for ColumnChecker {
    fn default() -> Self {
        ColumnChecker::new()
    }
}

impl ColumnReport {
    /// Ordinal of the column named `name`, compared case-insensitively.
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        if let Some(ordinal) = self.columns.get(name) {
            return Some(*ordinal);
        }

        self.columns
            .iter()
            .find(|(column, _)| same_name(column, name))
            .map(|(_, ordinal)| *ordinal)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ordinal(name).is_some()
    }

    /// Columns in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns
            .iter()
            .map(|(name, ordinal)| (name.as_str(), *ordinal))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Signature {
    fn of(row: &dyn Row) -> Signature {
        let field_count = row.field_count();
        let mut hasher = DefaultHasher::new();

        for ordinal in 0..field_count {
            match row.column_name(ordinal) {
                Some(name) => name.to_lowercase().hash(&mut hasher),
                None => hasher.write_u8(0),
            }
        }

        Signature {
            field_count,
            names: hasher.finish(),
        }
    }
}

fn scan(row: &dyn Row, alias: &str) -> Option<usize> {
    let count = row.field_count();

    (0..count)
        .find(|&ordinal| row.column_name(ordinal) == Some(alias))
        .or_else(|| {
            (0..count).find(|&ordinal| {
                row.column_name(ordinal)
                    .is_some_and(|name| same_name(name, alias))
            })
        })
}

fn same_name(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}
