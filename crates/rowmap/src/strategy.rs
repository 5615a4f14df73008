//! Row-to-object strategies.
//!
//! The resolver picks one strategy per target type and export, wraps it in
//! a [`DeserializeFn`](crate::DeserializeFn) and caches it. Strategies are
//! stateless; per-result-set state lives in the [`ColumnChecker`].

mod complex;
pub(crate) use complex::Compiler;

mod dynamic;
pub(crate) use dynamic::DynamicStrategy;

mod scalar;
pub(crate) use scalar::ScalarStrategy;

use crate::{ColumnChecker, Result, Row};

/// Materializes the current row of a cursor into a `T`.
pub trait Strategy<T>: Send + Sync + 'static {
    /// Which strategy family this is.
    fn kind(&self) -> StrategyKind;

    /// Returns `false` if no rows should be produced for a result set with
    /// the shape of `row`.
    fn applies_to(&self, row: &dyn Row) -> bool {
        let _ = row;
        true
    }

    fn materialize(&self, row: &dyn Row, columns: &mut ColumnChecker) -> Result<T>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Dynamic,
    Scalar,
    Custom,
    Complex,
}
