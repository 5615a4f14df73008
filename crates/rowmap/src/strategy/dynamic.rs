use super::{Strategy, StrategyKind};
use crate::{ColumnChecker, DynamicRow, Result, Row};

/// Copies every column of the row into a [`DynamicRow`].
pub(crate) struct DynamicStrategy<T> {
    from_row: fn(DynamicRow) -> T,
}

impl<T> DynamicStrategy<T> {
    pub(crate) fn new(from_row: fn(DynamicRow) -> T) -> DynamicStrategy<T> {
        DynamicStrategy { from_row }
    }
}

impl<T: 'static> Strategy<T> for DynamicStrategy<T> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dynamic
    }

    fn materialize(&self, row: &dyn Row, columns: &mut ColumnChecker) -> Result<T> {
        let count = row.field_count();
        let mut dynamic = DynamicRow::with_capacity(count);

        for ordinal in 0..count {
            let value = row.value(ordinal)?;
            let name = columns.column_name(row, ordinal).unwrap_or_default();
            dynamic.insert(name, value);
        }

        Ok((self.from_row)(dynamic))
    }
}
