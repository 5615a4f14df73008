use super::{Strategy, StrategyKind};
use crate::{ColumnChecker, Error, Result, Row, Type, Value};

use std::marker::PhantomData;

/// Reads the first column of each row.
pub(crate) struct ScalarStrategy<T> {
    ty: Type,
    nullable: bool,
    load: fn(Value) -> Result<T>,
    _p: PhantomData<fn() -> T>,
}

impl<T> ScalarStrategy<T> {
    pub(crate) fn new(ty: Type, nullable: bool, load: fn(Value) -> Result<T>) -> ScalarStrategy<T> {
        ScalarStrategy {
            ty,
            nullable,
            load,
            _p: PhantomData,
        }
    }
}

impl<T: 'static> Strategy<T> for ScalarStrategy<T> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Scalar
    }

    fn applies_to(&self, row: &dyn Row) -> bool {
        row.field_count() > 0
    }

    fn materialize(&self, row: &dyn Row, _columns: &mut ColumnChecker) -> Result<T> {
        let value = row.value(0)?;

        if value.is_null() && !self.nullable {
            return Err(Error::invalid_cast(self.ty.clone()));
        }

        (self.load)(value)
    }
}
