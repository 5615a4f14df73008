use super::{Strategy, StrategyKind};
use crate::{
    mapping::{Conversion, Setter},
    ColumnChecker, Error, MappingExport, Result, Row, Type, Value,
};

/// Lowers a [`MappingExport`] into a [`Plan`].
pub(crate) struct Compiler<'a, T> {
    export: &'a MappingExport<T>,
    type_name: &'static str,
}

/// A compiled row-to-object function for a complex type.
///
/// Each step binds one property: look up its column, skip it when absent or
/// null, convert the cell and assign it.
pub(crate) struct Plan<T> {
    new: fn() -> T,
    type_name: &'static str,
    steps: Box<[Step<T>]>,
}

pub(crate) struct Step<T> {
    property: &'static str,
    alias: Box<str>,
    declared: &'static str,
    ty: Type,
    conversion: Conversion,
    set: Setter<T>,
}

impl<'a, T> Compiler<'a, T> {
    pub(crate) fn new(export: &'a MappingExport<T>, type_name: &'static str) -> Compiler<'a, T> {
        Compiler { export, type_name }
    }

    pub(crate) fn compile(&self, new: fn() -> T) -> Plan<T> {
        let steps = self
            .export
            .iter()
            .map(|config| {
                let property = config.property();

                Step {
                    property: property.name(),
                    alias: config.active_alias().into(),
                    declared: property.declared(),
                    ty: property.ty().clone(),
                    conversion: config.active_conversion().clone(),
                    set: property.setter(),
                }
            })
            .collect();

        Plan {
            new,
            type_name: self.type_name,
            steps,
        }
    }
}

impl<T> Plan<T> {
    pub(crate) fn steps(&self) -> &[Step<T>] {
        &self.steps
    }
}

impl<T> Step<T> {
    pub(crate) fn alias(&self) -> &str {
        &self.alias
    }

    /// Converts `value` and assigns it to `target`. Failures are reported
    /// against this step's column and property.
    fn bind(&self, target: &mut T, value: Value) -> Result<()> {
        self.conversion
            .apply(&self.ty, value)
            .and_then(|converted| (self.set)(target, converted))
            .map_err(|cause| cause.context(self.binding_error()))
    }

    fn binding_error(&self) -> Error {
        Error::column_binding(self.property, &*self.alias, self.declared)
    }
}

impl<T: 'static> Strategy<T> for Plan<T> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Complex
    }

    fn materialize(&self, row: &dyn Row, columns: &mut ColumnChecker) -> Result<T> {
        let mut target = (self.new)();

        for step in self.steps.iter() {
            let Some(ordinal) = columns.has_column(row, &step.alias) else {
                continue;
            };

            let value = row.value(ordinal)?;
            if value.is_null() {
                continue;
            }

            step.bind(&mut target, value)?;
        }

        Ok(target)
    }
}

impl<T> core::fmt::Debug for Plan<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Plan")
            .field("type_name", &self.type_name)
            .field(
                "steps",
                &self.steps.iter().map(|step| step.alias()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
