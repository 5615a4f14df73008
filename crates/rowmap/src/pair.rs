use crate::{
    mapping::{Conversion, Property},
    strategy::{Strategy, StrategyKind},
    ColumnChecker, Error, Kind, MappingExport, Materialize, Primitive, Result, Row, Type, Value,
};

use serde::{Deserialize, Serialize};
use std::{marker::PhantomData, sync::Arc};

/// A two-column row.
///
/// The key binds to the `Key` column and the value to the `Value` column.
/// When the result set has no column with the configured alias, the key is
/// read from the first column and the value from the second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub fn new(key: K, value: V) -> KeyValuePair<K, V> {
        KeyValuePair { key, value }
    }
}

impl<K: Primitive + 'static, V: Primitive + 'static> Materialize for KeyValuePair<K, V> {
    fn kind() -> Kind<Self> {
        Kind::Custom(PairStrategy::<K, V>::build)
    }

    fn type_name() -> &'static str {
        "KeyValuePair"
    }

    fn properties() -> Vec<Property<Self>> {
        vec![
            Property::new(
                "Key",
                K::TYPE,
                K::NULLABLE,
                std::any::type_name::<K>(),
                |pair: &mut Self, value| {
                    pair.key = K::load(value)?;
                    Ok(())
                },
            ),
            Property::new(
                "Value",
                V::TYPE,
                V::NULLABLE,
                std::any::type_name::<V>(),
                |pair: &mut Self, value| {
                    pair.value = V::load(value)?;
                    Ok(())
                },
            ),
        ]
    }
}

struct PairStrategy<K, V> {
    key: Side,
    value: Side,
    _p: PhantomData<fn() -> (K, V)>,
}

struct Side {
    property: &'static str,
    alias: Box<str>,
    fallback: usize,
    ty: Type,
    conversion: Conversion,
}

impl<K: Primitive + 'static, V: Primitive + 'static> PairStrategy<K, V> {
    fn build(export: &MappingExport<KeyValuePair<K, V>>) -> Arc<dyn Strategy<KeyValuePair<K, V>>> {
        Arc::new(PairStrategy::<K, V> {
            key: Side::from_export(export, "Key", 0, K::TYPE),
            value: Side::from_export(export, "Value", 1, V::TYPE),
            _p: PhantomData,
        })
    }
}

impl Side {
    fn from_export<T>(
        export: &MappingExport<T>,
        property: &'static str,
        fallback: usize,
        ty: Type,
    ) -> Side {
        let (alias, conversion) = match export.get(property) {
            Some(config) => (
                config.active_alias().into(),
                config.active_conversion().clone(),
            ),
            None => (property.into(), Conversion::default()),
        };

        Side {
            property,
            alias,
            fallback,
            ty,
            conversion,
        }
    }

    fn read<P: Primitive>(&self, row: &dyn Row, columns: &mut ColumnChecker) -> Result<P> {
        let ordinal = columns
            .has_column(row, &self.alias)
            .unwrap_or(self.fallback);

        row.value(ordinal)
            .and_then(|value: Value| self.conversion.apply(&self.ty, value))
            .and_then(P::load)
            .map_err(|cause| {
                cause.context(Error::column_binding(
                    self.property,
                    &*self.alias,
                    self.ty.name(),
                ))
            })
    }
}

impl<K: Primitive + 'static, V: Primitive + 'static> Strategy<KeyValuePair<K, V>>
    for PairStrategy<K, V>
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Custom
    }

    fn materialize(
        &self,
        row: &dyn Row,
        columns: &mut ColumnChecker,
    ) -> Result<KeyValuePair<K, V>> {
        Ok(KeyValuePair {
            key: self.key.read(row, columns)?,
            value: self.value.read(row, columns)?,
        })
    }
}
