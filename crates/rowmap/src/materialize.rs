use crate::{mapping::Property, strategy::Strategy, DynamicRow, MappingExport, Primitive, Result};
use rowmap_core::{
    jiff,
    stmt::{Type, Value},
    uuid,
};

use std::sync::Arc;

/// A type rows can be materialized into.
///
/// Scalars and `Option`s of scalars are covered by this crate; structs
/// derive it with `#[derive(Materialize)]`.
pub trait Materialize: Sized + 'static {
    /// How the resolver deserializes rows into this type.
    fn kind() -> Kind<Self>;

    /// Name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Every property of the type that can be bound to a column.
    fn properties() -> Vec<Property<Self>> {
        Vec::new()
    }
}

/// Classification of a target type, decided once per type.
pub enum Kind<T> {
    /// Rows are read as a whole into a [`DynamicRow`] and converted.
    Dynamic(fn(DynamicRow) -> T),

    /// The first column of each row is loaded directly.
    Scalar {
        ty: Type,
        nullable: bool,
        load: fn(Value) -> Result<T>,
    },

    /// A shape with its own strategy, built from the mapping export.
    Custom(fn(&MappingExport<T>) -> Arc<dyn Strategy<T>>),

    /// Instances are constructed with the given function and populated
    /// property by property by a compiled plan.
    Complex(fn() -> T),
}

impl<T: Primitive> Kind<T> {
    pub fn scalar() -> Kind<T> {
        Kind::Scalar {
            ty: T::TYPE,
            nullable: T::NULLABLE,
            load: T::load,
        }
    }
}

impl<T> core::fmt::Debug for Kind<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Kind::Dynamic(_) => f.write_str("Dynamic"),
            Kind::Scalar { ty, nullable, .. } => f
                .debug_struct("Scalar")
                .field("ty", ty)
                .field("nullable", nullable)
                .finish(),
            Kind::Custom(_) => f.write_str("Custom"),
            Kind::Complex(_) => f.write_str("Complex"),
        }
    }
}

macro_rules! impl_scalar {
    ( $( $ty:ty ),* ) => {
        $(
            impl Materialize for $ty {
                fn kind() -> Kind<Self> {
                    Kind::scalar()
                }
            }
        )*
    };
}

impl_scalar! {
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    Vec<u8>,
    Value,
    uuid::Uuid,
    jiff::Timestamp,
    jiff::civil::Date,
    jiff::civil::Time,
    jiff::civil::DateTime,
    jiff::SignedDuration
}

impl<T: Primitive + 'static> Materialize for Option<T> {
    fn kind() -> Kind<Self> {
        Kind::scalar()
    }
}

impl Materialize for DynamicRow {
    fn kind() -> Kind<Self> {
        Kind::Dynamic(std::convert::identity)
    }
}
