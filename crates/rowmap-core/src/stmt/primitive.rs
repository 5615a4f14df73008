use super::{Type, Value};
use crate::{Error, Result};

use jiff::{civil, SignedDuration, Timestamp};

/// A type that is read from a single cell.
///
/// Implemented for the built-in scalar types and for `Option` of each of
/// them. `load` applies the coercion rules: a null cell loads into `None` for
/// nullable types and fails with an invalid cast error otherwise.
pub trait Primitive: Sized {
    /// The type values are coerced to before loading.
    const TYPE: Type;

    /// Whether the type can represent the null sentinel.
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    /// Returns `true` if the primitive represents a nullable type (e.g. `Option`).
    fn nullable() -> bool {
        Self::NULLABLE
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    // Checked up front so a null never reaches the conversion.
                    if value.is_null() {
                        return Err(Error::invalid_cast(Self::TYPE));
                    }

                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    uuid::Uuid => Uuid,
    Timestamp => Timestamp,
    civil::Date => Date,
    civil::Time => Time,
    civil::DateTime => DateTime,
    SignedDuration => Duration
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

/// Untyped cells are loaded as-is.
impl Primitive for Value {
    const TYPE: Type = Type::Unknown;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }
}
