use super::Type;

use jiff::{civil, SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// A single cell read from a row.
///
/// `Null` is the null sentinel: the column is present but holds a database
/// NULL. A column that is absent from the result is never represented by a
/// value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// Opaque bytes
    Bytes(Vec<u8>),

    /// A universally unique identifier
    Uuid(uuid::Uuid),

    /// An instant in time
    Timestamp(Timestamp),

    /// A calendar date
    Date(civil::Date),

    /// A wall-clock time
    Time(civil::Time),

    /// A date and time without a time zone
    DateTime(civil::DateTime),

    /// A signed span of time
    Duration(SignedDuration),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of this value.
    pub fn ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Date(_) => Type::Date,
            Self::Time(_) => Type::Time,
            Self::DateTime(_) => Type::DateTime,
            Self::Duration(_) => Type::Duration,
            Self::Null => Type::Null,
        }
    }

    /// Returns `true` if the value can be stored in a property of type `ty`
    /// without conversion.
    pub fn is_a(&self, ty: &Type) -> bool {
        match self {
            Self::Null => true,
            _ if ty.is_unknown() => true,
            _ => self.ty() == *ty,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns integer values widened to `i128`.
    pub(crate) fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Self::I8(v) => v.into(),
            Self::I16(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::I64(v) => v.into(),
            Self::U8(v) => v.into(),
            Self::U16(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::U64(v) => v.into(),
            _ => return None,
        })
    }

    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }
}

/// Renders the value the way it is stringified into `String` targets.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bool(v) => core::fmt::Display::fmt(v, f),
            Self::I8(v) => core::fmt::Display::fmt(v, f),
            Self::I16(v) => core::fmt::Display::fmt(v, f),
            Self::I32(v) => core::fmt::Display::fmt(v, f),
            Self::I64(v) => core::fmt::Display::fmt(v, f),
            Self::U8(v) => core::fmt::Display::fmt(v, f),
            Self::U16(v) => core::fmt::Display::fmt(v, f),
            Self::U32(v) => core::fmt::Display::fmt(v, f),
            Self::U64(v) => core::fmt::Display::fmt(v, f),
            Self::F32(v) => core::fmt::Display::fmt(v, f),
            Self::F64(v) => core::fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::Bytes(v) => f.write_str(&hex::encode(v)),
            Self::Uuid(v) => core::fmt::Display::fmt(v, f),
            Self::Timestamp(v) => core::fmt::Display::fmt(v, f),
            Self::Date(v) => core::fmt::Display::fmt(v, f),
            Self::Time(v) => core::fmt::Display::fmt(v, f),
            Self::DateTime(v) => core::fmt::Display::fmt(v, f),
            Self::Duration(v) => core::fmt::Display::fmt(v, f),
            Self::Null => f.write_str("NULL"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
