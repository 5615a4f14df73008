use super::Value;
use crate::Result;

/// The type of a cell value or of a mapped property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// String type
    String,

    /// Opaque bytes
    Bytes,

    /// A universally unique identifier
    Uuid,

    /// An instant in time (UTC)
    Timestamp,

    /// A calendar date
    Date,

    /// A wall-clock time
    Time,

    /// A calendar date and wall-clock time without a time zone
    DateTime,

    /// A signed span of time
    Duration,

    /// The type of the null sentinel.
    Null,

    /// Values of any type are accepted as-is.
    Unknown,
}

impl Type {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Uuid => "Uuid",
            Self::Timestamp => "Timestamp",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Duration => "Duration",
            Self::Null => "Null",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Converts `value` into a value of this type.
    ///
    /// Null values are passed through; deciding whether null is acceptable is
    /// left to the consumer of the converted value.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match self {
            Self::Bool => Value::Bool(value.try_into()?),
            Self::I8 => Value::I8(value.try_into()?),
            Self::I16 => Value::I16(value.try_into()?),
            Self::I32 => Value::I32(value.try_into()?),
            Self::I64 => Value::I64(value.try_into()?),
            Self::U8 => Value::U8(value.try_into()?),
            Self::U16 => Value::U16(value.try_into()?),
            Self::U32 => Value::U32(value.try_into()?),
            Self::U64 => Value::U64(value.try_into()?),
            Self::F32 => Value::F32(value.try_into()?),
            Self::F64 => Value::F64(value.try_into()?),
            Self::String => Value::String(value.try_into()?),
            Self::Bytes => Value::Bytes(value.try_into()?),
            Self::Uuid => Value::Uuid(value.try_into()?),
            Self::Timestamp => Value::Timestamp(value.try_into()?),
            Self::Date => Value::Date(value.try_into()?),
            Self::Time => Value::Time(value.try_into()?),
            Self::DateTime => Value::DateTime(value.try_into()?),
            Self::Duration => Value::Duration(value.try_into()?),
            Self::Null | Self::Unknown => value,
        })
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
