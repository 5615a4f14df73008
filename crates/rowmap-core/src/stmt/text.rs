use super::{Type, Value};
use crate::Error;

/// String targets accept any non-null value through its display form.
impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(val) => Ok(val),
            Value::Null => Err(Error::invalid_cast(Type::String)),
            other => Ok(other.to_string()),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(val) => Ok(val),
            Value::Null => Err(Error::invalid_cast(Type::Bool)),
            Value::String(ref s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "y" | "t" => Ok(true),
                "false" | "0" | "no" | "n" | "f" => Ok(false),
                _ => Err(Error::coercion(value, Type::Bool)),
            },
            ref other => match other.as_i128() {
                Some(val) => Ok(val != 0),
                None => Err(Error::coercion(value, Type::Bool)),
            },
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(val) => Ok(val),
            Value::String(val) => Ok(val.into_bytes()),
            Value::Uuid(val) => Ok(val.as_bytes().to_vec()),
            Value::Null => Err(Error::invalid_cast(Type::Bytes)),
            other => Err(Error::coercion(other, Type::Bytes)),
        }
    }
}

impl TryFrom<Value> for uuid::Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Uuid(val) => Ok(val),
            Value::Null => Err(Error::invalid_cast(Type::Uuid)),
            Value::String(ref s) => match uuid::Uuid::parse_str(s.trim()) {
                Ok(val) => Ok(val),
                Err(_) => Err(Error::coercion(value, Type::Uuid)),
            },
            Value::Bytes(ref b) => match uuid::Uuid::from_slice(b) {
                Ok(val) => Ok(val),
                Err(_) => Err(Error::coercion(value, Type::Uuid)),
            },
            other => Err(Error::coercion(other, Type::Uuid)),
        }
    }
}
