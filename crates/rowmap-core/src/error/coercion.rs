use super::Error;
use crate::stmt::{Type, Value};

/// Error when a cell value cannot be converted to the requested type.
#[derive(Debug)]
pub(super) struct CoercionError {
    pub(super) value: Value,
    pub(super) to_type: Type,
}

impl std::error::Error for CoercionError {}

impl core::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert {} value {:?} to {}",
            self.value.ty().name(),
            Redacted(&self.value),
            self.to_type.name()
        )
    }
}

/// Formats the offending value, truncating long strings and byte arrays.
struct Redacted<'a>(&'a Value);

impl core::fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        const MAX: usize = 64;

        match self.0 {
            Value::String(s) if s.chars().count() > MAX => {
                let head: String = s.chars().take(MAX).collect();
                write!(f, "{head:?}...")
            }
            Value::String(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            value => write!(f, "{value}"),
        }
    }
}

impl Error {
    /// Creates a coercion error.
    ///
    /// This is used when a present, non-null value cannot be converted to
    /// the target type.
    pub fn coercion(value: Value, to_type: Type) -> Error {
        Error::from(super::ErrorKind::Coercion(CoercionError { value, to_type }))
    }

    /// Returns `true` if this error is a coercion error.
    pub fn is_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Coercion(_))
    }

    /// Returns the source type and target type of a coercion error.
    pub fn coercion_types(&self) -> Option<(Type, Type)> {
        match self.kind() {
            super::ErrorKind::Coercion(err) => Some((err.value.ty(), err.to_type.clone())),
            _ => None,
        }
    }
}
