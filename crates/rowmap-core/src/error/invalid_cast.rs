use super::Error;
use crate::stmt::Type;

/// Error when a database null is read into a type that cannot hold null.
///
/// This is a nullability violation rather than a shape mismatch and is kept
/// apart from coercion errors so callers can tell the two apart.
#[derive(Debug)]
pub(super) struct InvalidCastError {
    pub(super) to_type: Type,
}

impl std::error::Error for InvalidCastError {}

impl core::fmt::Display for InvalidCastError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid cast: value types cannot accept null (target {})",
            self.to_type.name()
        )
    }
}

impl Error {
    /// Creates an invalid cast error for a null read into `to_type`.
    pub fn invalid_cast(to_type: Type) -> Error {
        Error::from(super::ErrorKind::InvalidCast(InvalidCastError { to_type }))
    }

    /// Returns `true` if this error is a null-into-non-nullable cast.
    pub fn is_invalid_cast(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidCast(_))
    }
}
