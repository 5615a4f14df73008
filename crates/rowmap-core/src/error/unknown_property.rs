use super::Error;

/// Error when a mapping configuration names a property the target type does
/// not have.
#[derive(Debug)]
pub(super) struct UnknownPropertyError {
    target: Box<str>,
    property: Box<str>,
}

impl std::error::Error for UnknownPropertyError {}

impl core::fmt::Display for UnknownPropertyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown property `{}` on `{}`",
            self.property, self.target
        )
    }
}

impl Error {
    /// Creates an unknown property error.
    pub fn unknown_property(target: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownProperty(UnknownPropertyError {
            target: target.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown property error.
    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownProperty(_))
    }
}
