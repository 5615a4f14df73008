use super::Error;

/// Error when assigning one mapped property during materialization failed.
///
/// The underlying failure is attached as the cause of the error.
#[derive(Debug)]
pub(super) struct ColumnBindingError {
    pub(super) property: Box<str>,
    pub(super) alias: Box<str>,
    pub(super) declared_type: Box<str>,
}

impl std::error::Error for ColumnBindingError {}

impl core::fmt::Display for ColumnBindingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to bind column `{}` to property `{}` ({})",
            self.alias, self.property, self.declared_type
        )
    }
}

impl Error {
    /// Creates a column binding error.
    ///
    /// Use it as the context of the failure it describes:
    /// `cause.context(Error::column_binding(..))`.
    pub fn column_binding(
        property: impl Into<String>,
        alias: impl Into<String>,
        declared_type: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ColumnBinding(ColumnBindingError {
            property: property.into().into(),
            alias: alias.into().into(),
            declared_type: declared_type.into().into(),
        }))
    }

    /// Returns `true` if this error is a column binding error.
    pub fn is_column_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnBinding(_))
    }

    /// Returns the `(property, alias, declared type)` of a column binding error.
    pub fn binding(&self) -> Option<(&str, &str, &str)> {
        match self.kind() {
            super::ErrorKind::ColumnBinding(err) => {
                Some((&*err.property, &*err.alias, &*err.declared_type))
            }
            _ => None,
        }
    }
}
