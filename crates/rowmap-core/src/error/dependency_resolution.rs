use super::Error;

/// Error when a collaborator required by the mapping layer could not be
/// wired up.
#[derive(Debug)]
pub(super) struct DependencyResolutionError {
    dependency: Box<str>,
}

impl std::error::Error for DependencyResolutionError {}

impl core::fmt::Display for DependencyResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to resolve dependency `{}`", self.dependency)
    }
}

impl Error {
    /// Creates a dependency resolution error.
    pub fn dependency_resolution(dependency: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DependencyResolution(
            DependencyResolutionError {
                dependency: dependency.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a dependency resolution error.
    pub fn is_dependency_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DependencyResolution(_))
    }
}
