use super::Error;

/// Error raised by a result cache provider or while (de)serializing a cached
/// collection.
#[derive(Debug)]
pub(super) struct CacheError {
    message: Box<str>,
}

impl std::error::Error for CacheError {}

impl core::fmt::Display for CacheError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "result cache: {}", self.message)
    }
}

impl Error {
    /// Creates a result cache error.
    pub fn cache(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Cache(CacheError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a result cache error.
    pub fn is_cache(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cache(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::cache(err.to_string())
    }
}
