use super::Error;

/// Error raised by the row cursor collaborator.
#[derive(Debug)]
pub(super) struct CursorError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for CursorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a cursor fault.
    ///
    /// Cursor implementations backed by a database client convert the
    /// client's errors with this constructor. The fault is passed to callers
    /// unchanged.
    pub fn cursor(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Cursor(CursorError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error came from the row cursor.
    pub fn is_cursor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cursor(_))
    }
}
