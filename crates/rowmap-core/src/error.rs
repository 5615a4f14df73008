mod adhoc;
mod cache;
mod cancelled;
mod coercion;
mod column_binding;
mod cursor;
mod dependency_resolution;
mod invalid_cast;
mod unknown_property;

use adhoc::AdhocError;
use cache::CacheError;
use cancelled::CancelledError;
use coercion::CoercionError;
use column_binding::ColumnBindingError;
use cursor::CursorError;
use dependency_resolution::DependencyResolutionError;
use invalid_cast::InvalidCastError;
use std::sync::Arc;
use unknown_property::UnknownPropertyError;

/// Returns early with an ad hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while mapping rows.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error in `consequent`, which describes what was being
    /// attempted when it occurred. Displays outermost first.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.wrap(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn wrap(self, outer: Error) -> Error {
        let kind = match outer.inner.map(Arc::try_unwrap) {
            Some(Ok(outer)) => {
                debug_assert!(outer.cause.is_none(), "context error already has a cause");
                outer.kind
            }
            // Still referenced elsewhere; keep its message only.
            Some(Err(shared)) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Creates an ad hoc error from formatting arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = args
            .as_str()
            .map_or_else(|| args.to_string(), str::to_string);
        Error::from(ErrorKind::Adhoc(AdhocError::new(message)))
    }

    /// Returns the error this one wraps, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref()?.cause.as_ref()
    }

    /// Returns the innermost error of the chain.
    pub fn root(&self) -> &Error {
        self.causes().last().unwrap_or(self)
    }

    /// This error followed by every error it wraps.
    fn causes(&self) -> impl Iterator<Item = &Error> {
        core::iter::successors(Some(self), |err| err.cause())
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(inner) => &inner.kind,
            None => &ErrorKind::Unknown,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Cursor(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .cause()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (depth, err) in self.causes().enumerate() {
            if depth > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(err.kind(), f)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.causes().map(|err| err.kind()))
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Cache(CacheError),
    Cancelled(CancelledError),
    Coercion(CoercionError),
    ColumnBinding(ColumnBindingError),
    Cursor(CursorError),
    DependencyResolution(DependencyResolutionError),
    InvalidCast(InvalidCastError),
    UnknownProperty(UnknownPropertyError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Cache(err) => core::fmt::Display::fmt(err, f),
            Cancelled(err) => core::fmt::Display::fmt(err, f),
            Coercion(err) => core::fmt::Display::fmt(err, f),
            ColumnBinding(err) => core::fmt::Display::fmt(err, f),
            Cursor(err) => core::fmt::Display::fmt(err, f),
            DependencyResolution(err) => core::fmt::Display::fmt(err, f),
            InvalidCast(err) => core::fmt::Display::fmt(err, f),
            UnknownProperty(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Anything usable as the context of an [`Error`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
