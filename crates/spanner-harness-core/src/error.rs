mod adhoc;
mod already_exists;
mod driver_operation_failed;
mod invalid_configuration;
mod invalid_result;
mod invalid_schema;
mod not_found;
mod remote_failure;
mod teardown_failed;
mod type_conversion;
mod unsupported_feature;

use adhoc::AdhocError;
use already_exists::AlreadyExists;
use driver_operation_failed::DriverOperationFailed;
use invalid_configuration::InvalidConfiguration;
use invalid_result::InvalidResult;
use invalid_schema::InvalidSchema;
use not_found::NotFound;
use remote_failure::RemoteFailure;
use std::sync::Arc;
use teardown_failed::TeardownFailed;
use type_conversion::TypeConversion;
use unsupported_feature::UnsupportedFeature;

pub use teardown_failed::DropFailure;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
///
/// Mostly used as the consequent passed to [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised by the harness or one of its drivers.
///
/// The error is one pointer wide and cheap to clone. Context added with
/// [`Error::context`] is rendered outermost first:
/// `failed to create database: remote operation failed (code 400): ...`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(ErrorInner { kind, cause: None }) => kind,
            // The consequent already carries a chain (or is shared); flatten it
            // into a message so the new cause can be attached.
            Ok(inner) => ErrorKind::Adhoc(AdhocError::new(
                Error {
                    inner: Arc::new(inner),
                }
                .to_string(),
            )),
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(
                Error { inner: shared }.to_string(),
            )),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns the first error in the context chain matching `f`.
    fn find_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> Option<&ErrorKind> {
        self.chain().map(Error::kind).find(|kind| f(kind))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = &self.inner.cause {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::DriverOperationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AlreadyExists(AlreadyExists),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConfiguration(InvalidConfiguration),
    InvalidResult(InvalidResult),
    InvalidSchema(InvalidSchema),
    NotFound(NotFound),
    RemoteFailure(RemoteFailure),
    TeardownFailed(TeardownFailed),
    TypeConversion(TypeConversion),
    UnsupportedFeature(UnsupportedFeature),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AlreadyExists(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
            RemoteFailure(err) => core::fmt::Display::fmt(err, f),
            TeardownFailed(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
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

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
