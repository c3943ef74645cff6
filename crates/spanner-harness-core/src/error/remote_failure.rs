use super::Error;

/// Error status reported by the administration or data service.
///
/// `code` is whatever the service reported: an HTTP status for synchronous
/// REST calls, a canonical RPC code for failed long-running operations.
#[derive(Debug)]
pub(super) struct RemoteFailure {
    code: i32,
    message: Box<str>,
}

impl std::error::Error for RemoteFailure {}

impl core::fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "remote operation failed (code {}): {}", self.code, self.message)
    }
}

impl Error {
    /// Creates a remote failure error.
    pub fn remote_failure(code: i32, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RemoteFailure(RemoteFailure {
            code,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a remote
    /// failure.
    pub fn is_remote_failure(&self) -> bool {
        self.remote_code().is_some()
    }

    /// Returns the status code of the first remote failure in the chain.
    pub fn remote_code(&self) -> Option<i32> {
        match self.find_kind(|kind| matches!(kind, super::ErrorKind::RemoteFailure(_)))? {
            super::ErrorKind::RemoteFailure(failure) => Some(failure.code),
            _ => None,
        }
    }
}
