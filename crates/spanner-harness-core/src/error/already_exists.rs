use super::Error;

/// Error when the service refuses to create a resource because it already
/// exists.
///
/// Provisioning the shared instance treats this as success; everywhere else it
/// is surfaced to the caller.
#[derive(Debug)]
pub(super) struct AlreadyExists {
    resource: Box<str>,
}

impl std::error::Error for AlreadyExists {}

impl core::fmt::Display for AlreadyExists {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "already exists: {}", self.resource)
    }
}

impl Error {
    /// Creates an "already exists" error for the given resource description.
    pub fn already_exists(resource: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AlreadyExists(AlreadyExists {
            resource: resource.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an "already
    /// exists" error.
    pub fn is_already_exists(&self) -> bool {
        self.find_kind(|kind| matches!(kind, super::ErrorKind::AlreadyExists(_)))
            .is_some()
    }
}
