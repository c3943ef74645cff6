use super::Error;

/// Error when a referenced resource (instance, database, table, row,
/// operation) does not exist.
#[derive(Debug)]
pub(super) struct NotFound {
    resource: Box<str>,
}

impl std::error::Error for NotFound {}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not found: {}", self.resource)
    }
}

impl Error {
    /// Creates a "not found" error for the given resource description.
    pub fn not_found(resource: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            resource: resource.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a "not found"
    /// error.
    pub fn is_not_found(&self) -> bool {
        self.find_kind(|kind| matches!(kind, super::ErrorKind::NotFound(_)))
            .is_some()
    }
}
