use super::Error;

/// Error when the harness is not configured to reach a backend.
///
/// This occurs when:
/// - A required environment variable (such as `SPANNER_EMULATOR_HOST`) is not set
/// - An endpoint or driver URL cannot be parsed
/// - A driver URL names a backend whose cargo feature is disabled
///
/// Configuration errors are fatal for the run and never retried.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.find_kind(|kind| matches!(kind, super::ErrorKind::InvalidConfiguration(_)))
            .is_some()
    }
}
