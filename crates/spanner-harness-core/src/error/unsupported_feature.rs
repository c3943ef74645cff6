use super::Error;

/// Error when a driver does not support a requested operation, for example
/// SQL queries against the in-memory driver.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unsupported
    /// feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        self.find_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedFeature(_)))
            .is_some()
    }
}
