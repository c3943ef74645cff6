use super::Error;

/// One database that could not be dropped during a teardown pass.
#[derive(Debug, Clone)]
pub struct DropFailure {
    /// Database id (`db_...`).
    pub database: String,

    /// Why the drop failed.
    pub error: Error,
}

/// Aggregate of every drop that failed during a teardown pass.
///
/// A teardown pass never stops at the first failure, so this carries all of
/// them. Operators use the listing to reconcile leaked databases by hand.
#[derive(Debug)]
pub(super) struct TeardownFailed {
    failures: Box<[DropFailure]>,
}

impl std::error::Error for TeardownFailed {}

impl core::fmt::Display for TeardownFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to drop {} database(s)", self.failures.len())?;

        for (i, failure) in self.failures.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "database={}: {}", failure.database, failure.error)?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates an aggregate teardown error.
    pub fn teardown_failed(failures: Vec<DropFailure>) -> Error {
        Error::from(super::ErrorKind::TeardownFailed(TeardownFailed {
            failures: failures.into_boxed_slice(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an aggregate
    /// teardown error.
    pub fn is_teardown_failed(&self) -> bool {
        !self.drop_failures().is_empty()
    }

    /// Returns the individual drop failures of an aggregate teardown error, or
    /// an empty slice for any other error.
    pub fn drop_failures(&self) -> &[DropFailure] {
        match self.find_kind(|kind| matches!(kind, super::ErrorKind::TeardownFailed(_))) {
            Some(super::ErrorKind::TeardownFailed(err)) => &err.failures[..],
            _ => &[],
        }
    }
}
