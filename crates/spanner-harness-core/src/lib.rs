pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{DropFailure, Error, IntoError};

pub mod path;
pub use path::{DatabasePath, InstancePath};

pub mod stmt;

/// A Result type alias that uses the harness [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
