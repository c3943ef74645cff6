mod capability;
pub use capability::Capability;

mod response;
pub use response::{Database, DatabasePage, DatabaseState, LongRunningOperation, Response};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// Entry point to a backend able to host the test instance.
///
/// A driver is cheap configuration; [`Driver::connect`] opens the actual
/// client. Connections are not shared across tasks, so concurrent work (such
/// as a teardown pass) opens one connection per task.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new connection to the backend.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Describes what the backend supports.
    fn capability(&self) -> &'static Capability;

    /// Execute an administration or data operation.
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
