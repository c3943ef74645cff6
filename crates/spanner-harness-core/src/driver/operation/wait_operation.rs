use super::*;
use crate::driver::LongRunningOperation;

#[derive(Debug, Clone)]
pub struct WaitOperation {
    /// Operation returned by a previous call
    pub operation: LongRunningOperation,
}

impl From<WaitOperation> for Operation {
    fn from(value: WaitOperation) -> Self {
        Self::WaitOperation(value)
    }
}

impl From<LongRunningOperation> for WaitOperation {
    fn from(operation: LongRunningOperation) -> Self {
        WaitOperation { operation }
    }
}
