use crate::State;

use spanner_harness_core::{
    driver::{operation::WaitOperation, Response},
    Error, Result,
};

impl State {
    pub(crate) fn exec_wait_operation(&mut self, op: WaitOperation) -> Result<Response> {
        match self.operations.get(&op.operation.name) {
            Some(None) => Ok(Response::Empty),
            Some(Some(err)) => Err(err.clone()),
            None => Err(Error::not_found(format!(
                "operation {}",
                op.operation.name
            ))),
        }
    }
}
