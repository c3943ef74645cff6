use crate::{status, wire, Connection};

use spanner_harness_core::{
    driver::{operation::WaitOperation, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_wait_operation(&mut self, op: WaitOperation) -> Result<Response> {
        // Errors of operations that were already done were reported by the
        // call that started them.
        if op.operation.done {
            return Ok(Response::Empty);
        }

        loop {
            tokio::time::sleep(self.poll_interval).await;

            let operation: wire::Operation = self.get(&op.operation.name, &[]).await?;

            if operation.done {
                return match operation.error {
                    Some(status) => Err(status::from_operation(status)),
                    None => Ok(Response::Empty),
                };
            }
        }
    }
}
