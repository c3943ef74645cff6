use crate::{op, wire, Connection};

use spanner_harness_core::{
    driver::{operation::CreateDatabase, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_create_database(&mut self, op: CreateDatabase) -> Result<Response> {
        let request = wire::CreateDatabaseRequest {
            create_statement: op.create_statement(),
            extra_statements: &op.extra_statements,
        };

        let operation: wire::Operation = self
            .post(&format!("{}/databases", op.instance), &request)
            .await?;

        op::pending(operation)
    }
}
