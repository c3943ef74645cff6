use crate::{op, wire, Connection};

use serde_json::json;
use spanner_harness_core::{
    driver::{operation::Read, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_read(&mut self, op: Read) -> Result<Response> {
        let body = json!({
            "transaction": op::strong_read_only(),
            "table": op.table,
            "columns": op.columns,
            "keySet": op::key_set(&op.key_set),
        });

        let result: wire::ResultSet = self.with_session(&op.database, "read", body).await?;
        Ok(Response::Rows(op::rows(result)?))
    }
}
