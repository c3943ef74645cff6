use crate::{op, value, wire, Connection};

use serde_json::{json, Map};
use spanner_harness_core::{
    driver::{operation::ExecuteSql, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_execute_sql(&mut self, op: ExecuteSql) -> Result<Response> {
        let mut params = Map::new();
        let mut param_types = Map::new();

        for (name, value) in &op.statement.params {
            params.insert(name.clone(), value::encode(value));

            if let Some(code) = value::type_code(value) {
                param_types.insert(name.clone(), json!({ "code": code }));
            }
        }

        let body = json!({
            "transaction": op::strong_read_only(),
            "sql": op.statement.sql,
            "params": params,
            "paramTypes": param_types,
        });

        let result: wire::ResultSet = self.with_session(&op.database, "executeSql", body).await?;
        Ok(Response::Rows(op::rows(result)?))
    }
}
