use crate::{op, value, Connection};

use serde_json::json;
use spanner_harness_core::{
    driver::{operation::Apply, Response},
    stmt::{Mutation, Write},
    Result,
};

impl Connection {
    pub(crate) async fn exec_apply(&mut self, op: Apply) -> Result<Response> {
        let mutations: Vec<serde_json::Value> = op.mutations.iter().map(mutation).collect();

        let body = json!({
            "singleUseTransaction": { "readWrite": {} },
            "mutations": mutations,
        });

        let _: serde::de::IgnoredAny = self.with_session(&op.database, "commit", body).await?;
        Ok(Response::Empty)
    }
}

fn mutation(mutation: &Mutation) -> serde_json::Value {
    match mutation {
        Mutation::Insert(write) => json!({ "insert": write_body(write) }),
        Mutation::Update(write) => json!({ "update": write_body(write) }),
        Mutation::InsertOrUpdate(write) => json!({ "insertOrUpdate": write_body(write) }),
        Mutation::Replace(write) => json!({ "replace": write_body(write) }),
        Mutation::Delete { table, key_set } => json!({
            "delete": { "table": table, "keySet": op::key_set(key_set) },
        }),
    }
}

fn write_body(write: &Write) -> serde_json::Value {
    let values: Vec<serde_json::Value> = write.values.iter().map(value::encode).collect();

    json!({
        "table": write.table,
        "columns": write.columns,
        "values": [values],
    })
}
