mod apply;
mod create_database;
mod create_instance;
mod drop_database;
mod execute_sql;
mod list_databases;
mod read;
mod wait_operation;

use crate::{status, value, wire, Connection};

use serde_json::json;
use spanner_harness_core::{
    driver::Response,
    stmt::{KeySet, Rows},
    DatabasePath, Error, Result,
};

/// Transaction selector for strongly consistent single-use reads.
fn strong_read_only() -> serde_json::Value {
    json!({ "singleUse": { "readOnly": { "strong": true } } })
}

fn key_set(key_set: &KeySet) -> serde_json::Value {
    match key_set {
        KeySet::All => json!({ "all": true }),
        KeySet::Keys(keys) => {
            let keys: Vec<Vec<serde_json::Value>> = keys
                .iter()
                .map(|key| key.iter().map(value::encode).collect())
                .collect();
            json!({ "keys": keys })
        }
    }
}

/// Turns a long-running operation returned by an administration call into a
/// response. Operations that finished with an error fail right away.
fn pending(operation: wire::Operation) -> Result<Response> {
    match operation.error {
        Some(status) if operation.done => Err(status::from_operation(status)),
        _ => Ok(Response::pending(operation.name, operation.done)),
    }
}

fn rows(result: wire::ResultSet) -> Result<Rows> {
    let fields = result
        .metadata
        .and_then(|metadata| metadata.row_type)
        .map(|row_type| row_type.fields)
        .unwrap_or_default();

    let rows = result
        .rows
        .into_iter()
        .map(|row| {
            if row.len() != fields.len() {
                return Err(Error::invalid_result(format!(
                    "row has {} values but the result has {} columns",
                    row.len(),
                    fields.len()
                )));
            }

            row.into_iter()
                .zip(&fields)
                .map(|(json, field)| value::decode(&field.ty.code, json))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let columns = fields.into_iter().map(|field| field.name).collect();
    Ok(Rows::new(columns, rows))
}

impl Connection {
    /// Runs a data call against the database's session. A session the
    /// service no longer knows is forgotten so the next call opens a new one.
    async fn with_session<T>(
        &mut self,
        database: &DatabasePath,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let session = self.session(database).await?;
        let result = self.post(&format!("{session}:{method}"), &body).await;

        if let Err(err) = &result {
            if err.is_not_found() {
                self.sessions.remove(database);
            }
        }

        result
    }
}
