use crate::{Key, State};

use spanner_harness_core::{
    driver::{operation::Read, Response},
    stmt::{KeySet, Rows, Value},
    Result,
};
use std::collections::BTreeSet;

impl State {
    pub(crate) fn exec_read(&mut self, op: Read) -> Result<Response> {
        let table = self
            .instance(&op.database.instance().to_string())?
            .database(op.database.database_id())?
            .table(&op.table)?;

        let indices = table.column_indices(&op.columns)?;
        let project = |row: &Vec<Value>| -> Vec<Value> {
            indices.iter().map(|&i| row[i].clone()).collect()
        };

        let rows = match op.key_set {
            KeySet::All => table.rows.values().map(|row| project(row)).collect(),
            KeySet::Keys(keys) => {
                for key in &keys {
                    table.check_key_len(key)?;
                }

                // Rows come back in key order, each at most once.
                let keys: BTreeSet<Key> = keys.into_iter().map(Key).collect();
                keys.iter()
                    .filter_map(|key| table.rows.get(key))
                    .map(|row| project(row))
                    .collect()
            }
        };

        Ok(Response::Rows(Rows::new(op.columns, rows)))
    }
}
