use crate::Key;

use spanner_harness_core::{stmt::Value, Error, Result};
use std::collections::{BTreeMap, HashMap};

/// Everything the driver knows, guarded by one lock.
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Keyed by instance resource name.
    pub(crate) instances: BTreeMap<String, Instance>,

    /// Outcome of every long-running operation handed out, keyed by
    /// operation name. `None` means success.
    pub(crate) operations: HashMap<String, Option<Error>>,

    /// Database id → message of the injected drop failure.
    pub(crate) drop_faults: HashMap<String, String>,

    pub(crate) list_fault: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct Instance {
    /// Keyed by database id.
    pub(crate) databases: BTreeMap<String, Database>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Database {
    pub(crate) tables: HashMap<String, Table>,
}

#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub(crate) name: String,
    pub(crate) columns: Vec<String>,

    /// Indices into `columns`, in key order.
    pub(crate) primary_key: Vec<usize>,

    /// Full rows (one value per column) ordered by primary key.
    pub(crate) rows: BTreeMap<Key, Vec<Value>>,
}

impl State {
    pub(crate) fn instance(&self, name: &str) -> Result<&Instance> {
        self.instances
            .get(name)
            .ok_or_else(|| Error::not_found(format!("instance {name}")))
    }

    pub(crate) fn instance_mut(&mut self, name: &str) -> Result<&mut Instance> {
        self.instances
            .get_mut(name)
            .ok_or_else(|| Error::not_found(format!("instance {name}")))
    }

    /// Records the outcome of an operation that completed synchronously and
    /// returns its name.
    pub(crate) fn complete_operation(&mut self, parent: &str, outcome: Option<Error>) -> String {
        let name = format!("{parent}/operations/{}", uuid::Uuid::new_v4().simple());
        self.operations.insert(name.clone(), outcome);
        name
    }
}

impl Instance {
    pub(crate) fn database(&self, id: &str) -> Result<&Database> {
        self.databases
            .get(id)
            .ok_or_else(|| Error::not_found(format!("database {id}")))
    }
}

impl Database {
    pub(crate) fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::not_found(format!("table {name}")))
    }

    pub(crate) fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::not_found(format!("table {name}")))
    }
}

impl Table {
    /// Maps column names to their indices.
    pub(crate) fn column_indices(&self, columns: &[String]) -> Result<Vec<usize>> {
        columns
            .iter()
            .map(|column| {
                self.columns
                    .iter()
                    .position(|c| c == column)
                    .ok_or_else(|| {
                        Error::not_found(format!("column {column} in table {}", self.name))
                    })
            })
            .collect()
    }

    pub(crate) fn check_key_len(&self, key: &[Value]) -> Result<()> {
        if key.len() != self.primary_key.len() {
            return Err(invalid_argument(format!(
                "key for table {} has {} part(s), primary key has {}",
                self.name,
                key.len(),
                self.primary_key.len()
            )));
        }

        Ok(())
    }
}

/// The status the service reports for malformed requests.
pub(crate) fn invalid_argument(message: impl Into<String>) -> Error {
    const INVALID_ARGUMENT: i32 = 3;
    Error::remote_failure(INVALID_ARGUMENT, message)
}
