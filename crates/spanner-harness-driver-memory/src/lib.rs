//! An in-process stand-in for the Cloud Spanner emulator.
//!
//! Administration calls behave like the real service: creating something that
//! exists is "already exists", touching something missing is "not found",
//! creations return long-running operations and listings are paginated. The
//! data plane understands `CREATE TABLE` statements well enough to key rows by
//! their primary key, and serves mutations and key based reads. SQL queries
//! are not supported.

mod ddl;
mod key;
mod op;
mod state;

use key::Key;
use state::State;

use parking_lot::Mutex;
use spanner_harness_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response},
    InstancePath, Result,
};
use std::sync::Arc;

/// Driver handle. Clones share the same state, as do all connections opened
/// from it.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    state: Arc<Mutex<State>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Makes every drop of `database_id` fail with a remote failure carrying
    /// `message`, until [`Memory::clear_faults`] is called.
    pub fn fail_drop(&self, database_id: &str, message: impl Into<String>) {
        self.state
            .lock()
            .drop_faults
            .insert(database_id.to_string(), message.into());
    }

    /// Makes every database listing fail with a remote failure carrying
    /// `message`, until [`Memory::clear_faults`] is called.
    pub fn fail_list(&self, message: impl Into<String>) {
        self.state.lock().list_fault = Some(message.into());
    }

    pub fn clear_faults(&self) {
        let mut state = self.state.lock();
        state.drop_faults.clear();
        state.list_fault = None;
    }

    pub fn instance_exists(&self, instance: &InstancePath) -> bool {
        self.state
            .lock()
            .instances
            .contains_key(&instance.to_string())
    }

    /// Ids of the databases under `instance`, sorted.
    pub fn database_ids(&self, instance: &InstancePath) -> Vec<String> {
        self.state
            .lock()
            .instances
            .get(&instance.to_string())
            .map(|instance| instance.databases.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Driver for Memory {
    async fn connect(&self) -> Result<Box<dyn spanner_harness_core::Connection>> {
        Ok(Box::new(Connection {
            state: self.state.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct Connection {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl spanner_harness_core::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::MEMORY
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let mut state = self.state.lock();

        match op {
            Operation::Apply(op) => state.exec_apply(op),
            Operation::CreateDatabase(op) => state.exec_create_database(op),
            Operation::CreateInstance(op) => state.exec_create_instance(op),
            Operation::DropDatabase(op) => state.exec_drop_database(op),
            Operation::ExecuteSql(_) => Err(spanner_harness_core::Error::unsupported_feature(
                "SQL queries are not supported by the in-memory driver",
            )),
            Operation::ListDatabases(op) => state.exec_list_databases(op),
            Operation::Read(op) => state.exec_read(op),
            Operation::WaitOperation(op) => state.exec_wait_operation(op),
        }
    }
}
