use crate::State;

use spanner_harness_core::{
    driver::{operation::DropDatabase, Response},
    Error, Result,
};

impl State {
    pub(crate) fn exec_drop_database(&mut self, op: DropDatabase) -> Result<Response> {
        const INTERNAL: i32 = 13;

        if let Some(message) = self.drop_faults.get(op.database.database_id()) {
            return Err(Error::remote_failure(INTERNAL, message.clone()));
        }

        let instance = self.instance_mut(&op.database.instance().to_string())?;

        match instance.databases.remove(op.database.database_id()) {
            Some(_) => Ok(Response::Empty),
            None => Err(Error::not_found(format!("database {}", op.database))),
        }
    }
}
