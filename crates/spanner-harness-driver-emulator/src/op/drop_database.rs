use crate::Connection;

use spanner_harness_core::{
    driver::{operation::DropDatabase, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_drop_database(&mut self, op: DropDatabase) -> Result<Response> {
        self.delete(&op.database.to_string()).await?;
        self.sessions.remove(&op.database);
        Ok(Response::Empty)
    }
}
