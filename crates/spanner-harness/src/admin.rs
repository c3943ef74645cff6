//! Administration calls shared by the provisioner, clients and teardown.

use spanner_harness_core::{
    driver::operation::{DropDatabase, WaitOperation},
    Connection, DatabasePath, Result,
};

/// Execute an operation that returns a long-running operation and block
/// until it completes.
pub(crate) async fn exec_and_wait(
    connection: &mut dyn Connection,
    op: impl Into<spanner_harness_core::driver::Operation>,
) -> Result<()> {
    let pending = connection.exec(op.into()).await?.into_pending()?;
    connection.exec(WaitOperation::from(pending).into()).await?;
    Ok(())
}

/// Drop `database`. A database that is already gone counts as dropped.
pub(crate) async fn drop_database(
    connection: &mut dyn Connection,
    database: &DatabasePath,
) -> Result<()> {
    let op = DropDatabase {
        database: database.clone(),
    };

    match connection.exec(op.into()).await {
        Ok(_) => {
            tracing::debug!(%database, "dropped database");
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            tracing::debug!(%database, "database already gone");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
