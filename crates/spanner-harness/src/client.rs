use crate::{admin, schema, Capability, DatabaseName, DatabasePath, PendingDropRegistry, Result};

use spanner_harness_core::{
    driver::operation::{Apply, CreateDatabase, ExecuteSql, Read},
    err,
    stmt::{KeySet, Mutation, Rows, Statement},
    Connection,
};
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;

/// A test's handle to its own database.
///
/// The database name is derived from the identifier the client was created
/// with. Creating the client does not create the database; call
/// [`create_database`](Self::create_database) first.
#[derive(Debug)]
pub struct TestDatabaseClient {
    identifier: String,
    name: DatabaseName,
    path: DatabasePath,
    capability: &'static Capability,
    connection: Mutex<Box<dyn Connection>>,
    registry: Arc<PendingDropRegistry>,
}

impl TestDatabaseClient {
    pub(crate) fn new(
        identifier: String,
        name: DatabaseName,
        path: DatabasePath,
        connection: Box<dyn Connection>,
        registry: Arc<PendingDropRegistry>,
    ) -> TestDatabaseClient {
        TestDatabaseClient {
            identifier,
            name,
            path,
            capability: connection.capability(),
            connection: Mutex::new(connection),
            registry,
        }
    }

    /// Create the database from the schema file at `schema_path`.
    pub async fn create_database(&self, schema_path: impl AsRef<Path>) -> Result<()> {
        let statements = schema::read_schema(schema_path)
            .map_err(|err| err.context(err!("failed to create database; database={}", self.name)))?;

        self.create_database_with(statements).await
    }

    /// Create the database with already split DDL statements.
    pub async fn create_database_with<I>(&self, statements: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let op = CreateDatabase {
            instance: self.path.instance().clone(),
            database_id: self.name.to_string(),
            extra_statements: statements.into_iter().map(Into::into).collect(),
        };

        tracing::debug!(
            database = %self.name,
            identifier = %self.identifier,
            statements = op.extra_statements.len(),
            "creating database"
        );

        let mut connection = self.connection.lock().await;
        admin::exec_and_wait(&mut **connection, op)
            .await
            .map_err(|err| err.context(err!("failed to create database; database={}", self.name)))
    }

    /// Commit `mutations` atomically.
    pub async fn apply(&self, mutations: impl IntoIterator<Item = Mutation>) -> Result<()> {
        let op = Apply {
            database: self.path.clone(),
            mutations: mutations.into_iter().collect(),
        };

        let mut connection = self.connection.lock().await;
        connection
            .exec(op.into())
            .await
            .map_err(|err| err.context(err!("failed to apply mutations; database={}", self.name)))?;

        Ok(())
    }

    /// Read `columns` of the rows of `table` addressed by `key_set`.
    pub async fn read<C>(&self, table: &str, columns: C, key_set: KeySet) -> Result<Rows>
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let op = Read {
            database: self.path.clone(),
            table: table.to_string(),
            columns: columns.into_iter().map(Into::into).collect(),
            key_set,
        };

        let mut connection = self.connection.lock().await;
        connection
            .exec(op.into())
            .await
            .and_then(|response| response.into_rows())
            .map_err(|err| err.context(err!("failed to read; database={}; table={table}", self.name)))
    }

    /// Run a SQL query. Requires a backend with SQL support, see
    /// [`capability`](Self::capability).
    pub async fn query(&self, statement: impl Into<Statement>) -> Result<Rows> {
        let op = ExecuteSql {
            database: self.path.clone(),
            statement: statement.into(),
        };

        let mut connection = self.connection.lock().await;
        connection
            .exec(op.into())
            .await
            .and_then(|response| response.into_rows())
            .map_err(|err| err.context(err!("failed to query; database={}", self.name)))
    }

    /// Delete every row of `tables` in one commit.
    pub async fn truncate_tables<I>(&self, tables: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mutations: Vec<_> = tables
            .into_iter()
            .map(|table| Mutation::delete(table, KeySet::all()))
            .collect();

        if mutations.is_empty() {
            return Ok(());
        }

        self.apply(mutations).await
    }

    /// Drop the database now and forget any deferred drop.
    pub async fn drop_database(&self) -> Result<()> {
        self.registry.take_name(&self.name);

        let mut connection = self.connection.lock().await;
        admin::drop_database(&mut **connection, &self.path)
            .await
            .map_err(|err| err.context(err!("failed to drop database; database={}", self.name)))
    }

    /// Leave the database to the end-of-run teardown pass.
    pub fn defer_drop(&self) {
        if self.registry.insert_name(self.name.clone()) {
            tracing::debug!(database = %self.name, identifier = %self.identifier, "deferred drop");
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.name
    }

    pub fn path(&self) -> &DatabasePath {
        &self.path
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }
}
