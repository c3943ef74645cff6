mod apply;
pub use apply::Apply;

mod create_database;
pub use create_database::CreateDatabase;

mod create_instance;
pub use create_instance::CreateInstance;

mod drop_database;
pub use drop_database::DropDatabase;

mod execute_sql;
pub use execute_sql::ExecuteSql;

mod list_databases;
pub use list_databases::ListDatabases;

mod read;
pub use read::Read;

mod wait_operation;
pub use wait_operation::WaitOperation;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Apply mutations atomically
    Apply(Apply),

    /// Create a database with its schema
    CreateDatabase(CreateDatabase),

    /// Create an instance
    CreateInstance(CreateInstance),

    /// Drop a database
    DropDatabase(DropDatabase),

    /// Execute a SQL query
    ExecuteSql(ExecuteSql),

    /// Fetch one page of the databases under an instance
    ListDatabases(ListDatabases),

    /// Read rows by key
    Read(Read),

    /// Block until a long-running operation completes
    WaitOperation(WaitOperation),
}

impl Operation {
    /// Short name used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Apply(_) => "apply",
            Operation::CreateDatabase(_) => "create_database",
            Operation::CreateInstance(_) => "create_instance",
            Operation::DropDatabase(_) => "drop_database",
            Operation::ExecuteSql(_) => "execute_sql",
            Operation::ListDatabases(_) => "list_databases",
            Operation::Read(_) => "read",
            Operation::WaitOperation(_) => "wait_operation",
        }
    }
}
