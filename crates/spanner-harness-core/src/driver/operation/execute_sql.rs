use super::*;
use crate::{stmt::Statement, DatabasePath};

#[derive(Debug, Clone)]
pub struct ExecuteSql {
    /// Database to query
    pub database: DatabasePath,

    /// Query run in a single-use, strongly consistent read-only transaction
    pub statement: Statement,
}

impl From<ExecuteSql> for Operation {
    fn from(value: ExecuteSql) -> Self {
        Self::ExecuteSql(value)
    }
}
