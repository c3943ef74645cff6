use super::*;
use crate::DatabasePath;

#[derive(Debug, Clone)]
pub struct DropDatabase {
    /// Database to drop
    pub database: DatabasePath,
}

impl From<DropDatabase> for Operation {
    fn from(value: DropDatabase) -> Self {
        Self::DropDatabase(value)
    }
}
