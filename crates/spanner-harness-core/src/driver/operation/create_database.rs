use super::*;
use crate::InstancePath;

#[derive(Debug, Clone)]
pub struct CreateDatabase {
    /// Instance that owns the new database
    pub instance: InstancePath,

    /// Database id, without the instance prefix
    pub database_id: String,

    /// DDL statements run as part of creation, in order
    pub extra_statements: Vec<String>,
}

impl CreateDatabase {
    /// The `CREATE DATABASE` statement sent to the service.
    pub fn create_statement(&self) -> String {
        format!("CREATE DATABASE `{}`", self.database_id)
    }
}

impl From<CreateDatabase> for Operation {
    fn from(value: CreateDatabase) -> Self {
        Self::CreateDatabase(value)
    }
}
