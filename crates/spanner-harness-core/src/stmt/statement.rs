use super::Value;

use indexmap::IndexMap;

/// A SQL query with named parameters (`@name` in the SQL text).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: IndexMap<String, Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Statement {
        Statement {
            sql: sql.into(),
            params: IndexMap::new(),
        }
    }

    /// Binds `@name` to `value`.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Statement {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl From<&str> for Statement {
    fn from(sql: &str) -> Self {
        Statement::new(sql)
    }
}

impl From<String> for Statement {
    fn from(sql: String) -> Self {
        Statement::new(sql)
    }
}
