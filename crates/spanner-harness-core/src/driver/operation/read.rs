use super::*;
use crate::{stmt::KeySet, DatabasePath};

#[derive(Debug, Clone)]
pub struct Read {
    /// Database to read from
    pub database: DatabasePath,

    pub table: String,

    /// Columns returned, in this order
    pub columns: Vec<String>,

    /// Rows to return
    pub key_set: KeySet,
}

impl From<Read> for Operation {
    fn from(value: Read) -> Self {
        Self::Read(value)
    }
}
