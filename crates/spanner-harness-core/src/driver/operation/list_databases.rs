use super::*;
use crate::InstancePath;

#[derive(Debug, Clone)]
pub struct ListDatabases {
    /// Instance whose databases are listed
    pub instance: InstancePath,

    /// Token returned by the previous page, `None` for the first page
    pub page_token: Option<String>,

    /// Maximum number of databases per page. `None` lets the backend decide.
    pub page_size: Option<u32>,
}

impl From<ListDatabases> for Operation {
    fn from(value: ListDatabases) -> Self {
        Self::ListDatabases(value)
    }
}
