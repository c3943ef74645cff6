use crate::{stmt::Rows, DatabasePath, Error, Result};

#[derive(Debug)]
pub enum Response {
    /// The operation completed and produced nothing.
    Empty,

    /// The operation was accepted and completes asynchronously. Await it with
    /// [`Operation::WaitOperation`](super::Operation::WaitOperation).
    Pending(LongRunningOperation),

    /// One page of a database listing.
    Databases(DatabasePage),

    /// Rows produced by a read or query.
    Rows(Rows),
}

/// Handle to an asynchronous administration action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRunningOperation {
    /// Resource name of the operation.
    pub name: String,

    /// Set when the service already completed the action.
    pub done: bool,
}

/// A database as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    /// Fully qualified resource name.
    pub name: String,
    pub state: DatabaseState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseState {
    Unspecified,
    Creating,
    Ready,
    ReadyOptimizing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabasePage {
    pub databases: Vec<Database>,

    /// Token for the next page; `None` on the last page.
    pub next_page_token: Option<String>,
}

impl Response {
    pub fn pending(name: impl Into<String>, done: bool) -> Response {
        Response::Pending(LongRunningOperation {
            name: name.into(),
            done,
        })
    }

    pub fn into_pending(self) -> Result<LongRunningOperation> {
        match self {
            Response::Pending(operation) => Ok(operation),
            response => Err(unexpected("Pending", &response)),
        }
    }

    pub fn into_databases(self) -> Result<DatabasePage> {
        match self {
            Response::Databases(page) => Ok(page),
            response => Err(unexpected("Databases", &response)),
        }
    }

    pub fn into_rows(self) -> Result<Rows> {
        match self {
            Response::Rows(rows) => Ok(rows),
            response => Err(unexpected("Rows", &response)),
        }
    }

    fn variant(&self) -> &'static str {
        match self {
            Response::Empty => "Empty",
            Response::Pending(_) => "Pending",
            Response::Databases(_) => "Databases",
            Response::Rows(_) => "Rows",
        }
    }
}

fn unexpected(expected: &str, actual: &Response) -> Error {
    Error::invalid_result(format!("expected {expected}, got {}", actual.variant()))
}

impl Database {
    /// Parses the resource name into its components.
    pub fn path(&self) -> Result<DatabasePath> {
        DatabasePath::parse(&self.name)
    }

    /// The last segment of the resource name.
    pub fn database_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl DatabaseState {
    /// Parses the service's enum spelling; unknown spellings map to
    /// `Unspecified`.
    pub fn from_name(name: &str) -> DatabaseState {
        match name {
            "CREATING" => DatabaseState::Creating,
            "READY" => DatabaseState::Ready,
            "READY_OPTIMIZING" => DatabaseState::ReadyOptimizing,
            _ => DatabaseState::Unspecified,
        }
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            DatabaseState::Unspecified => "STATE_UNSPECIFIED",
            DatabaseState::Creating => "CREATING",
            DatabaseState::Ready => "READY",
            DatabaseState::ReadyOptimizing => "READY_OPTIMIZING",
        }
    }
}
