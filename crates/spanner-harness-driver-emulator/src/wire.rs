//! JSON bodies exchanged with the REST gateway.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInstanceRequest<'a> {
    pub(crate) instance_id: &'a str,
    pub(crate) instance: Instance<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Instance<'a> {
    pub(crate) config: String,
    pub(crate) display_name: &'a str,
    pub(crate) node_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDatabaseRequest<'a> {
    pub(crate) create_statement: String,
    pub(crate) extra_statements: &'a [String],
}

/// A `google.longrunning.Operation`.
#[derive(Debug, Deserialize)]
pub(crate) struct Operation {
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) done: bool,

    pub(crate) error: Option<Status>,
}

/// A `google.rpc.Status`.
#[derive(Debug, Deserialize)]
pub(crate) struct Status {
    #[serde(default)]
    pub(crate) code: i32,

    #[serde(default)]
    pub(crate) message: String,
}

/// Body of a failed HTTP call, in either of the shapes the gateway uses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: Option<ErrorEnvelope>,
    pub(crate) code: Option<i32>,
    pub(crate) message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) code: i32,

    #[serde(default)]
    pub(crate) message: String,

    pub(crate) status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDatabasesResponse {
    #[serde(default)]
    pub(crate) databases: Vec<Database>,

    #[serde(default)]
    pub(crate) next_page_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Database {
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Session {
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultSet {
    #[serde(default)]
    pub(crate) metadata: Option<ResultSetMetadata>,

    #[serde(default)]
    pub(crate) rows: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultSetMetadata {
    pub(crate) row_type: Option<StructType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StructType {
    #[serde(default)]
    pub(crate) fields: Vec<Field>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Field {
    #[serde(default)]
    pub(crate) name: String,

    #[serde(rename = "type")]
    pub(crate) ty: Type,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Type {
    pub(crate) code: String,
}
