use crate::{wire, Connection};

use spanner_harness_core::{
    driver::{operation::ListDatabases, Database, DatabasePage, DatabaseState, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_list_databases(&mut self, op: ListDatabases) -> Result<Response> {
        let mut query = vec![];

        if let Some(page_size) = op.page_size {
            query.push(("pageSize", page_size.to_string()));
        }

        if let Some(page_token) = op.page_token {
            query.push(("pageToken", page_token));
        }

        let response: wire::ListDatabasesResponse = self
            .get(&format!("{}/databases", op.instance), &query)
            .await?;

        let databases = response
            .databases
            .into_iter()
            .map(|database| Database {
                state: DatabaseState::from_name(&database.state),
                name: database.name,
            })
            .collect();

        let next_page_token = Some(response.next_page_token).filter(|token| !token.is_empty());

        Ok(Response::Databases(DatabasePage {
            databases,
            next_page_token,
        }))
    }
}
