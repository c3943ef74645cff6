use crate::State;

use spanner_harness_core::{
    driver::{operation::ListDatabases, Database, DatabasePage, DatabaseState, Response},
    Error, Result,
};
use std::ops::Bound;

/// Small on purpose so callers always see more than one page.
const DEFAULT_PAGE_SIZE: u32 = 2;

impl State {
    pub(crate) fn exec_list_databases(&mut self, op: ListDatabases) -> Result<Response> {
        const UNAVAILABLE: i32 = 14;

        if let Some(message) = &self.list_fault {
            return Err(Error::remote_failure(UNAVAILABLE, message.clone()));
        }

        let instance = self.instance(&op.instance.to_string())?;
        let page_size = op.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;

        // The page token is the id of the last database on the previous page.
        let start = match &op.page_token {
            Some(token) => Bound::Excluded(token.clone()),
            None => Bound::Unbounded,
        };

        let mut remaining = instance.databases.range((start, Bound::Unbounded));
        let databases: Vec<Database> = remaining
            .by_ref()
            .take(page_size)
            .map(|(id, _)| Database {
                name: op.instance.database(id.clone()).to_string(),
                state: DatabaseState::Ready,
            })
            .collect();

        let next_page_token = match (remaining.next(), databases.last()) {
            (Some(_), Some(last)) => Some(last.database_id().to_string()),
            _ => None,
        };

        Ok(Response::Databases(DatabasePage {
            databases,
            next_page_token,
        }))
    }
}
