use crate::{
    ddl,
    state::{Database, Table},
    State,
};

use spanner_harness_core::{
    driver::{operation::CreateDatabase, Response},
    Error, Result,
};
use std::collections::BTreeMap;

impl State {
    pub(crate) fn exec_create_database(&mut self, op: CreateDatabase) -> Result<Response> {
        let instance_name = op.instance.to_string();
        let instance = self.instance_mut(&instance_name)?;

        if instance.databases.contains_key(&op.database_id) {
            return Err(Error::already_exists(format!(
                "database {}",
                op.instance.database(op.database_id.clone())
            )));
        }

        // The schema is validated before the database becomes visible, so a
        // bad statement leaves nothing behind.
        let mut database = Database::default();

        for statement in &op.extra_statements {
            let Some(def) = ddl::parse_create_table(statement)? else {
                continue;
            };

            if database.tables.contains_key(&def.name) {
                return Err(Error::already_exists(format!("table {}", def.name)));
            }

            let primary_key = def
                .primary_key
                .iter()
                .filter_map(|pk| def.columns.iter().position(|column| column == pk))
                .collect();

            database.tables.insert(
                def.name.clone(),
                Table {
                    name: def.name,
                    columns: def.columns,
                    primary_key,
                    rows: BTreeMap::new(),
                },
            );
        }

        instance.databases.insert(op.database_id.clone(), database);

        let path = op.instance.database(op.database_id).to_string();
        let operation = self.complete_operation(&path, None);

        Ok(Response::pending(operation, true))
    }
}
