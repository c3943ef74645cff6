use crate::{
    state::{invalid_argument, Table},
    Key, State,
};

use spanner_harness_core::{
    driver::{operation::Apply, Response},
    stmt::{KeySet, Mutation, Value, Write},
    Error, Result,
};

impl State {
    pub(crate) fn exec_apply(&mut self, op: Apply) -> Result<Response> {
        let instance = self.instance_mut(&op.database.instance().to_string())?;
        let database = instance
            .databases
            .get_mut(op.database.database_id())
            .ok_or_else(|| Error::not_found(format!("database {}", op.database)))?;

        // Mutations commit atomically: work on a copy and swap it in only if
        // every mutation succeeded.
        let mut staged = database.clone();

        for mutation in op.mutations {
            let table = staged.table_mut(mutation.table())?;

            match mutation {
                Mutation::Insert(write) => {
                    let (key, cells) = table.resolve(&write)?;
                    if table.rows.contains_key(&key) {
                        return Err(Error::already_exists(format!(
                            "row {:?} in table {}",
                            key.0, table.name
                        )));
                    }
                    let row = table.new_row(cells);
                    table.rows.insert(key, row);
                }
                Mutation::Update(write) => {
                    let (key, cells) = table.resolve(&write)?;
                    let name = table.name.clone();
                    let row = table.rows.get_mut(&key).ok_or_else(|| {
                        Error::not_found(format!("row {:?} in table {name}", key.0))
                    })?;
                    set_cells(row, cells);
                }
                Mutation::InsertOrUpdate(write) => {
                    let (key, cells) = table.resolve(&write)?;
                    match table.rows.get_mut(&key) {
                        Some(row) => set_cells(row, cells),
                        None => {
                            let row = table.new_row(cells);
                            table.rows.insert(key, row);
                        }
                    }
                }
                Mutation::Replace(write) => {
                    let (key, cells) = table.resolve(&write)?;
                    let row = table.new_row(cells);
                    table.rows.insert(key, row);
                }
                Mutation::Delete { key_set, .. } => match key_set {
                    KeySet::All => table.rows.clear(),
                    KeySet::Keys(keys) => {
                        for key in keys {
                            table.check_key_len(&key)?;
                            table.rows.remove(&Key(key));
                        }
                    }
                },
            }
        }

        *database = staged;
        Ok(Response::Empty)
    }
}

impl Table {
    /// Validates a write and splits it into the row key and the cells it
    /// sets (column index, value).
    fn resolve(&self, write: &Write) -> Result<(Key, Vec<(usize, Value)>)> {
        if write.columns.len() != write.values.len() {
            return Err(invalid_argument(format!(
                "{} column(s) but {} value(s) for table {}",
                write.columns.len(),
                write.values.len(),
                self.name
            )));
        }

        let indices = self.column_indices(&write.columns)?;
        let cells: Vec<(usize, Value)> = indices
            .into_iter()
            .zip(write.values.iter().cloned())
            .collect();

        let mut key = Vec::with_capacity(self.primary_key.len());
        for &pk in &self.primary_key {
            let value = cells
                .iter()
                .find(|(index, _)| *index == pk)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    invalid_argument(format!(
                        "primary key column {} missing from write to table {}",
                        self.columns[pk], self.name
                    ))
                })?;
            key.push(value);
        }

        Ok((Key(key), cells))
    }

    /// A row with every column NULL except the given cells.
    fn new_row(&self, cells: Vec<(usize, Value)>) -> Vec<Value> {
        let mut row = vec![Value::Null; self.columns.len()];
        set_cells(&mut row, cells);
        row
    }
}

fn set_cells(row: &mut [Value], cells: Vec<(usize, Value)>) {
    for (index, value) in cells {
        row[index] = value;
    }
}
