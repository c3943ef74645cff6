use super::Value;
use crate::{Error, Result};

use std::sync::Arc;

/// The rows returned by a read or query, in the order the service produced
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows {
    columns: Arc<[String]>,
    rows: Vec<Row>,
}

/// One result row. Column names are shared with the rest of the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Rows {
        let columns: Arc<[String]> = columns.into();
        let rows = rows
            .into_iter()
            .map(|values| Row {
                columns: columns.clone(),
                values,
            })
            .collect();

        Rows { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Decodes every row with `f`, stopping at the first error.
    pub fn decode<T>(self, f: impl FnMut(Row) -> Result<T>) -> Result<Vec<T>> {
        self.rows.into_iter().map(f).collect()
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Row {
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Converts the value at `index`.
    pub fn get<T>(&self, index: usize) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        let value = self.values.get(index).ok_or_else(|| {
            Error::invalid_result(format!(
                "column index out of range; index={index}; columns={}",
                self.values.len()
            ))
        })?;

        T::try_from(value.clone())
    }

    /// Converts the value at `index`, mapping NULL to `None`.
    pub fn get_opt<T>(&self, index: usize) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self.values.get(index) {
            Some(Value::Null) => Ok(None),
            _ => self.get(index).map(Some),
        }
    }

    /// Converts the value of the column named `name`.
    pub fn get_by_name<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        let index = self
            .columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| Error::invalid_result(format!("no such column; column={name}")))?;

        self.get(index)
    }
}
