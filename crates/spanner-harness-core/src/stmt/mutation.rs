use super::{KeySet, Value};

/// A single write applied as part of an atomic commit.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Insert a new row; fails if the key already exists.
    Insert(Write),

    /// Update an existing row; fails if the key does not exist.
    Update(Write),

    /// Insert the row, or update the given columns if it exists.
    InsertOrUpdate(Write),

    /// Insert the row, or replace it entirely if it exists. Columns not listed
    /// are reset to NULL.
    Replace(Write),

    /// Delete the rows addressed by the key set.
    Delete { table: String, key_set: KeySet },
}

/// Column values written to one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Mutation {
    pub fn insert<C, V>(table: impl Into<String>, columns: C, values: V) -> Mutation
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Mutation::Insert(Write::new(table, columns, values))
    }

    pub fn update<C, V>(table: impl Into<String>, columns: C, values: V) -> Mutation
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Mutation::Update(Write::new(table, columns, values))
    }

    pub fn insert_or_update<C, V>(table: impl Into<String>, columns: C, values: V) -> Mutation
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Mutation::InsertOrUpdate(Write::new(table, columns, values))
    }

    pub fn replace<C, V>(table: impl Into<String>, columns: C, values: V) -> Mutation
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Mutation::Replace(Write::new(table, columns, values))
    }

    pub fn delete(table: impl Into<String>, key_set: KeySet) -> Mutation {
        Mutation::Delete {
            table: table.into(),
            key_set,
        }
    }

    /// The table this mutation targets.
    pub fn table(&self) -> &str {
        match self {
            Mutation::Insert(write)
            | Mutation::Update(write)
            | Mutation::InsertOrUpdate(write)
            | Mutation::Replace(write) => &write.table,
            Mutation::Delete { table, .. } => table,
        }
    }
}

impl Write {
    fn new<C, V>(table: impl Into<String>, columns: C, values: V) -> Write
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Write {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
