use super::Value;

/// Rows addressed by a read or delete.
#[derive(Debug, Clone, PartialEq)]
pub enum KeySet {
    /// Every row of the table.
    All,

    /// The rows with exactly these primary keys. Each key lists one value per
    /// primary key column, in key order.
    Keys(Vec<Vec<Value>>),
}

impl KeySet {
    pub fn all() -> KeySet {
        KeySet::All
    }

    /// A key set holding single-column keys.
    pub fn keys<I, V>(keys: I) -> KeySet
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        KeySet::Keys(keys.into_iter().map(|key| vec![key.into()]).collect())
    }

    /// A key set holding composite keys.
    pub fn composite_keys(keys: Vec<Vec<Value>>) -> KeySet {
        KeySet::Keys(keys)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, KeySet::All)
    }
}
