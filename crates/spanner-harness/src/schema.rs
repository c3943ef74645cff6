//! Schema files.
//!
//! A schema file is a list of DDL statements separated by `;`. Splitting is
//! purely lexical: a `;` inside a string literal or a comment also ends a
//! statement, so schema files must not contain one there.

use crate::{Error, Result};

use std::path::Path;

/// Splits `text` on `;`, trimming each statement and dropping empty ones.
pub fn parse_statements(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(String::from)
        .collect()
}

/// Reads and splits the schema file at `path`.
pub fn read_schema(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|err| {
        Error::from(err).context(Error::invalid_schema(format!(
            "failed to read schema file; path={}",
            path.display()
        )))
    })?;

    Ok(parse_statements(&text))
}
