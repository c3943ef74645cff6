//! Just enough DDL interpretation to learn each table's columns and primary
//! key. Statements other than `CREATE TABLE` are accepted and ignored.

use spanner_harness_core::{Error, Result};

#[derive(Debug, PartialEq)]
pub(crate) struct TableDef {
    pub(crate) name: String,
    pub(crate) columns: Vec<String>,
    pub(crate) primary_key: Vec<String>,
}

/// Returns the table definition if `statement` is a `CREATE TABLE`.
pub(crate) fn parse_create_table(statement: &str) -> Result<Option<TableDef>> {
    let statement = statement.trim();
    // ASCII upper-casing keeps byte offsets aligned with `statement`.
    let upper = statement.to_ascii_uppercase();

    let mut words = upper.split_whitespace();
    if words.next() != Some("CREATE") || words.next() != Some("TABLE") {
        return Ok(None);
    }

    let invalid = |reason: &str| {
        Error::invalid_schema(format!("{reason}; statement={statement}"))
    };

    let open = statement
        .find('(')
        .ok_or_else(|| invalid("missing column list"))?;
    let close = matching_paren(statement, open).ok_or_else(|| invalid("unbalanced parentheses"))?;

    let name = statement[..open]
        .split_whitespace()
        .nth(2)
        .map(unquote)
        .ok_or_else(|| invalid("missing table name"))?;

    let mut columns = vec![];
    for element in split_top_level(&statement[open + 1..close]) {
        let Some(first) = element.split_whitespace().next() else {
            continue;
        };

        let first_upper = first.to_ascii_uppercase();
        if matches!(first_upper.as_str(), "CONSTRAINT" | "FOREIGN" | "CHECK") {
            continue;
        }

        columns.push(unquote(first));
    }

    if columns.is_empty() {
        return Err(invalid("table has no columns"));
    }

    let pk_keyword = upper[close..]
        .find("PRIMARY KEY")
        .map(|offset| close + offset)
        .ok_or_else(|| invalid("missing PRIMARY KEY clause"))?;
    let pk_open = statement[pk_keyword..]
        .find('(')
        .map(|offset| pk_keyword + offset)
        .ok_or_else(|| invalid("missing PRIMARY KEY columns"))?;
    let pk_close =
        matching_paren(statement, pk_open).ok_or_else(|| invalid("unbalanced parentheses"))?;

    let mut primary_key = vec![];
    for part in split_top_level(&statement[pk_open + 1..pk_close]) {
        // `Col DESC` / `Col ASC`
        let Some(column) = part.split_whitespace().next() else {
            continue;
        };

        let column = unquote(column);
        if !columns.contains(&column) {
            return Err(invalid(&format!("primary key column {column} is not defined")));
        }
        primary_key.push(column);
    }

    Ok(Some(TableDef {
        name,
        columns,
        primary_key,
    }))
}

fn unquote(ident: &str) -> String {
    ident.trim_matches('`').to_string()
}

fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(s[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}
