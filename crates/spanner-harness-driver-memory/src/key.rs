use spanner_harness_core::stmt::Value;

use std::cmp::Ordering;

/// A primary key with a total order, so rows can live in a `BTreeMap`.
///
/// Values order by type first (NULL < BOOL < INT64 < FLOAT64 < STRING), then
/// by value. Floats use their IEEE total order.
#[derive(Debug, Clone)]
pub(crate) struct Key(pub(crate) Vec<Value>);

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::I64(_) => 2,
        Value::F64(_) => 3,
        Value::String(_) => 4,
    }
}

fn cmp_value(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs.cmp(rhs),
        (Value::I64(lhs), Value::I64(rhs)) => lhs.cmp(rhs),
        (Value::F64(lhs), Value::F64(rhs)) => lhs.total_cmp(rhs),
        (Value::String(lhs), Value::String(rhs)) => lhs.cmp(rhs),
        _ => rank(lhs).cmp(&rank(rhs)),
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        for (lhs, rhs) in self.0.iter().zip(&other.0) {
            match cmp_value(lhs, rhs) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }

        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}
