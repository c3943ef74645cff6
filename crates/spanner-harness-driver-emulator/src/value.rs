//! Spanner's JSON value encoding.
//!
//! INT64 travels as a decimal string, FLOAT64 as a number (or one of the
//! strings `NaN`, `Infinity`, `-Infinity`), BOOL and STRING natively and NULL
//! as `null`. Types the harness has no variant for (TIMESTAMP, DATE, NUMERIC,
//! BYTES, ...) are surfaced as their string encoding.

use spanner_harness_core::{stmt::Value, Error, Result};

use serde_json::Value as Json;

pub(crate) fn encode(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(value) => Json::Bool(*value),
        Value::I64(value) => Json::String(value.to_string()),
        Value::F64(value) if value.is_nan() => Json::String("NaN".into()),
        Value::F64(value) if value.is_infinite() => Json::String(
            if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.into(),
        ),
        Value::F64(value) => serde_json::Number::from_f64(*value)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::String(value) => Json::String(value.clone()),
    }
}

/// Type code of a query parameter; `None` for NULL, which the service
/// accepts untyped.
pub(crate) fn type_code(value: &Value) -> Option<&'static str> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some("BOOL"),
        Value::I64(_) => Some("INT64"),
        Value::F64(_) => Some("FLOAT64"),
        Value::String(_) => Some("STRING"),
    }
}

pub(crate) fn decode(code: &str, json: Json) -> Result<Value> {
    let invalid = |json: &Json| {
        Error::invalid_result(format!("cannot decode {code} column from {json}"))
    };

    match (code, json) {
        (_, Json::Null) => Ok(Value::Null),
        ("BOOL", Json::Bool(value)) => Ok(Value::Bool(value)),
        ("INT64", Json::String(value)) => value
            .parse()
            .map(Value::I64)
            .map_err(|_| invalid(&Json::String(value))),
        ("FLOAT64", Json::Number(value)) => value
            .as_f64()
            .map(Value::F64)
            .ok_or_else(|| invalid(&Json::Number(value))),
        ("FLOAT64", Json::String(value)) => match value.as_str() {
            "NaN" => Ok(Value::F64(f64::NAN)),
            "Infinity" => Ok(Value::F64(f64::INFINITY)),
            "-Infinity" => Ok(Value::F64(f64::NEG_INFINITY)),
            _ => Err(invalid(&Json::String(value))),
        },
        ("BOOL" | "INT64" | "FLOAT64", json) => Err(invalid(&json)),
        (_, Json::String(value)) => Ok(Value::String(value)),
        (_, json) => Ok(Value::String(json.to_string())),
    }
}
