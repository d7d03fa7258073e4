use chrono::NaiveDate;
use serde_json::Value as Json;

use crate::error::CoreError;
use crate::model::{TypeDescriptor, Value};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a JSON value into a [`Value`] of the given type.
///
/// An enum string matching neither a member name nor a member value decodes
/// to [`Value::Null`] instead of failing. Collections drop falsy decoded
/// entries (`""`, `0`, enum misses, empty collections).
pub fn decode(ty: &TypeDescriptor, json: &Json) -> Result<Value, CoreError> {
    match ty {
        TypeDescriptor::String => match json {
            Json::String(s) => Ok(Value::Str(s.clone())),
            other => Err(CoreError::mismatch(ty, json_kind(other))),
        },
        TypeDescriptor::Integer => decode_int(json).map(Value::Int),
        TypeDescriptor::Float => decode_float(json).map(Value::Float),
        TypeDescriptor::Date => match json {
            Json::String(s) => parse_date(s).map(Value::Date),
            other => Err(CoreError::mismatch(ty, json_kind(other))),
        },
        TypeDescriptor::Enum(desc) => match json {
            Json::String(s) => Ok(desc.resolve(s).map(Value::Enum).unwrap_or(Value::Null)),
            other => Err(CoreError::mismatch(ty, json_kind(other))),
        },
        TypeDescriptor::ListOf(inner) => {
            let items = expect_array(ty, json)?;
            Ok(Value::List(decode_items(inner, items)?))
        }
        TypeDescriptor::SetOf(inner) => {
            let items = expect_array(ty, json)?;
            Ok(Value::set(decode_items(inner, items)?))
        }
        TypeDescriptor::MapOf(key, value) => decode_map(ty, key, value, json),
    }
}

fn decode_int(json: &Json) -> Result<i64, CoreError> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .ok_or_else(|| CoreError::mismatch("integer", format!("number {n}"))),
        Json::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::mismatch("integer", format!("string {s:?}"))),
        other => Err(CoreError::mismatch("integer", json_kind(other))),
    }
}

fn decode_float(json: &Json) -> Result<f64, CoreError> {
    let f = match json {
        Json::Number(n) => n
            .as_f64()
            .ok_or_else(|| CoreError::mismatch("float", format!("number {n}")))?,
        Json::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CoreError::mismatch("float", format!("string {s:?}")))?,
        other => return Err(CoreError::mismatch("float", json_kind(other))),
    };
    if !f.is_finite() {
        return Err(CoreError::mismatch("finite float", f));
    }
    Ok(f)
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| CoreError::mismatch("ISO-8601 date (YYYY-MM-DD)", format!("{s:?} ({e})")))
}

fn expect_array<'a>(ty: &TypeDescriptor, json: &'a Json) -> Result<&'a [Json], CoreError> {
    match json {
        Json::Array(items) => Ok(items),
        other => Err(CoreError::mismatch(ty, json_kind(other))),
    }
}

fn decode_items(inner: &TypeDescriptor, items: &[Json]) -> Result<Vec<Value>, CoreError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let v = decode(inner, item)?;
        if v.is_truthy() {
            out.push(v);
        }
    }
    Ok(out)
}

fn decode_map(
    ty: &TypeDescriptor,
    key: &TypeDescriptor,
    value: &TypeDescriptor,
    json: &Json,
) -> Result<Value, CoreError> {
    if !key.is_scalar() {
        return Err(CoreError::UnsupportedType(format!(
            "map key must be a scalar or enum, got {key}"
        )));
    }

    match json {
        Json::Object(obj) => {
            let mut entries = Vec::with_capacity(obj.len());
            for (k, v) in obj {
                let k = decode(key, &Json::String(k.clone()))?;
                let v = decode(value, v)?;
                if k.is_null() || !v.is_truthy() {
                    continue;
                }
                entries.push((k, v));
            }
            Ok(Value::map(entries))
        }
        // Older documents stored these fields as a plain list of keys.
        Json::Array(items) => {
            let keys = decode_items(key, items)?;
            Ok(Value::map(keys.into_iter().map(|k| (k, Value::Int(1)))))
        }
        other => Err(CoreError::mismatch(ty, json_kind(other))),
    }
}

pub(crate) fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
