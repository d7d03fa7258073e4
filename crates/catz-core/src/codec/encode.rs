use serde_json::{Map, Number, Value as Json};

use super::decode::DATE_FORMAT;
use crate::error::CoreError;
use crate::model::Value;

/// Convert a [`Value`] to JSON, following its runtime shape.
///
/// Enum members are written by name and dates as `YYYY-MM-DD`. Lists and
/// sets become arrays in their stored order. Map entries whose encoded value
/// is falsy are left out, so a map holding `0` or `""` does not survive a
/// round trip unchanged.
pub fn encode(value: &Value) -> Result<Json, CoreError> {
    match value {
        Value::Str(s) => Ok(Json::String(s.clone())),
        Value::Int(i) => Ok(Json::from(*i)),
        Value::Float(f) => encode_float(*f).map(Json::Number),
        Value::Date(d) => Ok(Json::String(d.format(DATE_FORMAT).to_string())),
        Value::Enum(m) => Ok(Json::String(m.name.clone())),
        Value::List(items) | Value::Set(items) => items
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array),
        Value::Map(entries) => {
            let mut out = Map::new();
            for (k, v) in entries {
                let k = encode_key(k)?;
                let v = encode(v)?;
                if json_truthy(&v) {
                    out.insert(k, v);
                }
            }
            Ok(Json::Object(out))
        }
        Value::Null => Err(CoreError::UnsupportedType(
            "cannot encode a missing value".to_string(),
        )),
    }
}

fn encode_float(f: f64) -> Result<Number, CoreError> {
    Number::from_f64(f)
        .ok_or_else(|| CoreError::UnsupportedType(format!("cannot encode non-finite float {f}")))
}

/// JSON object keys are strings; scalar keys are written in their text form.
fn encode_key(key: &Value) -> Result<String, CoreError> {
    match key {
        Value::Str(s) => Ok(s.clone()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => encode_float(*f).map(|n| n.to_string()),
        Value::Date(d) => Ok(d.format(DATE_FORMAT).to_string()),
        Value::Enum(m) => Ok(m.name.clone()),
        other => Err(CoreError::UnsupportedType(format!(
            "cannot use a {} as a map key",
            other.kind()
        ))),
    }
}

fn json_truthy(json: &Json) -> bool {
    match json {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(items) => !items.is_empty(),
        Json::Object(obj) => !obj.is_empty(),
    }
}
