//! Type-directed conversion between records and JSON documents.

pub mod decode;
pub mod encode;

use std::sync::Arc;

use serde_json::{Map, Value as Json};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Clock, Record, RecordType, Value, DAY_FIELD};

pub use decode::decode;
pub use encode::encode;

/// Decode one day's document.
///
/// Fields missing from the document, or whose enum value is not recognised,
/// take the field's default. A missing `day` takes `clock.today()`. Any other
/// decode failure fails the whole load.
pub fn load_record(
    record_type: &Arc<RecordType>,
    json: &Json,
    clock: &dyn Clock,
) -> Result<Record, CoreError> {
    let obj = match json {
        Json::Object(obj) => obj,
        other => return Err(CoreError::mismatch("object", decode::json_kind(other))),
    };

    let day = match obj.get(DAY_FIELD) {
        Some(raw) => match raw {
            Json::String(s) => decode::parse_date(s)?,
            other => return Err(CoreError::mismatch("date", decode::json_kind(other))),
        },
        None => clock.today(),
    };

    let mut record = Record::for_day(record_type.clone(), day);
    for field in record_type.fields() {
        let Some(raw) = obj.get(&field.name) else {
            continue;
        };
        let value = decode(&field.ty, raw)?;
        if value.is_null() {
            warn!(field = %field.name, raw = %raw, "unrecognised value, using default");
            continue;
        }
        record.set(&field.name, value)?;
    }

    let unknown = obj
        .keys()
        .filter(|k| *k != DAY_FIELD && record_type.field(k).is_none())
        .count();
    if unknown > 0 {
        debug!(day = %day, unknown, "ignored keys with no registered field");
    }
    debug!(day = %day, fields = record_type.len(), "decoded record");
    Ok(record)
}

/// Encode a record as `{"day": ..., <field>: ...}`.
pub fn save_record(record: &Record) -> Result<Json, CoreError> {
    let mut out = Map::new();
    out.insert(DAY_FIELD.to_string(), encode(&Value::Date(record.day()))?);
    for (name, value) in record.iter() {
        let json = encode(value).map_err(|e| match e {
            CoreError::UnsupportedType(msg) => {
                CoreError::UnsupportedType(format!("field {name}: {msg}"))
            }
            other => other,
        })?;
        out.insert(name.to_string(), json);
    }
    debug!(day = %record.day(), "encoded record");
    Ok(Json::Object(out))
}
