use anyhow::Result;
use catz_core::codec::{encode, save_record};
use catz_core::model::{Record, RecordType, Value};

use super::OutputFormat;

pub fn format_record(record: &Record, fmt: OutputFormat) -> Result<String> {
    match fmt {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&save_record(record)?)?),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_text(record: &Record) -> String {
    let width = record
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("day".len());

    let mut out = format!("{:<width$}  {}\n", "day", record.day().format("%Y-%m-%d"));
    for (name, value) in record.iter() {
        out.push_str(&format!("{name:<width$}  {}\n", format_value(value)));
    }
    out
}

pub fn format_fields(record_type: &RecordType, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let fields: Vec<_> = record_type
                .fields()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name,
                        "type": f.ty.to_string(),
                        "default": encode(&f.default.materialize()).ok(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&fields).unwrap_or_default()
        }
        OutputFormat::Text => {
            if record_type.is_empty() {
                return "No fields registered.".to_string();
            }
            let mut out = String::new();
            for f in record_type.fields() {
                out.push_str(&format!(
                    "{:<14} {:<24} default {}\n",
                    f.name,
                    f.ty.to_string(),
                    format_value(&f.default.materialize())
                ));
            }
            out
        }
    }
}

/// Human-readable rendering of a field value.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Str(s) => s.clone(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        Value::Enum(m) => m.name.clone(),
        Value::List(items) | Value::Set(items) => {
            if items.is_empty() {
                return "(none)".to_string();
            }
            items
                .iter()
                .map(format_value)
                .collect::<Vec<_>>()
                .join(", ")
        }
        Value::Map(entries) => {
            if entries.is_empty() {
                return "(none)".to_string();
            }
            entries
                .iter()
                .map(|(k, v)| format!("{}={}", format_value(k), format_value(v)))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
