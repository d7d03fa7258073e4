use anyhow::{Context as _, Result};
use catz_core::codec::decode;
use catz_core::model::TypeDescriptor;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::commands::{resolve_day, Context};
use crate::output::format::format_value;

#[derive(Args)]
pub struct SetArgs {
    /// Field name
    pub field: String,

    /// New value as JSON, e.g. 3, "tired" or ["Yoga","Hike"]
    pub value: String,

    /// Day to change, as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub day: Option<NaiveDate>,
}

pub fn run(ctx: &Context, args: &SetArgs) -> Result<()> {
    let day = resolve_day(args.day);
    let Some(field) = ctx.catalog.record_type().field(&args.field) else {
        anyhow::bail!(
            "Unknown field '{}'. Run `catz fields` to list them.",
            args.field
        );
    };

    let json = parse_literal(&field.ty, &args.value);
    let value = decode(&field.ty, &json)
        .with_context(|| format!("'{}' is not a valid {}", args.value, field.ty))?;
    if value.is_null() {
        anyhow::bail!("'{}' is not a member of {}", args.value, field.ty);
    }

    let mut record = ctx
        .store
        .load(day)
        .with_context(|| format!("Failed to load {day}"))?;
    let shown = format_value(&value);
    record.set(&field.name, value)?;
    let path = ctx.store.save(&record).context("Failed to save record")?;

    info!(path = %path.display(), field = %field.name, "updated field");
    println!("{day}: {} = {shown}", field.name);
    Ok(())
}

/// Read a command-line value as JSON for a field of type `ty`.
///
/// Bare words become strings so `catz set type Work` works unquoted. Fields
/// that only hold text (strings, dates, enums) take the raw argument as text
/// unless it is a quoted JSON string, so `catz set note 3` stores `"3"`.
fn parse_literal(ty: &TypeDescriptor, raw: &str) -> serde_json::Value {
    let textual = matches!(
        ty,
        TypeDescriptor::String | TypeDescriptor::Date | TypeDescriptor::Enum(_)
    );
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json @ serde_json::Value::String(_)) => json,
        Ok(json) if !textual => json,
        _ => serde_json::Value::String(raw.to_string()),
    }
}
