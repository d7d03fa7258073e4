use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::commands::{resolve_day, Context};
use crate::output::format::format_record;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Day to show, as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub day: Option<NaiveDate>,
}

pub fn run(ctx: &Context, args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let day = resolve_day(args.day);
    let record = ctx
        .store
        .load(day)
        .with_context(|| format!("Failed to load {day}"))?;

    println!("{}", format_record(&record, format)?);
    Ok(())
}
