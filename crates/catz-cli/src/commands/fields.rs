use anyhow::Result;

use crate::commands::Context;
use crate::output::format::format_fields;
use crate::output::OutputFormat;

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    println!("{}", format_fields(ctx.catalog.record_type(), format));
    Ok(())
}
