use std::io;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::commands::{resolve_day, Context};
use crate::prompt::LinePrompt;

#[derive(Args)]
pub struct EditArgs {
    /// Day to edit, as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub day: Option<NaiveDate>,
}

pub fn run(ctx: &Context, args: &EditArgs) -> Result<()> {
    let day = resolve_day(args.day);
    let mut record = ctx
        .store
        .load(day)
        .with_context(|| format!("Failed to load {day}"))?;

    let stdin = io::stdin();
    let mut prompt = LinePrompt::new(stdin.lock(), io::stdout());
    for page in ctx.catalog.pages() {
        prompt.heading(page.title())?;
        page.query(&mut prompt, &mut record)
            .with_context(|| format!("Page '{}' failed", page.title()))?;
    }

    let path = ctx.store.save(&record).context("Failed to save record")?;
    println!("Saved {}", path.display());
    Ok(())
}
