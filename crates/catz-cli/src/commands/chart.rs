use std::collections::BTreeSet;

use anyhow::{Context as _, Result};
use chrono::{Days, NaiveDate};
use clap::Args;

use crate::commands::{resolve_day, Context};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ChartArgs {
    /// Number of days to include (default: chart_days from config)
    #[arg(long)]
    pub days: Option<usize>,

    /// Last day to include, as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

struct Point {
    day: NaiveDate,
    value: i64,
    colour: String,
    note: String,
}

pub fn run(ctx: &Context, args: &ChartArgs, format: OutputFormat) -> Result<()> {
    let until = resolve_day(args.until);
    let count = args.days.unwrap_or(ctx.config.chart_days).max(1);
    let first = until
        .checked_sub_days(Days::new(count as u64 - 1))
        .context("Date range out of bounds")?;

    let stored: BTreeSet<NaiveDate> = ctx
        .store
        .days()
        .context("Failed to list stored days")?
        .into_iter()
        .filter(|d| (first..=until).contains(d))
        .collect();

    let records = first
        .iter_days()
        .take(count)
        .map(|day| {
            if !stored.contains(&day) {
                return Ok((day, None));
            }
            ctx.store
                .get(day)
                .map(|r| (day, r))
                .with_context(|| format!("Failed to load {day}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let charts = ctx.catalog.charts();
    if charts.is_empty() {
        println!("No charts registered.");
        return Ok(());
    }

    let mut json_charts = Vec::new();
    for chart in charts {
        let points: Vec<Point> = records
            .iter()
            .map(|(day, record)| {
                let value = chart.value(record.as_ref());
                Point {
                    day: *day,
                    value,
                    colour: chart.colour(value),
                    note: chart.note(record.as_ref()),
                }
            })
            .collect();

        match format {
            OutputFormat::Json => json_charts.push(serde_json::json!({
                "title": chart.title(),
                "filename": chart.filename(),
                "min": chart.min(),
                "max": chart.max(),
                "points": points.iter().map(|p| serde_json::json!({
                    "day": p.day.format("%Y-%m-%d").to_string(),
                    "value": p.value,
                    "colour": p.colour,
                    "note": p.note,
                })).collect::<Vec<_>>(),
            })),
            OutputFormat::Text => {
                println!("{} [{}..{}]", chart.title(), chart.min(), chart.max());
                for p in &points {
                    println!(
                        "  {}  {:>4}  {:<20} {}",
                        p.day.format("%Y-%m-%d"),
                        p.value,
                        p.colour,
                        p.note
                    );
                }
            }
        }
    }

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&json_charts)?);
    }
    Ok(())
}
