use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;
mod prompt;

#[derive(Parser)]
#[command(name = "catz", version, about = "Keep a typed daily log")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Directory holding one JSON document per day (default: ~/.catz)
    #[arg(long, global = true, env = "CATZ_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::open(cli.data_dir)?;

    match &cli.command {
        commands::Commands::Fields => commands::fields::run(&ctx, cli.format),
        commands::Commands::Show(args) => commands::show::run(&ctx, args, cli.format),
        commands::Commands::Set(args) => commands::set::run(&ctx, args),
        commands::Commands::Edit(args) => commands::edit::run(&ctx, args),
        commands::Commands::Chart(args) => commands::chart::run(&ctx, args, cli.format),
    }
}
