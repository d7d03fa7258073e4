pub mod chart;
pub mod edit;
pub mod fields;
pub mod set;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use catz_core::config::CatzConfig;
use catz_core::model::{Clock, SystemClock};
use catz_core::registry::Catalog;
use catz_core::storage::DayStore;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the fields every day records
    Fields,
    /// Show one day's record
    Show(show::ShowArgs),
    /// Set a single field from a JSON literal
    Set(set::SetArgs),
    /// Fill in a day page by page
    Edit(edit::EditArgs),
    /// Print chart values for recent days
    Chart(chart::ChartArgs),
}

/// What every command needs: the loaded plugins, the day store and config.
pub struct Context {
    pub catalog: Catalog,
    pub store: DayStore,
    pub config: CatzConfig,
}

impl Context {
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(CatzConfig::default_data_dir);
        let catalog = catz_plugins::catalog().context("Failed to load plugins")?;
        let config = CatzConfig::load(&data_dir).context("Failed to read config")?;
        let store = DayStore::open(&data_dir, catalog.record_type().clone())
            .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
        Ok(Self {
            catalog,
            store,
            config,
        })
    }
}

/// The requested day, or today.
pub fn resolve_day(day: Option<NaiveDate>) -> NaiveDate {
    day.unwrap_or_else(|| SystemClock.today())
}
