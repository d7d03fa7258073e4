//! The plugins CatZ ships with. Each contributes fields to the daily record
//! and the pages and charts that work with them.

pub mod activities;
pub mod mood;

#[cfg(test)]
mod testing;

use catz_core::registry::{Catalog, Plugin, PluginRegistry};
use catz_core::CoreError;
use tracing::debug;

pub use activities::ActivitiesPlugin;
pub use mood::MoodPlugin;

/// Built-in plugins in load order.
pub fn builtin() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(MoodPlugin), Box::new(ActivitiesPlugin)]
}

/// Register every built-in plugin and freeze the result.
pub fn catalog() -> Result<Catalog, CoreError> {
    let plugins = builtin();
    debug!(count = plugins.len(), "loading built-in plugins");
    PluginRegistry::load(plugins.iter().map(|p| &**p))
}
