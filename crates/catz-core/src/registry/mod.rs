pub mod chart;
pub mod field;
pub mod page;
pub mod plugin;

pub use crate::model::FieldDefault;
pub use chart::{Chart, ChartRegistry};
pub use field::FieldRegistry;
pub use page::{Page, PageRegistry, Prompt};
pub use plugin::{Catalog, Plugin, PluginRegistry};
