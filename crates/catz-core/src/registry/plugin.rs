use std::sync::Arc;

use tracing::info;

use super::chart::{Chart, ChartRegistry};
use super::field::FieldRegistry;
use super::page::{Page, PageRegistry};
use crate::error::CoreError;
use crate::model::{FieldDefault, RecordType, TypeDescriptor};

/// A contributor of fields, pages and charts.
pub trait Plugin {
    fn name(&self) -> &str;

    fn register(&self, registry: &mut PluginRegistry) -> Result<(), CoreError>;
}

/// Registration-phase state. Consumed by [`PluginRegistry::finish`], so no
/// field can be added once the record type exists.
#[derive(Default)]
pub struct PluginRegistry {
    fields: FieldRegistry,
    pages: PageRegistry,
    charts: ChartRegistry,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every plugin's registration in order. Stops at the first failure.
    pub fn load<'a>(
        plugins: impl IntoIterator<Item = &'a dyn Plugin>,
    ) -> Result<Catalog, CoreError> {
        let mut registry = Self::new();
        for plugin in plugins {
            plugin.register(&mut registry)?;
            info!(plugin = plugin.name(), "loaded plugin");
        }
        Ok(registry.finish())
    }

    pub fn field(
        &mut self,
        name: &str,
        ty: TypeDescriptor,
        default: FieldDefault,
    ) -> Result<&mut Self, CoreError> {
        self.fields.register(name, ty, default)?;
        Ok(self)
    }

    pub fn page(&mut self, page: Arc<dyn Page>, order: i32) -> &mut Self {
        self.pages.register(page, order);
        self
    }

    pub fn chart(&mut self, chart: Arc<dyn Chart>) -> &mut Self {
        self.charts.register(chart);
        self
    }

    pub fn finish(self) -> Catalog {
        Catalog {
            record_type: self.fields.build_record_type(),
            pages: self.pages,
            charts: self.charts,
        }
    }
}

/// Everything the plugins contributed, frozen.
#[derive(Clone)]
pub struct Catalog {
    record_type: Arc<RecordType>,
    pages: PageRegistry,
    charts: ChartRegistry,
}

impl Catalog {
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    pub fn pages(&self) -> Vec<Arc<dyn Page>> {
        self.pages.pages()
    }

    pub fn charts(&self) -> &[Arc<dyn Chart>] {
        self.charts.charts()
    }
}
