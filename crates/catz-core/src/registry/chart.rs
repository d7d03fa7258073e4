use std::sync::Arc;

use crate::model::Record;

/// Summarizes one day's record into a single plotted metric.
///
/// `None` stands for a day with no stored record.
pub trait Chart: Send + Sync {
    /// Output file the renderer writes this chart to.
    fn filename(&self) -> &str;

    fn title(&self) -> &str;

    fn min(&self) -> i64;

    fn max(&self) -> i64;

    fn note(&self, record: Option<&Record>) -> String;

    fn value(&self, record: Option<&Record>) -> i64;

    fn colour(&self, value: i64) -> String;
}

#[derive(Default, Clone)]
pub struct ChartRegistry {
    charts: Vec<Arc<dyn Chart>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, chart: Arc<dyn Chart>) {
        self.charts.push(chart);
    }

    pub fn charts(&self) -> &[Arc<dyn Chart>] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
