use std::sync::Arc;

use crate::error::CoreError;
use crate::model::{EnumDescriptor, EnumMember, Record};

/// The input primitives a page can ask the user interface for.
pub trait Prompt {
    /// Ask for a 1-4 score; `current` of -1 means unanswered.
    fn scale(&mut self, prompt: &str, current: i64) -> Result<i64, CoreError>;

    /// Let the user extend a list of free-text entries.
    fn text_list(&mut self, prompt: &str, current: Vec<String>) -> Result<Vec<String>, CoreError>;

    fn single_select(
        &mut self,
        options: &EnumDescriptor,
        current: &EnumMember,
    ) -> Result<EnumMember, CoreError>;

    /// Toggle members in and out of `current`.
    fn multi_select(
        &mut self,
        options: &EnumDescriptor,
        current: Vec<EnumMember>,
    ) -> Result<Vec<EnumMember>, CoreError>;
}

/// A screen that collects input for some of a record's fields.
pub trait Page: Send + Sync {
    fn title(&self) -> &str;

    fn query(&self, prompt: &mut dyn Prompt, record: &mut Record) -> Result<(), CoreError>;
}

#[derive(Default, Clone)]
pub struct PageRegistry {
    pages: Vec<(Arc<dyn Page>, i32)>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, page: Arc<dyn Page>, order: i32) {
        self.pages.push((page, order));
    }

    /// Pages sorted by their order; ties keep registration order.
    pub fn pages(&self) -> Vec<Arc<dyn Page>> {
        let mut sorted: Vec<&(Arc<dyn Page>, i32)> = self.pages.iter().collect();
        sorted.sort_by_key(|(_, order)| *order);
        sorted.into_iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
