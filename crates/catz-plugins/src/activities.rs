use std::sync::Arc;

use catz_core::model::{EnumDescriptor, FieldDefault, Record, TypeDescriptor, Value};
use catz_core::registry::{Page, Plugin, PluginRegistry, Prompt};
use catz_core::CoreError;

pub fn activity() -> Result<EnumDescriptor, CoreError> {
    EnumDescriptor::new(
        "Activity",
        [
            ("Cooked", "c"),
            ("Breakfast", "b"),
            ("Lunch", "l"),
            ("Dinner", "d"),
            ("Meat", "m"),
            ("Vegetables", "h"),
            ("FastFood", "f"),
            ("Soda", "s"),
            ("Chocolate", "C"),
            ("Biscuits", "B"),
            ("Yoga", "y"),
            ("Exercise", "e"),
            ("Hike", "W"),
            ("WentOut", "o"),
            ("Visitors", "v"),
        ],
    )
}

/// The set of things done or eaten that day.
pub struct ActivitiesPlugin;

impl Plugin for ActivitiesPlugin {
    fn name(&self) -> &str {
        "activities"
    }

    fn register(&self, registry: &mut PluginRegistry) -> Result<(), CoreError> {
        let activity = Arc::new(activity()?);
        registry
            .field(
                "activities",
                TypeDescriptor::set_of(TypeDescriptor::Enum(activity.clone())),
                FieldDefault::factory(|| Value::Set(Vec::new())),
            )?
            .page(Arc::new(ActivitiesPage { activity }), 30);
        Ok(())
    }
}

pub struct ActivitiesPage {
    activity: Arc<EnumDescriptor>,
}

impl Page for ActivitiesPage {
    fn title(&self) -> &str {
        "Activities"
    }

    fn query(&self, prompt: &mut dyn Prompt, record: &mut Record) -> Result<(), CoreError> {
        let current = record
            .get("activities")?
            .as_items()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_enum().cloned())
            .collect();
        let chosen = prompt.multi_select(&self.activity, current)?;
        record.set("activities", Value::set(chosen.into_iter().map(Value::Enum)))
    }
}
