use std::sync::Arc;

use catz_core::model::{EnumDescriptor, EnumMember, FieldDefault, Record, TypeDescriptor, Value};
use catz_core::registry::{Chart, Page, Plugin, PluginRegistry, Prompt};
use catz_core::CoreError;

/// Kind of day. Members are keyed in the UI by their one-letter value.
pub fn day_type() -> Result<EnumDescriptor, CoreError> {
    EnumDescriptor::new(
        "DayType",
        [
            ("Work", "w"),
            ("Rest", "s"),
            ("Holiday", "h"),
            ("Illness", "i"),
            ("Social", "v"),
            ("Other", "o"),
        ],
    )
}

const UNANSWERED: i64 = -1;

/// Daily scores, kind of day and free-text moodlets.
pub struct MoodPlugin;

impl Plugin for MoodPlugin {
    fn name(&self) -> &str {
        "mood"
    }

    fn register(&self, registry: &mut PluginRegistry) -> Result<(), CoreError> {
        let day_type = Arc::new(day_type()?);
        let other = day_type
            .by_name("Other")
            .ok_or_else(|| CoreError::UnsupportedType("DayType has no Other member".into()))?;

        registry
            .field("overall", TypeDescriptor::Integer, FieldDefault::value(UNANSWERED))?
            .field("energy", TypeDescriptor::Integer, FieldDefault::value(UNANSWERED))?
            .field("productivity", TypeDescriptor::Integer, FieldDefault::value(UNANSWERED))?
            .field(
                "type",
                TypeDescriptor::Enum(day_type.clone()),
                FieldDefault::value(other),
            )?
            .field(
                "moodlets",
                TypeDescriptor::list_of(TypeDescriptor::String),
                FieldDefault::factory(|| Value::List(Vec::new())),
            )?
            .page(Arc::new(MoodPage { day_type }), 10)
            .chart(Arc::new(MoodChart));
        Ok(())
    }
}

pub struct MoodPage {
    day_type: Arc<EnumDescriptor>,
}

impl Page for MoodPage {
    fn title(&self) -> &str {
        "Mood"
    }

    fn query(&self, prompt: &mut dyn Prompt, record: &mut Record) -> Result<(), CoreError> {
        for (field, question) in [
            ("overall", "How Are?"),
            ("energy", "Energy?"),
            ("productivity", "Productivity?"),
        ] {
            let score = prompt.scale(question, record.int(field)?)?;
            record.set(field, Value::Int(score))?;
        }

        let current: EnumMember = {
            let value = record.get("type")?;
            value
                .as_enum()
                .cloned()
                .ok_or_else(|| CoreError::mismatch("enum DayType", value.kind()))?
        };
        let chosen = prompt.single_select(&self.day_type, &current)?;
        record.set("type", Value::Enum(chosen))?;

        let moodlets: Vec<String> = record
            .get("moodlets")?
            .as_items()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();
        let moodlets = prompt.text_list("Moodlets", moodlets)?;
        record.set(
            "moodlets",
            Value::List(
                moodlets
                    .into_iter()
                    .filter(|m| !m.is_empty())
                    .map(Value::Str)
                    .collect(),
            ),
        )?;
        Ok(())
    }
}

/// Weighted mood score: four times the overall score plus energy and
/// productivity, shifted so that all-ones lands on the chart minimum of 2.
pub struct MoodChart;

impl MoodChart {
    fn scores(record: &Record) -> (i64, i64, i64) {
        let get = |name: &str| record.int(name).unwrap_or(UNANSWERED);
        (get("overall"), get("energy"), get("productivity"))
    }
}

impl Chart for MoodChart {
    fn filename(&self) -> &str {
        "mood.svg"
    }

    fn title(&self) -> &str {
        "Mood"
    }

    fn min(&self) -> i64 {
        2
    }

    fn max(&self) -> i64 {
        20
    }

    fn note(&self, record: Option<&Record>) -> String {
        let Some(record) = record else {
            return String::new();
        };
        let (o, e, p) = Self::scores(record);
        format!("{} (o: {o}, e: {e}, p: {p})", self.value(Some(record)))
    }

    fn value(&self, record: Option<&Record>) -> i64 {
        let Some(record) = record else {
            return UNANSWERED;
        };
        let (o, e, p) = Self::scores(record);
        4 * o + e + p - 4
    }

    fn colour(&self, value: i64) -> String {
        if value == UNANSWERED {
            return "grey".to_string();
        }
        format!("hsl({}, 50%, 50%)", value * 6)
    }
}
