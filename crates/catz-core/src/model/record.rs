use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::field::FieldDescriptor;
use super::value::Value;
use crate::error::CoreError;

/// Name of the built-in date key every record carries.
pub const DAY_FIELD: &str = "day";

/// Source of "today" for new and undated records.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The assembled record shape: every registered field, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RecordType {
    fields: Vec<FieldDescriptor>,
}

impl RecordType {
    pub(crate) fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One day's entry. Holds exactly one value per field of its record type.
#[derive(Debug, Clone)]
pub struct Record {
    day: NaiveDate,
    record_type: Arc<RecordType>,
    values: BTreeMap<String, Value>,
}

impl Record {
    /// A fresh record dated today, every field at its default.
    pub fn new(record_type: Arc<RecordType>, clock: &dyn Clock) -> Self {
        Self::for_day(record_type, clock.today())
    }

    pub fn for_day(record_type: Arc<RecordType>, day: NaiveDate) -> Self {
        let values = record_type
            .fields()
            .iter()
            .map(|f| (f.name.clone(), f.default.materialize()))
            .collect();
        Self {
            day,
            record_type,
            values,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn set_day(&mut self, day: NaiveDate) {
        self.day = day;
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    pub fn get(&self, name: &str) -> Result<&Value, CoreError> {
        self.values
            .get(name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))
    }

    /// Mutable access for in-place edits. Callers keep the value conforming.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value, CoreError> {
        self.values
            .get_mut(name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))
    }

    /// Replace a field's value; it must conform to the field's type.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), CoreError> {
        let field = self
            .record_type
            .field(name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))?;
        if !value.conforms_to(&field.ty) {
            return Err(CoreError::mismatch(&field.ty, value.kind()));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Integer field, for charts and pages that do arithmetic on scores.
    pub fn int(&self, name: &str) -> Result<i64, CoreError> {
        let value = self.get(name)?;
        value
            .as_int()
            .ok_or_else(|| CoreError::mismatch("integer", value.kind()))
    }

    /// `(name, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.record_type
            .fields()
            .iter()
            .filter_map(|f| self.values.get(&f.name).map(|v| (f.name.as_str(), v)))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day && self.values == other.values
    }
}
