use std::sync::Arc;

use tracing::debug;

use crate::error::CoreError;
use crate::model::{FieldDefault, FieldDescriptor, RecordType, TypeDescriptor, DAY_FIELD};

/// Collects the fields plugins contribute, then assembles them into a [`RecordType`].
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Names are unique and `day` is reserved for the record date.
    ///
    /// The type is checked for shapes the codec cannot handle, and a literal
    /// default must conform to it.
    pub fn register(
        &mut self,
        name: &str,
        ty: TypeDescriptor,
        default: FieldDefault,
    ) -> Result<&mut Self, CoreError> {
        if name == DAY_FIELD || self.fields.iter().any(|f| f.name == name) {
            return Err(CoreError::DuplicateField(name.to_string()));
        }
        ty.validate()?;
        if let FieldDefault::Value(v) = &default {
            if !v.conforms_to(&ty) {
                return Err(CoreError::mismatch(
                    format!("default for {name} of type {ty}"),
                    v.kind(),
                ));
            }
        }

        debug!(field = name, ty = %ty, "registered field");
        self.fields.push(FieldDescriptor {
            name: name.to_string(),
            ty,
            default,
        });
        Ok(self)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Snapshot the registered fields as a record type. Idempotent.
    pub fn build_record_type(&self) -> Arc<RecordType> {
        Arc::new(RecordType::new(self.fields.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_register_and_build() {
        let mut registry = FieldRegistry::new();
        registry
            .register("energy", TypeDescriptor::Integer, FieldDefault::value(Value::Int(-1)))
            .unwrap()
            .register(
                "moodlets",
                TypeDescriptor::list_of(TypeDescriptor::String),
                FieldDefault::factory(|| Value::List(Vec::new())),
            )
            .unwrap();

        let a = registry.build_record_type();
        let b = registry.build_record_type();
        assert_eq!(a.len(), 2);
        assert_eq!(a.fields()[0].name, "energy");
        assert_eq!(a.fields()[1].name, "moodlets");
        assert_eq!(b.len(), a.len());
    }

    #[test]
    fn test_duplicate_field() {
        let mut registry = FieldRegistry::new();
        registry
            .register("energy", TypeDescriptor::Integer, FieldDefault::value(Value::Int(-1)))
            .unwrap();
        let err = registry
            .register("energy", TypeDescriptor::Float, FieldDefault::value(Value::Float(0.0)))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateField(ref n) if n == "energy"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_day_is_reserved() {
        let mut registry = FieldRegistry::new();
        let err = registry
            .register("day", TypeDescriptor::String, FieldDefault::value(""))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateField(_)));
    }

    #[test]
    fn test_default_must_conform() {
        let mut registry = FieldRegistry::new();
        let err = registry
            .register("energy", TypeDescriptor::Integer, FieldDefault::value("high"))
            .unwrap_err();
        assert!(matches!(err, CoreError::TypeMismatch { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsupported_map_key() {
        let mut registry = FieldRegistry::new();
        let ty = TypeDescriptor::map_of(
            TypeDescriptor::set_of(TypeDescriptor::String),
            TypeDescriptor::Integer,
        );
        let err = registry
            .register("weird", ty, FieldDefault::factory(|| Value::Map(Vec::new())))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedType(_)));
    }
}
