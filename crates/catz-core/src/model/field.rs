use std::fmt;
use std::sync::Arc;

use super::types::TypeDescriptor;
use super::value::Value;

pub type DefaultFactory = Arc<dyn Fn() -> Value + Send + Sync>;

/// The value a field takes when a day's document does not mention it.
#[derive(Clone)]
pub enum FieldDefault {
    Value(Value),
    /// Invoked once per record created.
    Factory(DefaultFactory),
}

impl FieldDefault {
    pub fn value(v: impl Into<Value>) -> Self {
        FieldDefault::Value(v.into())
    }

    pub fn factory(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        FieldDefault::Factory(Arc::new(f))
    }

    pub fn materialize(&self) -> Value {
        match self {
            FieldDefault::Value(v) => v.clone(),
            FieldDefault::Factory(f) => f(),
        }
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDefault::Value(v) => f.debug_tuple("Value").field(v).finish(),
            FieldDefault::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// A named, typed slot contributed by a plugin.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
    pub default: FieldDefault,
}
