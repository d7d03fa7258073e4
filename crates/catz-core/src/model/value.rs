use chrono::NaiveDate;

use super::types::{EnumMember, TypeDescriptor};

/// A dynamically-shaped field value, mirroring [`TypeDescriptor`].
///
/// `Null` is "no value": what an enum decode produces on a miss. It never
/// conforms to a descriptor and cannot be encoded.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Enum(EnumMember),
    List(Vec<Value>),
    /// Unique elements, kept in insertion order.
    Set(Vec<Value>),
    /// Unique keys, kept in insertion order.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a set, dropping repeated elements (first occurrence wins).
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Value::Set(out)
    }

    /// Build a map; a repeated key replaces the earlier value in place.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (k, v) in entries {
            match out.iter_mut().find(|(ek, _)| *ek == k) {
                Some(slot) => slot.1 = v,
                None => out.push((k, v)),
            }
        }
        Value::Map(out)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Falsy values are dropped by collection compaction: `Null`, `""`, `0`,
    /// `0.0` and empty collections. Dates and enum members are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Str(s) => !s.is_empty(),
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Date(_) | Value::Enum(_) => true,
            Value::List(items) | Value::Set(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the runtime shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Date(_) => "date",
            Value::Enum(_) => "enum member",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }

    /// Whether this value could have been produced by decoding against `ty`.
    pub fn conforms_to(&self, ty: &TypeDescriptor) -> bool {
        match (self, ty) {
            (Value::Str(_), TypeDescriptor::String)
            | (Value::Int(_), TypeDescriptor::Integer)
            | (Value::Float(_), TypeDescriptor::Float)
            | (Value::Date(_), TypeDescriptor::Date) => true,
            (Value::Enum(m), TypeDescriptor::Enum(desc)) => desc.contains(m),
            (Value::List(items), TypeDescriptor::ListOf(inner)) => {
                items.iter().all(|v| v.conforms_to(inner))
            }
            (Value::Set(items), TypeDescriptor::SetOf(inner)) => {
                !has_repeats(items.iter()) && items.iter().all(|v| v.conforms_to(inner))
            }
            (Value::Map(entries), TypeDescriptor::MapOf(key, value)) => {
                !has_repeats(entries.iter().map(|(k, _)| k))
                    && entries
                        .iter()
                        .all(|(k, v)| k.conforms_to(key) && v.conforms_to(value))
            }
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumMember> {
        match self {
            Value::Enum(m) => Some(m),
            _ => None,
        }
    }

    /// Elements of a list or a set.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

fn has_repeats<'a>(items: impl Iterator<Item = &'a Value>) -> bool {
    let mut seen: Vec<&Value> = Vec::new();
    for item in items {
        if seen.contains(&item) {
            return true;
        }
        seen.push(item);
    }
    false
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Sets and maps compare regardless of insertion order.
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len()
                    && a.iter().all(|v| b.contains(v))
                    && b.iter().all(|v| a.contains(v))
            }
            (Value::Map(a), Value::Map(b)) => {
                let covers = |x: &[(Value, Value)], y: &[(Value, Value)]| {
                    x.iter()
                        .all(|(k, v)| y.iter().any(|(yk, yv)| yk == k && yv == v))
                };
                a.len() == b.len() && covers(a, b) && covers(b, a)
            }
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<EnumMember> for Value {
    fn from(m: EnumMember) -> Self {
        Value::Enum(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumDescriptor;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::str("").is_truthy());
        assert!(Value::str("0").is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
        assert!(!Value::Map(vec![]).is_truthy());
        assert!(Value::Enum(EnumMember::new("Other", "o")).is_truthy());
    }

    #[test]
    fn test_set_ignores_order_and_duplicates() {
        let a = Value::set([Value::from("x"), Value::from("y"), Value::from("x")]);
        let b = Value::set([Value::from("y"), Value::from("x")]);
        assert_eq!(a.as_items().unwrap().len(), 2);
        assert_eq!(a, b);
        // Lists stay order-sensitive
        assert_ne!(
            Value::List(vec![Value::from("x"), Value::from("y")]),
            Value::List(vec![Value::from("y"), Value::from("x")])
        );
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let ty = TypeDescriptor::set_of(TypeDescriptor::String);
        let repeated = Value::Set(vec![Value::from("a"), Value::from("a")]);
        assert!(!repeated.conforms_to(&ty));
        assert!(Value::set([Value::from("a"), Value::from("a")]).conforms_to(&ty));

        let map_ty = TypeDescriptor::map_of(TypeDescriptor::String, TypeDescriptor::Integer);
        let repeated_keys = Value::Map(vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("a"), Value::Int(2)),
        ]);
        assert!(!repeated_keys.conforms_to(&map_ty));
    }

    #[test]
    fn test_set_equality_is_symmetric() {
        let repeated = Value::Set(vec![Value::from("a"), Value::from("a")]);
        let distinct = Value::Set(vec![Value::from("a"), Value::from("b")]);
        assert_ne!(repeated, distinct);
        assert_ne!(distinct, repeated);

        let m1 = Value::Map(vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("a"), Value::Int(1)),
        ]);
        let m2 = Value::map([
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(1)),
        ]);
        assert_ne!(m1, m2);
        assert_ne!(m2, m1);
    }

    #[test]
    fn test_map_last_key_wins() {
        let m = Value::map([
            (Value::from("a"), Value::Int(1)),
            (Value::from("a"), Value::Int(2)),
        ]);
        assert_eq!(m.as_entries().unwrap(), &[(Value::from("a"), Value::Int(2))]);
    }

    #[test]
    fn test_conforms_to() {
        let desc = EnumDescriptor::new("DayType", [("Work", "w")]).unwrap();
        let ty = TypeDescriptor::set_of(TypeDescriptor::enumeration(desc));

        assert!(Value::set([Value::Enum(EnumMember::new("Work", "w"))]).conforms_to(&ty));
        assert!(!Value::set([Value::Enum(EnumMember::new("Rest", "s"))]).conforms_to(&ty));
        assert!(!Value::List(vec![]).conforms_to(&ty));
        assert!(!Value::Null.conforms_to(&TypeDescriptor::String));
    }
}
