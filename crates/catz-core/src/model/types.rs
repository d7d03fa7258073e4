use std::fmt;
use std::sync::Arc;

use crate::error::CoreError;

/// The shape of a field. Drives both decoding and validation of values.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    String,
    Integer,
    Float,
    Date,
    Enum(Arc<EnumDescriptor>),
    ListOf(Box<TypeDescriptor>),
    SetOf(Box<TypeDescriptor>),
    MapOf(Box<TypeDescriptor>, Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn enumeration(desc: EnumDescriptor) -> Self {
        TypeDescriptor::Enum(Arc::new(desc))
    }

    pub fn list_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::ListOf(Box::new(inner))
    }

    pub fn set_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::SetOf(Box::new(inner))
    }

    pub fn map_of(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::MapOf(Box::new(key), Box::new(value))
    }

    /// Scalars and enums can stand as JSON object keys; collections cannot.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            TypeDescriptor::ListOf(_) | TypeDescriptor::SetOf(_) | TypeDescriptor::MapOf(_, _)
        )
    }

    /// Reject descriptors the codec has no rule for (maps keyed by a collection).
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            TypeDescriptor::ListOf(inner) | TypeDescriptor::SetOf(inner) => inner.validate(),
            TypeDescriptor::MapOf(key, value) => {
                if !key.is_scalar() {
                    return Err(CoreError::UnsupportedType(format!(
                        "map key must be a scalar or enum, got {key}"
                    )));
                }
                value.validate()
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Integer => write!(f, "integer"),
            TypeDescriptor::Float => write!(f, "float"),
            TypeDescriptor::Date => write!(f, "date"),
            TypeDescriptor::Enum(desc) => write!(f, "enum {}", desc.name()),
            TypeDescriptor::ListOf(inner) => write!(f, "list<{inner}>"),
            TypeDescriptor::SetOf(inner) => write!(f, "set<{inner}>"),
            TypeDescriptor::MapOf(key, value) => write!(f, "map<{key}, {value}>"),
        }
    }
}

/// An ordered set of `(name, value)` members.
///
/// Members are serialized by name; the value is the short code the UI keys on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    members: Vec<(String, String)>,
}

impl EnumDescriptor {
    /// Build a descriptor. Names and values must each be unique.
    pub fn new<N, V>(name: &str, members: impl IntoIterator<Item = (N, V)>) -> Result<Self, CoreError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut out: Vec<(String, String)> = Vec::new();
        for (n, v) in members {
            let (n, v) = (n.into(), v.into());
            if out.iter().any(|(en, ev)| *en == n || *ev == v) {
                return Err(CoreError::UnsupportedType(format!(
                    "enum {name} has a duplicate member {n} = {v}"
                )));
            }
            out.push((n, v));
        }
        Ok(Self {
            name: name.to_string(),
            members: out,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = EnumMember> + '_ {
        self.members.iter().map(|(n, v)| EnumMember::new(n, v))
    }

    pub fn by_name(&self, name: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .find(|(n, _)| n == name)
            .map(|(n, v)| EnumMember::new(n, v))
    }

    pub fn by_value(&self, value: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .find(|(_, v)| v == value)
            .map(|(n, v)| EnumMember::new(n, v))
    }

    /// Look a string up by member name first, then by member value.
    pub fn resolve(&self, s: &str) -> Option<EnumMember> {
        self.by_name(s).or_else(|| self.by_value(s))
    }

    pub fn contains(&self, member: &EnumMember) -> bool {
        self.members
            .iter()
            .any(|(n, v)| *n == member.name && *v == member.value)
    }
}

/// A single member of an enum, as held in a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

impl EnumMember {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
