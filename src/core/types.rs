//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved type in the modeled object model.
///
/// Both the syntax-derived ("native") and the documentation-derived types a
/// descriptor carries are values of this enum. `Mixed` is the universal type:
/// it stands in wherever a declaration or annotation supplies nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// The universal/unknown type
    Mixed,
    /// No value
    Void,
    Bool,
    Int,
    Float,
    String,
    /// Array with key and value types (e.g. `array<int, string>`)
    Array { key: Box<Type>, value: Box<Type> },
    /// Instance of a named class
    Object(String),
    /// Object of unknown concrete class
    ObjectWithoutClass,
    /// Type or null
    Nullable(Box<Type>),
    /// Union of multiple possible types
    Union(Vec<Type>),
    Callable,
    Iterable,
}

impl Type {
    /// Build an array type from key and value types
    pub fn array(key: Type, value: Type) -> Self {
        Type::Array {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Build an object type for a named class
    pub fn object(class: impl Into<String>) -> Self {
        Type::Object(class.into())
    }

    /// Build a nullable wrapper around a type
    pub fn nullable(inner: Type) -> Self {
        Type::Nullable(Box::new(inner))
    }

    /// Get the display name for this type
    pub fn display_name(&self) -> String {
        match self {
            Type::Mixed => "mixed".to_string(),
            Type::Void => "void".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Int => "int".to_string(),
            Type::Float => "float".to_string(),
            Type::String => "string".to_string(),
            Type::Array { key, value } => {
                format!("array<{}, {}>", key.display_name(), value.display_name())
            }
            Type::Object(class) => class.clone(),
            Type::ObjectWithoutClass => "object".to_string(),
            Type::Nullable(inner) => format!("?{}", inner.display_name()),
            Type::Union(members) => members
                .iter()
                .map(Type::display_name)
                .collect::<Vec<_>>()
                .join("|"),
            Type::Callable => "callable".to_string(),
            Type::Iterable => "iterable".to_string(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Member visibility. Declarations without an explicit modifier are public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}
