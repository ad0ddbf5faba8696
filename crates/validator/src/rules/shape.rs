//! Record-type declarations.
//!
//! A [`Shape`] tells the rule-set builder which fields exist and what type
//! each one holds, so rule declarations can be checked before any record
//! is ever evaluated.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::Value;

/// The declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 text.
    String,
    /// Signed integer.
    Integer,
    /// Nested record of the given shape.
    Record(Shape),
    /// Ordered sequence of the given element type.
    List(Box<FieldType>),
}

impl FieldType {
    /// A list of nested records, the common case for `addresses`-style fields.
    pub fn list_of_records(shape: Shape) -> Self {
        Self::List(Box::new(Self::Record(shape)))
    }

    /// A list of the given element type.
    pub fn list_of(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// Short type name used in configuration errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Record(_) => "record",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` when `value` has this type at the top level. Element
    /// types of a list are not inspected.
    pub fn accepts(&self, value: &Value) -> bool {
        self.name() == value.kind()
    }

    /// The record shape reachable through this type: the shape itself for
    /// a record field, the element shape for a list of records.
    pub fn record_shape(&self) -> Option<&Shape> {
        match self {
            Self::Record(shape) => Some(shape),
            Self::List(element) => match element.as_ref() {
                Self::Record(shape) => Some(shape),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(element) => write!(f, "list<{element}>"),
            other => f.write_str(other.name()),
        }
    }
}

/// Ordered field declarations of one record type.
///
/// # Examples
///
/// ```
/// use probity_validator::rules::{FieldType, Shape};
///
/// let address = Shape::new()
///     .field("state", FieldType::String)
///     .field("zip", FieldType::String);
///
/// let customer = Shape::new()
///     .field("name", FieldType::String)
///     .field("age", FieldType::Integer)
///     .field("addresses", FieldType::list_of_records(address));
///
/// assert_eq!(customer.get("age"), Some(&FieldType::Integer));
/// assert!(customer.get("phone").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    fields: IndexMap<String, FieldType>,
}

impl Shape {
    /// Creates an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Re-declaring a name replaces its type.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Looks up a field's declared type.
    pub fn get(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}
