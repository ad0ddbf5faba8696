//! Dynamically typed record values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single field value inside a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// UTF-8 text.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Nested record.
    Record(Record),
    /// Ordered sequence, usually of nested records.
    List(Vec<Value>),
}

impl Value {
    /// Names the runtime type, as used in `type-mismatch` reports.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Record(_) => "record",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` for the empty string, the empty list and a record
    /// without fields. Integers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Integer(_) => false,
            Self::Record(r) => r.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Returns the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is an integer.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested record if this is one.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the elements if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// An ordered mapping from field name to [`Value`].
///
/// Field order is insertion order and is preserved through serialization.
///
/// # Examples
///
/// ```
/// use probity_validator::record::{Record, Value};
///
/// let customer = Record::new()
///     .with("name", "John Doe")
///     .with("age", 50)
///     .with("addresses", vec![Record::new().with("state", "CA").with("zip", "55462")]);
///
/// assert_eq!(customer.get("age"), Some(&Value::Integer(50)));
/// assert_eq!(customer.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a field, returning the previous value.
    ///
    /// A replaced field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns `true` when the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emptiness() {
        assert!(Value::from("").is_empty());
        assert!(!Value::from(" ").is_empty());
        assert!(!Value::from(0).is_empty());
        assert!(Value::from(Vec::<Record>::new()).is_empty());
        assert!(Value::from(Record::new()).is_empty());
        assert!(!Value::from(Record::new().with("state", "")).is_empty());
    }

    #[test]
    fn kinds() {
        assert_eq!(Value::from("CA").kind(), "string");
        assert_eq!(Value::from(50).kind(), "integer");
        assert_eq!(Value::from(Record::new()).kind(), "record");
        assert_eq!(Value::from(vec!["a", "b"]).kind(), "list");
    }

    #[test]
    fn accessors() {
        let value = Value::from(vec![Record::new().with("zip", "55462")]);
        let first = &value.as_list().unwrap()[0];
        assert_eq!(first.as_record().unwrap().get("zip").unwrap().as_str(), Some("55462"));
        assert_eq!(Value::from(7).as_integer(), Some(7));
        assert_eq!(Value::from(7).as_str(), None);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut record = Record::new().with("b", 1).with("a", 2);
        let previous = record.insert("b", 3);

        assert_eq!(previous, Some(Value::Integer(1)));
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn collects_from_pairs() {
        let record: Record = [("state", "CA"), ("zip", "55462")].into_iter().collect();
        assert!(record.contains("zip"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn serde_shape_is_plain_json() {
        let record = Record::new()
            .with("name", "John Doe")
            .with("age", 50)
            .with("addresses", vec![Record::new().with("state", "CA")]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John Doe",
                "age": 50,
                "addresses": [{"state": "CA"}],
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
