//! The record data model
//!
//! A [`Record`] is what the engine validates: an ordered set of named
//! [`Value`]s, possibly nested. Records are read-only during validation.
//!
//! Typed structs take part through [`ToRecord`], which keeps rule
//! declarations independent of any particular struct definition.

mod path;
mod value;

pub use path::{FieldPath, PathSegment};
pub use value::{Record, Value};

/// Conversion of a typed value into a [`Record`].
///
/// # Examples
///
/// ```
/// use probity_validator::record::{Record, ToRecord};
///
/// struct Address {
///     state: String,
///     zip: String,
/// }
///
/// impl ToRecord for Address {
///     fn to_record(&self) -> Record {
///         Record::new()
///             .with("state", self.state.as_str())
///             .with("zip", self.zip.as_str())
///     }
/// }
///
/// let address = Address { state: "CA".into(), zip: "55462".into() };
/// assert_eq!(address.to_record().len(), 2);
/// ```
pub trait ToRecord {
    /// Builds the record view of `self`.
    fn to_record(&self) -> Record;
}

impl ToRecord for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

impl<T: ToRecord + ?Sized> ToRecord for &T {
    fn to_record(&self) -> Record {
        (**self).to_record()
    }
}
