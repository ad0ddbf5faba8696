//! Field paths addressing values inside nested records.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field.
    Field(String),
    /// An element index inside a list.
    Index(usize),
}

/// The location of a value, rendered as `addresses[0].zip`.
///
/// Paths are built by the engine while it descends and are stable: the
/// same record and rule set always produce the same paths.
///
/// # Examples
///
/// ```
/// use probity_validator::record::FieldPath;
///
/// let path = FieldPath::field("addresses").index(0).key("zip");
/// assert_eq!(path.to_string(), "addresses[0].zip");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path, addressing the record itself.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// A single-field path.
    pub fn field(name: impl Into<String>) -> Self {
        Self::root().key(name)
    }

    /// Extends the path with a field name.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Extends the path with a list index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Returns a copy of this path extended with a field name.
    pub fn join(&self, name: &str) -> Self {
        self.clone().key(name)
    }

    /// Returns a copy of this path extended with a list index.
    pub fn at(&self, index: usize) -> Self {
        self.clone().index(index)
    }

    /// The segments of this path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
