//! Evaluation results.

use std::borrow::Cow;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::foundation::ValidationError;
use crate::record::FieldPath;

// ============================================================================
// VIOLATION
// ============================================================================

/// One failed rule at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Where the failing value lives, e.g. `addresses[0].zip`.
    pub path: FieldPath,
    /// The failed rule's name (`required`, `length`, `type-mismatch`, ...).
    pub rule: Cow<'static, str>,
    /// Human-readable reason.
    pub reason: String,
    /// Evaluated parameters such as `min`, `max` and `actual`.
    #[serde(serialize_with = "params_as_map", skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, String)>,
}

impl Violation {
    /// Places a primitive validator failure at a path.
    pub fn new(path: FieldPath, error: ValidationError) -> Self {
        Self {
            path,
            rule: error.code,
            reason: error.message.into_owned(),
            params: error
                .params
                .into_iter()
                .map(|(key, value)| (key, value.into_owned()))
                .collect(),
        }
    }

    /// Looks up a parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.path, self.rule, self.reason)
    }
}

fn params_as_map<S: Serializer>(params: &[(Cow<'static, str>, String)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (key, value) in params {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Every violation found in one record, in evaluation order.
///
/// Evaluation order is field declaration order, then rule order, then
/// element index, so two evaluations of the same input compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Wraps violations collected by an evaluation.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns `true` when nothing failed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` when there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations in order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations at exactly the given rendered path.
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// Rule names that failed at the given rendered path.
    pub fn codes_for(&self, path: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.path == path)
            .map(|v| v.rule.as_ref())
            .collect()
    }

    /// `Ok(())` when valid, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the result itself when any rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for ValidationResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        write!(f, "{} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}
