//! Rule-set configuration errors
//!
//! A [`RuleSetError`] means the rule set itself is wrong: it names a field
//! the shape does not declare, applies a rule to a type it cannot check, or
//! carries parameters that can never be satisfied. These surface from
//! [`RuleSetBuilder::build`](super::RuleSetBuilder::build), before any
//! record is evaluated, and are distinct from the per-record
//! [`Violation`](super::Violation)s that evaluation reports.

// ============================================================================
// RULE SET ERROR TYPE
// ============================================================================

/// A rule-set declaration that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleSetError {
    /// A rule or nested set names a field absent from the shape.
    #[error("field '{field}' is not declared in the record shape")]
    UnknownField {
        /// The undeclared field.
        field: String,
    },

    /// A rule kind cannot apply to the field's declared type.
    #[error("rule '{rule}' on field '{field}' needs a {expected} field, found {found}")]
    IncompatibleRule {
        /// The field the rule was attached to.
        field: String,
        /// The rule, rendered with its parameters.
        rule: String,
        /// The type the rule can check.
        expected: &'static str,
        /// The declared type.
        found: String,
    },

    /// `length` or `range` with bounds no value can satisfy.
    #[error("rule '{rule}' on field '{field}' has invalid bounds: {reason}")]
    InvalidBounds {
        /// The field the rule was attached to.
        field: String,
        /// The rule, rendered with its parameters.
        rule: String,
        /// Why the bounds are rejected.
        reason: String,
    },

    /// A date-time pattern that is empty or not a valid strftime pattern.
    #[error("field '{field}' has an invalid date-time pattern '{pattern}'")]
    InvalidDateFormat {
        /// The field the rule was attached to.
        field: String,
        /// The rejected pattern.
        pattern: String,
    },

    /// A `oneOf` rule without any allowed value.
    #[error("rule 'oneOf' on field '{field}' has no allowed values")]
    EmptyChoices {
        /// The field the rule was attached to.
        field: String,
    },

    /// A nested set built for a different shape than the field holds.
    #[error("nested rule set for field '{field}' was built for a different record shape")]
    ShapeMismatch {
        /// The field the nested set was attached to.
        field: String,
    },

    /// More than one nested set attached to the same field.
    #[error("field '{field}' already has a nested rule set")]
    DuplicateNested {
        /// The field the nested sets were attached to.
        field: String,
    },

    /// A nested declaration failed to build.
    #[error("in nested rule set for field '{field}': {source}")]
    Nested {
        /// The outer field.
        field: String,
        /// The inner failure.
        #[source]
        source: Box<RuleSetError>,
    },
}

impl RuleSetError {
    /// Creates an [`UnknownField`](Self::UnknownField) error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Wraps an inner failure with the outer field name.
    pub fn nested(field: impl Into<String>, source: Self) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// The top-level field the error is about.
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField { field }
            | Self::IncompatibleRule { field, .. }
            | Self::InvalidBounds { field, .. }
            | Self::InvalidDateFormat { field, .. }
            | Self::EmptyChoices { field }
            | Self::ShapeMismatch { field }
            | Self::DuplicateNested { field }
            | Self::Nested { field, .. } => field,
        }
    }

    /// Follows [`Nested`](Self::Nested) wrappers down to the failure that
    /// caused them.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
