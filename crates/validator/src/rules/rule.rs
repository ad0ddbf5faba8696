//! Rule declarations and their compiled form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::record::Value;
use crate::validators::{DateTime, DateTimeFormat, Digits, Email, ExactLength, InRange, LengthRange, OneOf};

/// What a rule checks, together with its parameters.
///
/// Rule kinds are plain data: they can be declared in code or carried in a
/// caller's own configuration format, and are only given meaning when a
/// [`RuleSet`](super::RuleSet) is built against a [`Shape`](super::Shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum RuleKind {
    /// Field present and non-empty.
    Required,
    /// String length within `[min, max]`.
    Length {
        /// Minimum length (inclusive).
        min: usize,
        /// Maximum length (inclusive).
        max: usize,
    },
    /// Integer within `[min, max]`.
    Range {
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },
    /// String made only of ASCII digits.
    Numeric,
    /// String of exactly `n` characters.
    FixedLength {
        /// Required length.
        n: usize,
    },
    /// String that parses under the given format.
    #[serde(rename = "datetime")]
    DateTime {
        /// Expected layout.
        format: DateTimeFormat,
    },
    /// String shaped like an email address.
    Email,
    /// String equal to one of the allowed values.
    OneOf {
        /// Allowed values, compared exactly.
        values: Vec<String>,
    },
    /// Inner rule applied to every element of a list.
    Each {
        /// Rule applied per element.
        inner: Box<RuleKind>,
    },
}

impl RuleKind {
    /// `length(min, max)`.
    pub const fn length(min: usize, max: usize) -> Self {
        Self::Length { min, max }
    }

    /// `range(min, max)`.
    pub const fn range(min: i64, max: i64) -> Self {
        Self::Range { min, max }
    }

    /// `fixedLength(n)`.
    pub const fn fixed_length(n: usize) -> Self {
        Self::FixedLength { n }
    }

    /// `datetime(format)`.
    pub const fn datetime(format: DateTimeFormat) -> Self {
        Self::DateTime { format }
    }

    /// `oneOf(values)`.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `each(inner)`.
    pub fn each(inner: Self) -> Self {
        Self::Each {
            inner: Box::new(inner),
        }
    }

    /// The rule name used as the violation code.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Length { .. } => "length",
            Self::Range { .. } => "range",
            Self::Numeric => "numeric",
            Self::FixedLength { .. } => "fixedLength",
            Self::DateTime { .. } => "datetime",
            Self::Email => "email",
            Self::OneOf { .. } => "oneOf",
            Self::Each { .. } => "each",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { min, max } => write!(f, "length({min}, {max})"),
            Self::Range { min, max } => write!(f, "range({min}, {max})"),
            Self::FixedLength { n } => write!(f, "fixedLength({n})"),
            Self::DateTime { format } => write!(f, "datetime({format})"),
            Self::OneOf { values } => write!(f, "oneOf({})", values.join("|")),
            Self::Each { inner } => write!(f, "each({inner})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A rule kind bound to a top-level field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Field the rule applies to.
    pub field: String,
    /// What the rule checks.
    #[serde(flatten)]
    pub kind: RuleKind,
}

impl Rule {
    /// Binds a rule kind to a field.
    pub fn new(field: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

// ============================================================================
// COMPILED CHECKS
// ============================================================================

/// A rule kind resolved into ready-to-run validators.
///
/// Built once by the rule-set builder so evaluation never re-parses
/// parameters.
#[derive(Debug, Clone)]
pub(crate) enum Check {
    Required,
    Length(LengthRange),
    Range(InRange),
    Numeric(Digits),
    FixedLength(ExactLength),
    DateTime(DateTime),
    Email(Email),
    OneOf(OneOf),
    Each(Box<Check>),
}

/// Outcome of running one check against one value.
pub(crate) enum Outcome {
    Pass,
    Fail(ValidationError),
    /// `each` reports per element, at `field[index]`.
    Elements(Vec<(usize, ValidationError)>),
}

impl Check {
    /// Runs the check. `blank` decides presence for `required`, which
    /// depends on engine configuration rather than on the value alone.
    pub(crate) fn run(&self, value: &Value, blank: &dyn Fn(&Value) -> bool) -> Outcome {
        match self {
            Self::Required => {
                if blank(value) {
                    Outcome::Fail(ValidationError::required())
                } else {
                    Outcome::Pass
                }
            }
            Self::Length(v) => run_str(v, value),
            Self::Numeric(v) => run_str(v, value),
            Self::FixedLength(v) => run_str(v, value),
            Self::DateTime(v) => run_str(v, value),
            Self::Email(v) => run_str(v, value),
            Self::OneOf(v) => run_str(v, value),
            Self::Range(v) => match value {
                Value::Integer(n) => outcome(v.validate(n)),
                other => Outcome::Fail(ValidationError::type_mismatch("integer", other.kind())),
            },
            Self::Each(inner) => match value {
                Value::List(items) => {
                    let failures: Vec<_> = items
                        .iter()
                        .enumerate()
                        .filter_map(|(index, item)| match inner.run(item, blank) {
                            Outcome::Pass => None,
                            Outcome::Fail(error) => Some(vec![(index, error)]),
                            // Nested `each` flattens to the outer element index.
                            Outcome::Elements(errors) => Some(
                                errors.into_iter().map(|(_, error)| (index, error)).collect(),
                            ),
                        })
                        .flatten()
                        .collect();
                    if failures.is_empty() {
                        Outcome::Pass
                    } else {
                        Outcome::Elements(failures)
                    }
                }
                other => Outcome::Fail(ValidationError::type_mismatch("list", other.kind())),
            },
        }
    }
}

fn run_str<V>(validator: &V, value: &Value) -> Outcome
where
    V: Validate<Input = str>,
{
    match value {
        Value::String(s) => outcome(validator.validate(s)),
        other => Outcome::Fail(ValidationError::type_mismatch("string", other.kind())),
    }
}

fn outcome(result: Result<(), ValidationError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Pass,
        Err(error) => Outcome::Fail(error),
    }
}
