//! Rule sets and their builder.

use std::sync::Arc;

use super::config::EngineConfig;
use super::error::RuleSetError;
use super::result::ValidationResult;
use super::rule::{Check, Rule, RuleKind};
use super::shape::{FieldType, Shape};
use crate::record::{Record, ToRecord};
use crate::validators::{DateTime, Digits, Email, ExactLength, InRange, LengthRange, OneOf};

// ============================================================================
// FIELD RULES
// ============================================================================

/// Everything a rule set declares for one top-level field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    ty: FieldType,
    kinds: Vec<RuleKind>,
    checks: Vec<Check>,
    nested: Option<RuleSet>,
}

impl FieldRules {
    fn new(name: String, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            kinds: Vec::new(),
            checks: Vec::new(),
            nested: None,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type the shape declares for this field.
    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    /// Rule kinds in declaration order.
    pub fn kinds(&self) -> &[RuleKind] {
        &self.kinds
    }

    /// The nested rule set, if one is attached.
    pub fn nested(&self) -> Option<&RuleSet> {
        self.nested.as_ref()
    }

    /// Returns `true` when the field carries a top-level `required` rule.
    pub fn is_required(&self) -> bool {
        self.kinds.contains(&RuleKind::Required)
    }

    pub(crate) fn checks(&self) -> &[Check] {
        &self.checks
    }
}

// ============================================================================
// RULE SET
// ============================================================================

#[derive(Debug)]
struct Inner {
    shape: Shape,
    fields: Vec<FieldRules>,
    config: EngineConfig,
}

/// An immutable, ordered collection of rules for one record shape.
///
/// Built once through [`RuleSet::builder`] and shared freely afterwards:
/// cloning is cheap and evaluation never mutates the set.
///
/// # Examples
///
/// ```
/// use probity_validator::record::Record;
/// use probity_validator::rules::{FieldType, RuleKind, RuleSet, Shape};
///
/// let shape = Shape::new()
///     .field("name", FieldType::String)
///     .field("age", FieldType::Integer);
///
/// let rules = RuleSet::builder(shape)
///     .rules("name", [RuleKind::Required, RuleKind::length(3, 50)])
///     .rule("age", RuleKind::range(0, 100))
///     .build()
///     .unwrap();
///
/// let result = rules.validate(&Record::new().with("name", "Jo").with("age", 101));
/// assert_eq!(result.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    inner: Arc<Inner>,
}

impl RuleSet {
    /// Starts declaring rules for records of the given shape.
    pub fn builder(shape: Shape) -> RuleSetBuilder {
        RuleSetBuilder::new(shape)
    }

    /// The shape this set was built against.
    pub fn shape(&self) -> &Shape {
        &self.inner.shape
    }

    /// Evaluation options.
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Per-field declarations, in the order fields were first named.
    pub fn fields(&self) -> &[FieldRules] {
        &self.inner.fields
    }

    /// Top-level rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.inner.fields.iter().flat_map(|field| {
            field
                .kinds
                .iter()
                .map(|kind| Rule::new(field.name.clone(), kind.clone()))
        })
    }

    /// Number of declarations: rule kinds plus attached nested sets.
    pub fn len(&self) -> usize {
        self.inner
            .fields
            .iter()
            .map(|field| field.kinds.len() + usize::from(field.nested.is_some()))
            .sum()
    }

    /// Returns `true` when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluates a record against this set.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        super::engine::validate(record, self)
    }

    /// Evaluates a typed value through its record view.
    pub fn validate_typed<T: ToRecord + ?Sized>(&self, value: &T) -> ValidationResult {
        self.validate(&value.to_record())
    }
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug)]
enum Declaration {
    Rule(Rule),
    Nested { field: String, set: RuleSet },
    Failed(RuleSetError),
}

/// Collects declarations and checks them against the shape on
/// [`build`](Self::build).
///
/// Declaration methods never fail on their own; the first bad declaration
/// (in declaration order) is reported by `build`.
#[derive(Debug)]
#[must_use = "builder does nothing until .build() is called"]
pub struct RuleSetBuilder {
    shape: Shape,
    config: EngineConfig,
    declarations: Vec<Declaration>,
}

impl RuleSetBuilder {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            config: EngineConfig::default(),
            declarations: Vec::new(),
        }
    }

    /// Attaches one rule kind to a field.
    pub fn rule(mut self, field: impl Into<String>, kind: RuleKind) -> Self {
        self.declarations.push(Declaration::Rule(Rule::new(field, kind)));
        self
    }

    /// Attaches several rule kinds to a field, in order.
    pub fn rules(mut self, field: impl Into<String>, kinds: impl IntoIterator<Item = RuleKind>) -> Self {
        let field = field.into();
        self.declarations.extend(
            kinds
                .into_iter()
                .map(|kind| Declaration::Rule(Rule::new(field.clone(), kind))),
        );
        self
    }

    /// Attaches a prepared rule.
    pub fn add(mut self, rule: Rule) -> Self {
        self.declarations.push(Declaration::Rule(rule));
        self
    }

    /// Attaches a built nested set to a record or list-of-records field.
    pub fn nested(mut self, field: impl Into<String>, set: RuleSet) -> Self {
        self.declarations.push(Declaration::Nested {
            field: field.into(),
            set,
        });
        self
    }

    /// Builds a nested set for the field's declared record shape and
    /// attaches it.
    ///
    /// The inner builder starts from this builder's current config.
    pub fn nested_with<F>(mut self, field: impl Into<String>, declare: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let field = field.into();
        let declaration = match self.shape.get(&field) {
            None => Declaration::Failed(RuleSetError::unknown_field(&field)),
            Some(ty) => match ty.record_shape() {
                None => Declaration::Failed(RuleSetError::IncompatibleRule {
                    rule: "nested".into(),
                    expected: "record or list of records",
                    found: ty.to_string(),
                    field,
                }),
                Some(shape) => {
                    let inner = declare(RuleSet::builder(shape.clone()).config(self.config));
                    match inner.build() {
                        Ok(set) => Declaration::Nested { field, set },
                        Err(source) => Declaration::Failed(RuleSetError::nested(field, source)),
                    }
                }
            },
        };
        self.declarations.push(declaration);
        self
    }

    /// Sets the evaluation options.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Checks every declaration against the shape and freezes the set.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleSetError`] in declaration order.
    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        let Self {
            shape,
            config,
            declarations,
        } = self;
        let mut fields: Vec<FieldRules> = Vec::new();

        for declaration in declarations {
            match declaration {
                Declaration::Failed(error) => return Err(error),
                Declaration::Rule(Rule { field, kind }) => {
                    let ty = shape
                        .get(&field)
                        .ok_or_else(|| RuleSetError::unknown_field(&field))?;
                    let check = compile(&field, &kind, ty, &config)?;
                    let entry = entry(&mut fields, field, ty);
                    entry.kinds.push(kind);
                    entry.checks.push(check);
                }
                Declaration::Nested { field, set } => {
                    let ty = shape
                        .get(&field)
                        .ok_or_else(|| RuleSetError::unknown_field(&field))?;
                    let Some(expected) = ty.record_shape() else {
                        return Err(RuleSetError::IncompatibleRule {
                            rule: "nested".into(),
                            expected: "record or list of records",
                            found: ty.to_string(),
                            field,
                        });
                    };
                    if expected != set.shape() {
                        return Err(RuleSetError::ShapeMismatch { field });
                    }
                    let entry = entry(&mut fields, field, ty);
                    if entry.nested.is_some() {
                        return Err(RuleSetError::DuplicateNested {
                            field: entry.name.clone(),
                        });
                    }
                    entry.nested = Some(set);
                }
            }
        }

        let set = RuleSet {
            inner: Arc::new(Inner {
                shape,
                fields,
                config,
            }),
        };
        tracing::debug!(
            fields = set.fields().len(),
            rules = set.len(),
            "rule set built"
        );
        Ok(set)
    }
}

fn entry<'a>(fields: &'a mut Vec<FieldRules>, name: String, ty: &FieldType) -> &'a mut FieldRules {
    let index = match fields.iter().position(|field| field.name == name) {
        Some(index) => index,
        None => {
            fields.push(FieldRules::new(name, ty.clone()));
            fields.len() - 1
        }
    };
    &mut fields[index]
}

/// Resolves a rule kind into validators, checking it against the field's
/// declared type.
fn compile(field: &str, kind: &RuleKind, ty: &FieldType, config: &EngineConfig) -> Result<Check, RuleSetError> {
    let mode = config.length_mode;
    let check = match kind {
        RuleKind::Required => Check::Required,
        RuleKind::Length { min, max } => {
            expect_type(field, kind, ty, &FieldType::String)?;
            let validator = LengthRange::new(*min, *max).map_err(|error| RuleSetError::InvalidBounds {
                field: field.to_owned(),
                rule: kind.to_string(),
                reason: error.message.into_owned(),
            })?;
            Check::Length(validator.with_mode(mode))
        }
        RuleKind::Range { min, max } => {
            expect_type(field, kind, ty, &FieldType::Integer)?;
            let validator = InRange::new(*min, *max).map_err(|error| RuleSetError::InvalidBounds {
                field: field.to_owned(),
                rule: kind.to_string(),
                reason: error.message.into_owned(),
            })?;
            Check::Range(validator)
        }
        RuleKind::Numeric => {
            expect_type(field, kind, ty, &FieldType::String)?;
            Check::Numeric(Digits)
        }
        RuleKind::FixedLength { n } => {
            expect_type(field, kind, ty, &FieldType::String)?;
            Check::FixedLength(ExactLength::new(*n).with_mode(mode))
        }
        RuleKind::DateTime { format } => {
            expect_type(field, kind, ty, &FieldType::String)?;
            format.check().map_err(|_| RuleSetError::InvalidDateFormat {
                field: field.to_owned(),
                pattern: format.to_string(),
            })?;
            Check::DateTime(DateTime::new(format.clone()))
        }
        RuleKind::Email => {
            expect_type(field, kind, ty, &FieldType::String)?;
            Check::Email(Email::new())
        }
        RuleKind::OneOf { values } => {
            expect_type(field, kind, ty, &FieldType::String)?;
            if values.is_empty() {
                return Err(RuleSetError::EmptyChoices {
                    field: field.to_owned(),
                });
            }
            Check::OneOf(OneOf::new(values.iter().cloned()))
        }
        RuleKind::Each { inner } => match ty {
            FieldType::List(element) => Check::Each(Box::new(compile(field, inner, element, config)?)),
            other => {
                return Err(RuleSetError::IncompatibleRule {
                    field: field.to_owned(),
                    rule: kind.to_string(),
                    expected: "list",
                    found: other.to_string(),
                });
            }
        },
    };
    Ok(check)
}

fn expect_type(field: &str, kind: &RuleKind, found: &FieldType, expected: &FieldType) -> Result<(), RuleSetError> {
    if found == expected {
        Ok(())
    } else {
        Err(RuleSetError::IncompatibleRule {
            field: field.to_owned(),
            rule: kind.to_string(),
            expected: expected.name(),
            found: found.to_string(),
        })
    }
}
