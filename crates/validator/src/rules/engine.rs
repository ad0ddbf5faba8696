//! Record evaluation.
//!
//! Evaluation is a pure walk over the rule set: fields in declaration
//! order, rule kinds in declaration order, list elements in index order.
//! Every failure is collected. Two things short-circuit a single field:
//! a value that is absent or empty, and a value whose runtime type is not
//! the type its shape declares. The latter yields one `type-mismatch` and
//! none of the field's own rules run.
//!
//! A list element that fails `each(required)` is still walked by the
//! nested rule set. An empty address record therefore reports `required`
//! at `addresses[2]` and again at every required field inside it, such as
//! `addresses[2].state`.

use super::config::EngineConfig;
use super::result::{ValidationResult, Violation};
use super::rule::Outcome;
use super::set::{FieldRules, RuleSet};
use super::shape::FieldType;
use crate::foundation::{Validate, ValidationError};
use crate::record::{FieldPath, Record, Value};
use crate::validators::NotEmpty;

/// Evaluates `record` against `rule_set` and returns every violation.
///
/// Never fails: malformed or mistyped records produce violations, not
/// errors.
///
/// # Examples
///
/// ```
/// use probity_validator::record::Record;
/// use probity_validator::rules::{self, FieldType, RuleKind, RuleSet, Shape};
///
/// let address = Shape::new().field("zip", FieldType::String);
/// let shape = Shape::new().field("addresses", FieldType::list_of_records(address));
///
/// let set = RuleSet::builder(shape)
///     .nested_with("addresses", |b| b.rules("zip", [RuleKind::fixed_length(5), RuleKind::Numeric]))
///     .build()
///     .unwrap();
///
/// let record = Record::new().with("addresses", vec![Record::new().with("zip", "554x")]);
/// let result = rules::validate(&record, &set);
///
/// assert_eq!(result.codes_for("addresses[0].zip"), vec!["fixedLength", "numeric"]);
/// ```
pub fn validate(record: &Record, rule_set: &RuleSet) -> ValidationResult {
    let mut violations = Vec::new();
    evaluate_record(record, rule_set, &FieldPath::root(), &mut violations);
    tracing::debug!(
        fields = rule_set.fields().len(),
        violations = violations.len(),
        "record evaluated"
    );
    ValidationResult::from_violations(violations)
}

fn evaluate_record(record: &Record, rule_set: &RuleSet, prefix: &FieldPath, out: &mut Vec<Violation>) {
    let config = rule_set.config();
    for field in rule_set.fields() {
        let path = prefix.join(field.name());
        tracing::trace!(field = %path, "evaluating field");
        evaluate_field(record.get(field.name()), field, &path, config, out);
    }
}

fn evaluate_field(
    value: Option<&Value>,
    field: &FieldRules,
    path: &FieldPath,
    config: &EngineConfig,
    out: &mut Vec<Violation>,
) {
    let value = match value {
        Some(value) if !is_blank(value, config) => value,
        _ => {
            if field.is_required() {
                out.push(Violation::new(path.clone(), ValidationError::required()));
            }
            return;
        }
    };

    let ty = field.field_type();
    if !ty.accepts(value) {
        out.push(mismatch(path, ty.name(), value));
        return;
    }

    let blank = |value: &Value| is_blank(value, config);
    for check in field.checks() {
        match check.run(value, &blank) {
            Outcome::Pass => {}
            Outcome::Fail(error) => out.push(Violation::new(path.clone(), error)),
            Outcome::Elements(failures) => out.extend(
                failures
                    .into_iter()
                    .map(|(index, error)| Violation::new(path.at(index), error)),
            ),
        }
    }

    if let Some(nested) = field.nested() {
        evaluate_nested(value, ty, nested, path, out);
    }
}

/// Walks `nested` over a value already known to match `ty`.
fn evaluate_nested(
    value: &Value,
    ty: &FieldType,
    nested: &RuleSet,
    path: &FieldPath,
    out: &mut Vec<Violation>,
) {
    match (ty, value) {
        (FieldType::Record(_), Value::Record(record)) => evaluate_record(record, nested, path, out),
        (FieldType::List(_), Value::List(items)) => {
            for (index, item) in items.iter().enumerate() {
                let element = path.at(index);
                match item {
                    Value::Record(record) => evaluate_record(record, nested, &element, out),
                    other => out.push(mismatch(&element, "record", other)),
                }
            }
        }
        (ty, other) => out.push(mismatch(path, ty.name(), other)),
    }
}

fn mismatch(path: &FieldPath, expected: &'static str, value: &Value) -> Violation {
    Violation::new(path.clone(), ValidationError::type_mismatch(expected, value.kind()))
}

/// Absent-equivalent values: strings that fail [`NotEmpty`] (after
/// trimming, when configured), plus anything else [`Value::is_empty`].
fn is_blank(value: &Value, config: &EngineConfig) -> bool {
    match value {
        Value::String(s) => {
            let text = if config.trim_whitespace { s.trim() } else { s.as_str() };
            !NotEmpty.is_valid(text)
        }
        other => other.is_empty(),
    }
}
