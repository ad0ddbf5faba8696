//! Integration tests for the prelude module.
//!
//! Verifies that `use probity_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use probity_validator::prelude::*;

// ============================================================================
// PRIMITIVES VIA PRELUDE
// ============================================================================

#[test]
fn primitives_are_available() {
    assert!(exact_length(5).validate("55462").is_ok());
    assert!(digits().validate("5546a").is_err());
    assert!(email().validate("john@example.com").is_ok());
    assert!(in_range(0, 100).unwrap().validate(&101).is_err());
    assert!(length_range(3, 50).unwrap().validate("Jo").is_err());
    assert!(not_empty().validate("").is_err());
    assert!(one_of(["CA"]).validate("NY").is_err());
    assert!(date_time(DateTimeFormat::Rfc3339).validate("1974-02-11T08:30:00Z").is_ok());
}

#[test]
fn validate_all_collects_every_failure() {
    let five = exact_length(5);
    let numeric = digits();
    let checks: [&dyn Validate<Input = str>; 2] = [&five, &numeric];
    let errors = validate_all("554a", &checks);
    let codes: Vec<_> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, vec!["fixedLength", "numeric"]);
}

// ============================================================================
// RULE SETS VIA PRELUDE
// ============================================================================

#[test]
fn rule_set_round_trip_through_prelude() {
    let shape = Shape::new()
        .field("state", FieldType::String)
        .field("zip", FieldType::String);
    let rules: RuleSet = RuleSet::builder(shape)
        .config(EngineConfig::default().with_trim_whitespace(true))
        .rule("state", RuleKind::Required)
        .add(Rule::new("zip", RuleKind::fixed_length(5)))
        .build()
        .unwrap();

    let result: ValidationResult = rules.validate(&Record::new().with("state", "  ").with("zip", "1"));
    let paths: Vec<&FieldPath> = result.violations().iter().map(|v: &Violation| &v.path).collect();
    assert_eq!(paths, vec![&FieldPath::field("state"), &FieldPath::field("zip")]);
}

#[test]
fn configuration_errors_are_typed() {
    let error: RuleSetError = RuleSet::builder(Shape::new())
        .rule("name", RuleKind::Required)
        .build()
        .unwrap_err();
    assert_eq!(error.field(), "name");
}
