//! End-to-end evaluation of the customer rule set.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use probity_validator::prelude::*;
use probity_validator::rules;
use rstest::rstest;

fn summary(result: &ValidationResult) -> Vec<(String, String)> {
    result
        .violations()
        .iter()
        .map(|v| (v.path.to_string(), v.rule.to_string()))
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(path, rule)| ((*path).to_owned(), (*rule).to_owned()))
        .collect()
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn empty_birth_date_is_the_only_violation() {
    init_tracing();
    let result = rules::validate(&customer_record(), &customer_rules());

    assert_eq!(summary(&result), expected(&[("birth_date", "required")]));
    assert_eq!(result.into_result().unwrap_err().len(), 1);
}

#[test]
fn age_out_of_range_is_reported_too() {
    let record = customer_record().with("age", 150);
    let result = rules::validate(&record, &customer_rules());

    assert_eq!(
        summary(&result),
        expected(&[("birth_date", "required"), ("age", "range")])
    );
    let range = &result.violations()[1];
    assert_eq!(range.param("min"), Some("0"));
    assert_eq!(range.param("max"), Some("100"));
    assert_eq!(range.param("actual"), Some("150"));
}

#[test]
fn bad_address_reports_state_and_zip() {
    let record = valid_customer_record().with("addresses", vec![address("", "5546")]);
    let result = rules::validate(&record, &customer_rules());

    assert_eq!(
        summary(&result),
        expected(&[
            ("addresses[0].state", "required"),
            ("addresses[0].zip", "fixedLength"),
        ])
    );
}

#[test]
fn valid_customer_passes() {
    let result = customer_rules().validate(&valid_customer_record());
    assert!(result.is_valid(), "{result}");
    assert_eq!(result.to_string(), "valid");
}

// ============================================================================
// RULE BEHAVIOR THROUGH THE CUSTOMER SET
// ============================================================================

#[rstest]
#[case::lower_bound(0, true)]
#[case::upper_bound(100, true)]
#[case::below(-1, false)]
#[case::above(101, false)]
fn age_bounds_are_inclusive(#[case] age: i64, #[case] valid: bool) {
    let record = valid_customer_record().with("age", age);
    assert_eq!(customer_rules().validate(&record).is_valid(), valid);
}

#[rstest]
#[case::exact("55462", &[])]
#[case::short("5546", &["fixedLength"])]
#[case::long("554622", &["fixedLength"])]
#[case::letters("5546a", &["numeric"])]
#[case::short_letters("554a", &["fixedLength", "numeric"])]
#[case::empty("", &["required"])]
fn zip_rules(#[case] zip: &str, #[case] codes: &[&str]) {
    let record = valid_customer_record().with("addresses", vec![address("CA", zip)]);
    let result = customer_rules().validate(&record);
    assert_eq!(result.codes_for("addresses[0].zip"), codes.to_vec());
}

#[rstest]
#[case::too_short("Jo", &["length"])]
#[case::minimum("Joe", &[])]
#[case::maximum("x".repeat(50), &[])]
#[case::too_long("x".repeat(51), &["length"])]
#[case::empty("", &["required"])]
fn name_rules(#[case] name: String, #[case] codes: &[&str]) {
    let record = valid_customer_record().with("name", name);
    assert_eq!(customer_rules().validate(&record).codes_for("name"), codes.to_vec());
}

#[rstest]
#[case::absent(None, &[])]
#[case::empty(Some(""), &[])]
#[case::valid(Some("jane@example.com"), &[])]
#[case::invalid(Some("not-an-email"), &["email"])]
fn email_is_checked_only_when_provided(#[case] email: Option<&str>, #[case] codes: &[&str]) {
    let mut record = Record::new();
    for (name, value) in valid_customer_record().iter() {
        if name != "email" {
            record.insert(name, value.clone());
        }
    }
    if let Some(email) = email {
        record.insert("email", email);
    }
    assert_eq!(customer_rules().validate(&record).codes_for("email"), codes.to_vec());
}

#[test]
fn unparseable_birth_date_is_a_single_datetime_violation() {
    let record = valid_customer_record().with("birth_date", "11/02/1974");
    let result = customer_rules().validate(&record);
    assert_eq!(summary(&result), expected(&[("birth_date", "datetime")]));
}

#[test]
fn missing_addresses_are_required() {
    let record = valid_customer_record().with("addresses", Vec::<Record>::new());
    let result = customer_rules().validate(&record);
    assert_eq!(summary(&result), expected(&[("addresses", "required")]));
}

#[test]
fn every_address_is_checked_in_order() {
    let record = valid_customer_record().with(
        "addresses",
        vec![address("CA", "55462"), address("", "55462"), Record::new(), address("NY", "1")],
    );
    let result = customer_rules().validate(&record);
    assert_eq!(
        summary(&result),
        expected(&[
            ("addresses[2]", "required"),
            ("addresses[1].state", "required"),
            ("addresses[2].state", "required"),
            ("addresses[2].zip", "required"),
            ("addresses[3].zip", "fixedLength"),
        ])
    );
}

#[test]
fn mistyped_values_do_not_abort_evaluation() {
    let record = valid_customer_record()
        .with("age", "fifty")
        .with("name", 42)
        .with("addresses", vec![Value::from("CA 55462")]);
    let result = customer_rules().validate(&record);
    assert_eq!(
        summary(&result),
        expected(&[
            ("name", "type-mismatch"),
            ("age", "type-mismatch"),
            ("addresses[0]", "type-mismatch"),
        ])
    );
}

#[test]
fn presence_only_rule_still_rejects_a_mistyped_age() {
    let rules = RuleSet::builder(customer_shape())
        .rule("age", RuleKind::Required)
        .build()
        .unwrap();
    let result = rules.validate(&Record::new().with("age", "fifty"));
    assert_eq!(summary(&result), expected(&[("age", "type-mismatch")]));
}

#[rstest]
#[case::nested_only(RuleSet::builder(customer_shape()).nested("addresses", address_rules()).build().unwrap())]
#[case::customer(customer_rules())]
fn single_address_record_is_not_a_list(#[case] rules: RuleSet) {
    let record = valid_customer_record().with("addresses", address("CA", "55462"));
    let result = rules.validate(&record);
    assert_eq!(summary(&result), expected(&[("addresses", "type-mismatch")]));
    assert_eq!(result.violations()[0].param("expected"), Some("list"));
}

#[test]
fn state_allow_list_through_one_of() {
    let rules = RuleSet::builder(customer_shape())
        .nested_with("addresses", |b| {
            b.rules("state", [RuleKind::Required, RuleKind::one_of(["CA", "NY"])])
        })
        .build()
        .unwrap();

    let record = Record::new().with("addresses", vec![address("CA", ""), address("TX", "")]);
    let result = rules.validate(&record);

    assert_eq!(summary(&result), expected(&[("addresses[1].state", "oneOf")]));
    assert_eq!(result.violations()[0].param("allowed"), Some("CA,NY"));
}

// ============================================================================
// TYPED RECORDS
// ============================================================================

#[test]
fn typed_customer_matches_record_evaluation() {
    let rules = customer_rules();
    assert_eq!(rules.validate_typed(&customer()), rules.validate(&customer_record()));

    let mut fixed = customer();
    fixed.birth_date = "1974-02-11T08:30:00+02:00".into();
    assert!(rules.validate_typed(&fixed).is_valid());
}

#[test]
fn records_decode_from_json() {
    let record: Record = serde_json::from_value(serde_json::json!({
        "name": "John Doe",
        "email": "john@example.com",
        "birth_date": "",
        "age": 50,
        "addresses": [{"state": "CA", "zip": "55462"}],
    }))
    .unwrap();

    assert_eq!(record, customer_record());
}

#[test]
fn results_serialize_for_callers() {
    let result = customer_rules().validate(&customer_record().with("age", 150));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "violations": [
                {
                    "path": "birth_date",
                    "rule": "required",
                    "reason": "This field is required",
                },
                {
                    "path": "age",
                    "rule": "range",
                    "reason": "Value must be between 0 and 100",
                    "params": {"min": "0", "max": "100", "actual": "150"},
                },
            ],
        })
    );
}
