//! Customer fixture shared by the integration tests and the benchmark.

#![allow(dead_code)]

use probity_validator::prelude::*;

pub fn address_shape() -> Shape {
    Shape::new()
        .field("state", FieldType::String)
        .field("zip", FieldType::String)
}

pub fn customer_shape() -> Shape {
    Shape::new()
        .field("name", FieldType::String)
        .field("email", FieldType::String)
        .field("birth_date", FieldType::String)
        .field("age", FieldType::Integer)
        .field("addresses", FieldType::list_of_records(address_shape()))
}

pub fn address_rules() -> RuleSet {
    RuleSet::builder(address_shape())
        .rule("state", RuleKind::Required)
        .rules("zip", [RuleKind::Required, RuleKind::fixed_length(5), RuleKind::Numeric])
        .build()
        .expect("address rules are well formed")
}

/// The customer rules: name, optional email, RFC 3339 birth date, age and
/// at least one well-formed address.
pub fn customer_rules() -> RuleSet {
    RuleSet::builder(customer_shape())
        .rules("name", [RuleKind::Required, RuleKind::length(3, 50)])
        .rule("email", RuleKind::Email)
        .rules(
            "birth_date",
            [RuleKind::Required, RuleKind::datetime(DateTimeFormat::Rfc3339)],
        )
        .rule("age", RuleKind::range(0, 100))
        .rules("addresses", [RuleKind::Required, RuleKind::each(RuleKind::Required)])
        .nested("addresses", address_rules())
        .build()
        .expect("customer rules are well formed")
}

pub fn address(state: &str, zip: &str) -> Record {
    Record::new().with("state", state).with("zip", zip)
}

/// The reference customer, whose birth date is left empty.
pub fn customer_record() -> Record {
    Record::new()
        .with("name", "John Doe")
        .with("email", "john@example.com")
        .with("birth_date", "")
        .with("age", 50)
        .with("addresses", vec![address("CA", "55462")])
}

/// The reference customer with every field valid.
pub fn valid_customer_record() -> Record {
    customer_record().with("birth_date", "1974-02-11T08:30:00Z")
}

#[derive(Debug, Clone)]
pub struct Address {
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub age: i64,
    pub addresses: Vec<Address>,
}

impl ToRecord for Address {
    fn to_record(&self) -> Record {
        address(&self.state, &self.zip)
    }
}

impl ToRecord for Customer {
    fn to_record(&self) -> Record {
        Record::new()
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("birth_date", self.birth_date.as_str())
            .with("age", self.age)
            .with(
                "addresses",
                self.addresses.iter().map(ToRecord::to_record).collect::<Vec<_>>(),
            )
    }
}

pub fn customer() -> Customer {
    Customer {
        name: "John Doe".into(),
        email: "john@example.com".into(),
        birth_date: String::new(),
        age: 50,
        addresses: vec![Address {
            state: "CA".into(),
            zip: "55462".into(),
        }],
    }
}

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
