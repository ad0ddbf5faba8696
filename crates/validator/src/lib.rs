//! # probity-validator
//!
//! Declarative validation of structured records.
//!
//! Rules are declared once per record type as a [`RuleSet`](rules::RuleSet)
//! and evaluated against any number of records. Evaluation collects every
//! failure, addressed by field path, instead of stopping at the first one.
//!
//! ## Quick Start
//!
//! ```rust
//! use probity_validator::prelude::*;
//!
//! let address = Shape::new()
//!     .field("state", FieldType::String)
//!     .field("zip", FieldType::String);
//! let customer = Shape::new()
//!     .field("name", FieldType::String)
//!     .field("age", FieldType::Integer)
//!     .field("addresses", FieldType::list_of_records(address));
//!
//! let rules = RuleSet::builder(customer)
//!     .rules("name", [RuleKind::Required, RuleKind::length(3, 50)])
//!     .rule("age", RuleKind::range(0, 100))
//!     .rule("addresses", RuleKind::Required)
//!     .nested_with("addresses", |b| {
//!         b.rule("state", RuleKind::Required)
//!             .rules("zip", [RuleKind::Required, RuleKind::fixed_length(5), RuleKind::Numeric])
//!     })
//!     .build()
//!     .unwrap();
//!
//! let record = Record::new()
//!     .with("name", "John Doe")
//!     .with("age", 50)
//!     .with("addresses", vec![Record::new().with("state", "CA").with("zip", "5546")]);
//!
//! let result = rules.validate(&record);
//! assert_eq!(result.codes_for("addresses[0].zip"), vec!["fixedLength"]);
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`]: typed primitives such as
//!   [`LengthRange`](validators::LengthRange), [`InRange`](validators::InRange)
//!   and [`DateTime`](validators::DateTime)
//! - [`record`]: the dynamically typed [`Record`](record::Record) model
//! - [`rules`]: shapes, rule sets and the evaluator
//!
//! Use the [`validator!`] macro to write further primitives in the same style.

// ValidationError (the fundamental error type for all validators) is wide;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validators;
