//! Declarative rule sets
//!
//! Rules are declared once per record type, checked against the record's
//! [`Shape`] when the [`RuleSet`] is built, and then evaluated against any
//! number of [`Record`](crate::record::Record)s:
//!
//! ```text
//! Shape ──► RuleSetBuilder ──build()──► RuleSet ──validate(record)──► ValidationResult
//!                              │
//!                              └─► RuleSetError (bad declaration)
//! ```
//!
//! Configuration mistakes fail the build. Data mistakes never fail: they
//! come back as [`Violation`]s inside the [`ValidationResult`].

mod config;
mod engine;
mod error;
mod result;
mod rule;
mod set;
mod shape;

pub use config::EngineConfig;
pub use engine::validate;
pub use error::RuleSetError;
pub use result::{ValidationResult, Violation};
pub use rule::{Rule, RuleKind};
pub use set::{FieldRules, RuleSet, RuleSetBuilder};
pub use shape::{FieldType, Shape};
