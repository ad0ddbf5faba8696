//! Prelude module for convenient imports.
//!
//! Provides a single `use probity_validator::prelude::*;` import that brings
//! in the record model, the rule-set API and the primitive validators.
//!
//! # Examples
//!
//! ```
//! use probity_validator::prelude::*;
//!
//! let shape = Shape::new().field("zip", FieldType::String);
//! let rules = RuleSet::builder(shape)
//!     .rules("zip", [RuleKind::Required, RuleKind::fixed_length(5), RuleKind::Numeric])
//!     .build()
//!     .unwrap();
//!
//! assert!(rules.validate(&Record::new().with("zip", "55462")).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core trait and error
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, validate_all};

// ============================================================================
// VALIDATORS: Built-in primitives
// ============================================================================

pub use crate::validators::{
    DateTime, DateTimeFormat, Digits, Email, ExactLength, InRange, LengthMode, LengthRange,
    NotEmpty, OneOf, date_time, digits, email, exact_length, in_range, length_range, not_empty,
    one_of,
};

// ============================================================================
// RECORDS: Data model
// ============================================================================

pub use crate::record::{FieldPath, PathSegment, Record, ToRecord, Value};

// ============================================================================
// RULES: Declarative engine
// ============================================================================

pub use crate::rules::{
    EngineConfig, FieldRules, FieldType, Rule, RuleKind, RuleSet, RuleSetBuilder, RuleSetError,
    Shape, ValidationResult, Violation,
};
