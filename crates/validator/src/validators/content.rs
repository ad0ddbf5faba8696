//! String content validators
//!
//! Validators for checking string content and patterns.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Uses a simple but effective regex pattern.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email", "email address") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// DIGITS VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string consists only of ASCII digits.
    ///
    /// The empty string passes; pair with a presence check when needed.
    pub Digits for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("numeric", "String must contain only digits") }
    fn digits();
}

// ============================================================================
// ONE OF VALIDATOR
// ============================================================================

/// Validates that a string is one of a fixed set of allowed values.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    allowed: Vec<String>,
}

impl OneOf {
    /// Creates an allow-list validator.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed values.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.allowed.iter().any(|candidate| candidate == input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("oneOf", "Value is not one of the allowed values")
                    .with_param("allowed", self.allowed.join(","))
                    .with_param("actual", input.to_string()),
            )
        }
    }
}

/// Creates an allow-list validator.
pub fn one_of<I, S>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(allowed)
}

// ============================================================================
// TESTS
// ============================================================================
