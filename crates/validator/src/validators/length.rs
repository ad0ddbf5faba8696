//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructors for byte-length counting when the input
//! is known to be ASCII.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content; the rule engine decides separately
    /// whether to trim before checking presence.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn not_empty();
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "fixedLength",
            format!("String must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Creates an exact length validator that counts bytes.
    #[must_use]
    pub fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }

    /// Switches the counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthRange {
    /// Creates a new length range validator (counts Unicode chars by default).
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max")
                .with_param("min", min.to_string())
                .with_param("max", max.to_string()));
        }
        Ok(Self {
            min,
            max,
            mode: LengthMode::Chars,
        })
    }

    /// Creates a length range validator that counts bytes.
    ///
    /// Returns an error if `min > max`.
    pub fn bytes(min: usize, max: usize) -> Result<Self, ValidationError> {
        Self::new(min, max).map(|range| range.with_mode(LengthMode::Bytes))
    }

    /// Switches the counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);
        if len >= self.min && len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "length",
                format!(
                    "String length must be between {} and {}",
                    self.min, self.max
                ),
            )
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", len.to_string()))
        }
    }
}

/// Creates a length range validator.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ValidationError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_valid() {
        let validator = ExactLength::new(5);
        assert!(validator.validate("55462").is_ok());
    }

    #[test]
    fn test_exact_length_too_short() {
        let validator = ExactLength::new(5);
        let err = validator.validate("5546").unwrap_err();
        assert_eq!(err.code, "fixedLength");
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[test]
    fn test_exact_length_too_long() {
        let validator = ExactLength::new(5);
        assert!(validator.validate("554622").is_err());
    }

    #[test]
    fn test_length_range_boundaries() {
        let validator = LengthRange::new(3, 50).unwrap();
        assert!(validator.validate("Ann").is_ok()); // min
        assert!(validator.validate(&"x".repeat(50)).is_ok()); // max
        assert!(validator.validate("Al").is_err());
        assert!(validator.validate(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_length_range_error_params() {
        let validator = LengthRange::new(3, 50).unwrap();
        let err = validator.validate("Al").unwrap_err();
        assert_eq!(err.code, "length");
        assert_eq!(err.param("min"), Some("3"));
        assert_eq!(err.param("max"), Some("50"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn test_length_range_invalid() {
        assert!(LengthRange::new(10, 5).is_err());
        assert!(LengthRange::bytes(10, 5).is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty.validate("hello").is_ok());
        assert!(NotEmpty.validate(" ").is_ok()); // whitespace is not empty
        assert_eq!(NotEmpty.validate("").unwrap_err().code, "required");
    }

    #[test]
    fn test_helper_functions() {
        assert!(exact_length(5).validate("hello").is_ok());
        assert!(length_range(5, 10).unwrap().validate("hello").is_ok());
        assert!(not_empty().validate("hello").is_ok());
    }

    #[test]
    fn test_unicode_handling() {
        // 4 chars, 5 bytes
        let name = "Jos\u{e9}";
        assert!(ExactLength::new(4).validate(name).is_ok());
        assert!(ExactLength::bytes(5).validate(name).is_ok());
        assert!(LengthRange::new(1, 4).unwrap().validate(name).is_ok());
        assert!(LengthRange::bytes(1, 4).unwrap().validate(name).is_err());
    }
}
