//! Numeric range validators

use crate::foundation::{Validate, ValidationError};

/// Validates that an integer is within an inclusive range.
///
/// # Examples
///
/// ```
/// use probity_validator::validators::InRange;
/// use probity_validator::foundation::Validate;
///
/// let age = InRange::new(0, 100).unwrap();
/// assert!(age.validate(&0).is_ok());
/// assert!(age.validate(&100).is_ok());
/// assert!(age.validate(&101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InRange {
    /// Lower bound (inclusive).
    pub min: i64,
    /// Upper bound (inclusive).
    pub max: i64,
}

impl InRange {
    /// Creates a range validator.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max")
                .with_param("min", min.to_string())
                .with_param("max", max.to_string()));
        }
        Ok(Self { min, max })
    }
}

impl Validate for InRange {
    type Input = i64;

    fn validate(&self, input: &i64) -> Result<(), ValidationError> {
        if (self.min..=self.max).contains(input) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(self.min, self.max, *input))
        }
    }
}

/// Creates an inclusive range validator.
pub fn in_range(min: i64, max: i64) -> Result<InRange, ValidationError> {
    InRange::new(min, max)
}
