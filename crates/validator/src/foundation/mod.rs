//! Primitive validation building blocks
//!
//! This module contains the pieces every built-in validator is made of:
//!
//! - **Trait**: [`Validate`], one typed check over one input value
//! - **Error**: [`ValidationError`], a structured failure with a code,
//!   a message and ordered parameters
//!
//! The declarative engine in [`crate::rules`] drives these validators over
//! dynamically typed record fields and turns their errors into
//! path-addressed violations.
//!
//! # Examples
//!
//! ```
//! use probity_validator::foundation::Validate;
//! use probity_validator::validators::exact_length;
//!
//! let zip = exact_length(5);
//! assert!(zip.validate("55462").is_ok());
//! assert!(zip.validate("5546").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// Validates a value with several validators, collecting every failure.
///
/// Unlike chaining checks with `?`, this never stops at the first error.
///
/// # Examples
///
/// ```
/// use probity_validator::foundation::{Validate, validate_all};
/// use probity_validator::validators::{Digits, ExactLength};
///
/// let digits = Digits;
/// let five = ExactLength::new(5);
/// let checks: [&dyn Validate<Input = str>; 2] = [&digits, &five];
///
/// assert!(validate_all("55462", &checks).is_empty());
/// assert_eq!(validate_all("55a", &checks).len(), 2);
/// ```
pub fn validate_all<I>(value: &I, validators: &[&dyn Validate<Input = I>]) -> Vec<ValidationError>
where
    I: ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn validate_all_collects_every_failure() {
        let validators: [&dyn Validate<Input = str>; 3] = [&AlwaysFails, &AlwaysValid, &AlwaysFails];
        let errors = validate_all("test", &validators);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.code == "always_fails"));
    }

    #[test]
    fn validate_all_empty_when_all_pass() {
        let validators: [&dyn Validate<Input = str>; 2] = [&AlwaysValid, &AlwaysValid];
        assert!(validate_all("test", &validators).is_empty());
    }
}
