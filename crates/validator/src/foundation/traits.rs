//! Core trait for primitive validators

use crate::foundation::ValidationError;

/// The trait every primitive validator implements.
///
/// Validators are generic over their input type, so a string validator
/// cannot be handed an integer by mistake. The rule engine performs the
/// runtime type check before calling into a validator and reports a
/// `type-mismatch` violation instead.
///
/// # Examples
///
/// ```
/// use probity_validator::foundation::{Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("uppercase", "Must be upper case"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("CA").is_ok());
/// assert!(Uppercase.validate("ca").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` inputs such as `str` for borrowed text.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` when the value passes, otherwise a
    /// [`ValidationError`] describing why it did not.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
