//! Built-in validators
//!
//! Typed, single-value checks. Each one backs a rule kind of the
//! declarative engine and can also be used on its own.
//!
//! # Categories
//!
//! - **String**: length, exact length, digits, email, allow-list
//! - **Numeric**: inclusive range
//! - **Time**: date-time parsing under an explicit format
//!
//! # Examples
//!
//! ```
//! use probity_validator::prelude::*;
//!
//! let zip_checks: [&dyn Validate<Input = str>; 2] = [&digits(), &exact_length(5)];
//! assert!(validate_all("55462", &zip_checks).is_empty());
//! ```

pub mod content;
pub mod length;
pub mod range;
pub mod time;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{Digits, Email, OneOf, digits, email, one_of};
pub use length::{
    ExactLength, LengthMode, LengthRange, NotEmpty, exact_length, length_range, not_empty,
};
pub use range::{InRange, in_range};
pub use time::{DateTime, DateTimeFormat, date_time};
