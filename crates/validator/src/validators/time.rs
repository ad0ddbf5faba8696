//! Date-time validator.
//!
//! Validates that a string parses under an explicit [`DateTimeFormat`].
//! The format is a parameter of the validator, never a process-wide
//! registration, so two rule sets can accept different layouts side by side.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// FORMAT
// ============================================================================

/// The layout a date-time string must follow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "snake_case")]
pub enum DateTimeFormat {
    /// RFC 3339, e.g. `1974-05-01T08:30:00Z`.
    #[default]
    Rfc3339,
    /// RFC 2822, e.g. `Tue, 1 Jul 2003 10:52:37 +0200`.
    Rfc2822,
    /// A chrono strftime pattern such as `%Y-%m-%d`.
    ///
    /// Accepted as a zoned date-time, a naive date-time, a naive date or a
    /// naive time, in that order.
    Pattern(String),
}

impl DateTimeFormat {
    /// Creates a strftime-pattern format.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Checks that the format itself is usable.
    ///
    /// Built-in formats always are; a pattern must be non-empty and free
    /// of unknown strftime specifiers.
    pub fn check(&self) -> Result<(), ValidationError> {
        match self {
            Self::Rfc3339 | Self::Rfc2822 => Ok(()),
            Self::Pattern(pattern) if pattern.is_empty() => Err(ValidationError::new(
                "invalid_format_pattern",
                "Date-time pattern must not be empty",
            )),
            Self::Pattern(pattern) => {
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                    Err(ValidationError::new(
                        "invalid_format_pattern",
                        format!("Unsupported date-time pattern '{pattern}'"),
                    )
                    .with_param("pattern", pattern.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns `true` when `input` parses under this format.
    pub fn parses(&self, input: &str) -> bool {
        match self {
            Self::Rfc3339 => ChronoDateTime::parse_from_rfc3339(input).is_ok(),
            Self::Rfc2822 => ChronoDateTime::parse_from_rfc2822(input).is_ok(),
            Self::Pattern(pattern) => {
                ChronoDateTime::parse_from_str(input, pattern).is_ok()
                    || NaiveDateTime::parse_from_str(input, pattern).is_ok()
                    || NaiveDate::parse_from_str(input, pattern).is_ok()
                    || NaiveTime::parse_from_str(input, pattern).is_ok()
            }
        }
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc3339 => f.write_str("RFC 3339"),
            Self::Rfc2822 => f.write_str("RFC 2822"),
            Self::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

// ============================================================================
// DATETIME VALIDATOR
// ============================================================================

/// Validates that a string is a date-time in the configured format.
///
/// # Examples
///
/// ```
/// use probity_validator::validators::{DateTime, DateTimeFormat};
/// use probity_validator::foundation::Validate;
///
/// let birth_date = DateTime::new(DateTimeFormat::Rfc3339);
/// assert!(birth_date.validate("1974-05-01T08:30:00Z").is_ok());
/// assert!(birth_date.validate("").is_err());
///
/// let day = DateTime::new(DateTimeFormat::pattern("%Y-%m-%d"));
/// assert!(day.validate("1974-05-01").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DateTime {
    format: DateTimeFormat,
}

impl DateTime {
    /// Creates a date-time validator for the given format.
    #[must_use]
    pub fn new(format: DateTimeFormat) -> Self {
        Self { format }
    }

    /// Returns the expected format.
    pub fn format(&self) -> &DateTimeFormat {
        &self.format
    }
}

impl Validate for DateTime {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.format.parses(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "datetime",
                format!("Value is not a valid {} date-time", self.format),
            )
            .with_param("format", self.format.to_string()))
        }
    }
}

/// Creates a date-time validator.
#[must_use]
pub fn date_time(format: DateTimeFormat) -> DateTime {
    DateTime::new(format)
}

// ============================================================================
// TESTS
// ============================================================================
