//! Evaluation options attached to a rule set.

use serde::{Deserialize, Serialize};

use crate::validators::LengthMode;

/// Options that change how rules read values.
///
/// Attached to a [`RuleSet`](super::RuleSet) at build time. A nested set
/// keeps the config it was built with.
///
/// # Examples
///
/// ```
/// use probity_validator::rules::EngineConfig;
/// use probity_validator::validators::LengthMode;
///
/// let config: EngineConfig = serde_json::from_str(r#"{"trim_whitespace": true}"#).unwrap();
/// assert!(config.trim_whitespace);
/// assert_eq!(config.length_mode, LengthMode::Chars);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How `length` and `fixedLength` count.
    pub length_mode: LengthMode,
    /// Treat whitespace-only strings as empty for presence checks.
    pub trim_whitespace: bool,
}

impl EngineConfig {
    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Enables or disables whitespace trimming for presence checks.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }
}
