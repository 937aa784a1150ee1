//! Analysis configuration: traversal limits and rule selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rule::RuleKey;

/// Default bound on the depth of nodes the analyzer visits.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings controlling which checks run and how deep the analyzer descends.
///
/// Rules are disabled by name (`StrongTypingInFLWOR`) or by full key
/// (`xquery:StrongTypingInFLWOR`).
///
/// # Example
///
/// ```
/// use xqlint::{AnalysisConfig, RuleKey};
///
/// let config = AnalysisConfig::from_json(
///     r#"{ "max_depth": 64, "disabled_rules": ["StrongTypingInFLWOR"] }"#,
/// )?;
/// assert_eq!(config.max_depth(), 64);
/// assert!(!config.is_enabled(&RuleKey::new("xquery", "StrongTypingInFLWOR")));
/// assert!(config.is_enabled(&RuleKey::new("xquery", "StrongTypingInModuleVariable")));
/// # Ok::<(), xqlint::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Deepest node depth visited; the root has depth 0.
    max_depth: usize,
    /// Rule names or keys that are skipped.
    disabled_rules: BTreeSet<String>,
}

impl AnalysisConfig {
    /// Creates a configuration with the given depth bound and every rule
    /// enabled.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            disabled_rules: BTreeSet::new(),
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidMaxDepth`] when `max_depth` is zero.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    /// Checks the invariants deserialisation cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaxDepth`] when `max_depth` is zero.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::invalid_max_depth(self.max_depth));
        }
        Ok(self)
    }

    /// Disables a rule by name or full key.
    #[must_use]
    pub fn with_disabled_rule(mut self, rule: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule.into());
        self
    }

    /// Returns the depth bound.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the disabled rule names and keys in sorted order.
    pub fn disabled_rules(&self) -> impl Iterator<Item = &str> {
        self.disabled_rules.iter().map(String::as_str)
    }

    /// Reports whether the rule identified by `key` should run.
    #[must_use]
    pub fn is_enabled(&self, key: &RuleKey) -> bool {
        !self.disabled_rules.contains(key.rule())
            && !self.disabled_rules.contains(&key.to_string())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
