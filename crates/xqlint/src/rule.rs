//! Rule identity and descriptive metadata.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Fully qualified rule identifier, displayed as `repository:rule`.
///
/// # Example
///
/// ```
/// use xqlint::RuleKey;
///
/// let key = RuleKey::new("xquery", "StrongTypingInFLWOR");
/// assert_eq!(key.to_string(), "xquery:StrongTypingInFLWOR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuleKey {
    repository: String,
    rule: String,
}

impl RuleKey {
    /// Creates a rule key.
    #[must_use]
    pub fn new(repository: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            rule: rule.into(),
        }
    }

    /// Returns the repository the rule belongs to.
    #[must_use]
    pub const fn repository(&self) -> &str {
        self.repository.as_str()
    }

    /// Returns the rule name within its repository.
    #[must_use]
    pub const fn rule(&self) -> &str {
        self.rule.as_str()
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

/// Severity assigned to a rule.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    /// Informational finding.
    Info,
    /// Minor maintainability issue.
    Minor,
    /// Issue worth fixing in the normal course of work.
    #[default]
    Major,
    /// Likely defect.
    Critical,
    /// Defect that must be fixed.
    Blocker,
}

/// Static description of a rule, declared by the check that implements it.
///
/// The repository is assigned when the check is registered, see
/// [`CheckRegistry::register`](crate::CheckRegistry::register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDefinition {
    /// Rule name, unique within its repository.
    pub rule: &'static str,
    /// Short human-readable title.
    pub name: &'static str,
    /// Guidance shown alongside issues.
    pub description: &'static str,
    /// Default severity.
    pub priority: Priority,
}

/// Metadata of a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    key: RuleKey,
    name: String,
    description: String,
    priority: Priority,
}

impl RuleMetadata {
    /// Creates metadata for `definition` registered under `repository`.
    #[must_use]
    pub fn from_definition(repository: &str, definition: &RuleDefinition) -> Self {
        Self {
            key: RuleKey::new(repository, definition.rule),
            name: definition.name.to_owned(),
            description: definition.description.to_owned(),
            priority: definition.priority,
        }
    }

    /// Returns the rule key.
    #[must_use]
    pub const fn key(&self) -> &RuleKey {
        &self.key
    }

    /// Returns the rule title.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the rule description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the rule priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}
