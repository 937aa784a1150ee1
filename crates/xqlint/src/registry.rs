//! Registration of checks under rule repositories.

use std::fmt;

use crate::check::Check;
use crate::checks::{
    StrongTypingInFlwor, StrongTypingInFunctionDeclaration, StrongTypingInModuleVariable,
};
use crate::config::AnalysisConfig;
use crate::rule::{RuleKey, RuleMetadata};

/// Repository key of the built-in checks.
pub const REPOSITORY_KEY: &str = "xquery";

/// A check bound to its fully qualified rule key.
pub(crate) struct RegisteredCheck {
    pub(crate) key: RuleKey,
    pub(crate) check: Box<dyn Check>,
}

/// Ordered collection of checks.
///
/// Registration order is the order in which checks see each node, and so
/// the order of issues raised on the same node.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a registry holding every built-in check under
    /// [`REPOSITORY_KEY`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_check(REPOSITORY_KEY, StrongTypingInFlwor)
            .with_check(REPOSITORY_KEY, StrongTypingInFunctionDeclaration)
            .with_check(REPOSITORY_KEY, StrongTypingInModuleVariable)
    }

    /// Registers `check` under `repository`, returning the registry.
    #[must_use]
    pub fn with_check(mut self, repository: &str, check: impl Check + 'static) -> Self {
        self.register(repository, Box::new(check));
        self
    }

    /// Registers `check` under `repository`.
    ///
    /// A check whose key is already registered replaces the earlier one in
    /// place.
    pub fn register(&mut self, repository: &str, check: Box<dyn Check>) {
        let key = RuleKey::new(repository, check.definition().rule);
        let entry = RegisteredCheck { key, check };
        match self.checks.iter_mut().find(|existing| existing.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.checks.push(entry),
        }
    }

    /// Drops every check the configuration disables.
    #[must_use]
    pub fn retain_enabled(mut self, config: &AnalysisConfig) -> Self {
        self.checks.retain(|entry| config.is_enabled(&entry.key));
        self
    }

    /// Resolves the key of the check implementing `rule`.
    #[must_use]
    pub fn rule_key(&self, rule: &str) -> Option<&RuleKey> {
        self.checks
            .iter()
            .map(|entry| &entry.key)
            .find(|key| key.rule() == rule)
    }

    /// Lists the metadata of every registered rule in registration order.
    #[must_use]
    pub fn metadata(&self) -> Vec<RuleMetadata> {
        self.checks
            .iter()
            .map(|entry| {
                RuleMetadata::from_definition(entry.key.repository(), &entry.check.definition())
            })
            .collect()
    }

    /// Returns the registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &RuleKey> {
        self.checks.iter().map(|entry| &entry.key)
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.checks.len()
    }

    /// Reports whether no check is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub(crate) const fn entries(&self) -> &[RegisteredCheck] {
        self.checks.as_slice()
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
