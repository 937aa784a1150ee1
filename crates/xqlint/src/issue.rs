//! Issues raised by checks and the sinks that collect them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rule::RuleKey;

const ISSUE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::issues");

/// A rule violation at a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    rule: RuleKey,
    line: u32,
    message: String,
}

impl Issue {
    /// Creates an issue.
    #[must_use]
    pub fn new(rule: RuleKey, line: u32, message: impl Into<String>) -> Self {
        Self {
            rule,
            line,
            message: message.into(),
        }
    }

    /// Returns the violated rule.
    #[must_use]
    pub const fn rule(&self) -> &RuleKey {
        &self.rule
    }

    /// Returns the one-based source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the issue message.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}: {}", self.rule, self.line, self.message)
    }
}

/// Receives issues in the order checks raise them.
pub trait IssueSink {
    /// Accepts one issue.
    fn report(&mut self, issue: Issue);
}

impl IssueSink for Vec<Issue> {
    fn report(&mut self, issue: Issue) {
        self.push(issue);
    }
}

/// Issue sink handed to a single check, stamping its rule key on every
/// issue.
pub struct Reporter<'a> {
    rule: &'a RuleKey,
    sink: &'a mut dyn IssueSink,
    reported: usize,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for `rule` writing into `sink`.
    #[must_use]
    pub fn new(rule: &'a RuleKey, sink: &'a mut dyn IssueSink) -> Self {
        Self {
            rule,
            sink,
            reported: 0,
        }
    }

    /// Returns the rule issues are raised for.
    #[must_use]
    pub const fn rule(&self) -> &RuleKey {
        self.rule
    }

    /// Returns how many issues this reporter has forwarded.
    #[must_use]
    pub const fn reported(&self) -> usize {
        self.reported
    }

    /// Raises an issue at `line`.
    pub fn add_issue(&mut self, line: u32, message: impl Into<String>) {
        let issue = Issue::new(self.rule.clone(), line, message);
        debug!(
            target: ISSUE_TARGET,
            rule = %issue.rule,
            line,
            message = %issue.message,
            "issue raised"
        );
        self.sink.report(issue);
        self.reported += 1;
    }
}

impl fmt::Debug for Reporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("rule", &self.rule)
            .field("reported", &self.reported)
            .finish_non_exhaustive()
    }
}
