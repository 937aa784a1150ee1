//! Single-pass analysis of source units.
//!
//! The analyzer walks each unit's tree once in pre-order and offers every
//! node to every enabled check, in registration order. A check that fails on
//! a node is recorded in the report; the walk continues with the remaining
//! checks and nodes.

use tracing::{debug, info, warn};
use xqlint_tree::{Node, RawElement, TreeError};

use crate::check::Visit;
use crate::config::AnalysisConfig;
use crate::error::CheckError;
use crate::issue::{Issue, Reporter};
use crate::registry::{CheckRegistry, RegisteredCheck};
use crate::rule::RuleKey;

const ANALYSIS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::analysis");

/// A parsed source file awaiting analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    uri: String,
    root: Node,
}

impl SourceUnit {
    /// Creates a unit from an already typed tree.
    #[must_use]
    pub fn new(uri: impl Into<String>, root: Node) -> Self {
        Self {
            uri: uri.into(),
            root,
        }
    }

    /// Creates a unit from a raw parse tree.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] when the raw tree cannot be typed.
    pub fn from_raw(uri: impl Into<String>, raw: RawElement) -> Result<Self, TreeError> {
        Ok(Self::new(uri, Node::from_raw(raw)?))
    }

    /// Creates a unit from a raw parse tree serialised as JSON.
    ///
    /// Nesting depth is not limited by the JSON parser, so trees as deep
    /// as [`AnalysisConfig::max_depth`] allows are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] when the document is not a raw tree or the
    /// tree cannot be typed.
    pub fn from_json(uri: impl Into<String>, text: &str) -> Result<Self, TreeError> {
        Ok(Self::new(uri, Node::from_json(text)?))
    }

    /// Returns the unit identifier.
    #[must_use]
    pub const fn uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Returns the root of the unit's tree.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }
}

/// A check that failed on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    rule: RuleKey,
    line: u32,
    error: CheckError,
}

impl CheckFailure {
    /// Returns the failing rule.
    #[must_use]
    pub const fn rule(&self) -> &RuleKey {
        &self.rule
    }

    /// Returns the line of the node the check failed on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the error the check raised.
    #[must_use]
    pub const fn error(&self) -> &CheckError {
        &self.error
    }
}

/// Outcome of analysing one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    uri: String,
    issues: Vec<Issue>,
    failures: Vec<CheckFailure>,
    nodes_visited: usize,
    truncated: bool,
}

impl AnalysisReport {
    fn empty(uri: &str) -> Self {
        Self {
            uri: uri.to_owned(),
            issues: Vec::new(),
            failures: Vec::new(),
            nodes_visited: 0,
            truncated: false,
        }
    }

    /// Returns the analysed unit's identifier.
    #[must_use]
    pub const fn uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Returns the issues in traversal order.
    #[must_use]
    pub const fn issues(&self) -> &[Issue] {
        self.issues.as_slice()
    }

    /// Returns the check failures in traversal order.
    #[must_use]
    pub const fn failures(&self) -> &[CheckFailure] {
        self.failures.as_slice()
    }

    /// Returns how many nodes were offered to the checks.
    #[must_use]
    pub const fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Reports whether subtrees beyond the depth bound were skipped.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Reports whether the unit raised neither issues nor failures.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.failures.is_empty()
    }
}

/// Runs registered checks over source units.
///
/// # Example
///
/// ```
/// use xqlint::{AnalysisConfig, Analyzer, Node, NodeKind, SourceUnit};
///
/// let binding = Node::new(NodeKind::LetBinding, 3)
///     .with_token("$")
///     .with_child(
///         Node::new(NodeKind::VarName, 3)
///             .with_child(Node::new(NodeKind::EqName, 3).with_token("total")),
///     )
///     .with_token(":=")
///     .with_child(Node::new(NodeKind::Literal, 3).with_token("0"));
/// let root = Node::new(NodeKind::FlworExpr, 2)
///     .with_child(Node::new(NodeKind::LetClause, 3).with_token("let").with_child(binding));
///
/// let analyzer = Analyzer::builtin(&AnalysisConfig::default());
/// let report = analyzer.analyze(&SourceUnit::new("totals.xq", root));
///
/// let [issue] = report.issues() else { panic!("expected one issue") };
/// assert_eq!(issue.line(), 3);
/// assert_eq!(issue.rule().to_string(), "xquery:StrongTypingInFLWOR");
/// ```
#[derive(Debug)]
pub struct Analyzer {
    registry: CheckRegistry,
    max_depth: usize,
}

impl Analyzer {
    /// Creates an analyzer running the checks of `registry` that `config`
    /// enables.
    #[must_use]
    pub fn new(registry: CheckRegistry, config: &AnalysisConfig) -> Self {
        Self {
            registry: registry.retain_enabled(config),
            max_depth: config.max_depth(),
        }
    }

    /// Creates an analyzer over the built-in checks.
    #[must_use]
    pub fn builtin(config: &AnalysisConfig) -> Self {
        Self::new(CheckRegistry::builtin(), config)
    }

    /// Returns the enabled checks.
    #[must_use]
    pub const fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Analyses one unit.
    #[must_use]
    pub fn analyze(&self, unit: &SourceUnit) -> AnalysisReport {
        info!(
            target: ANALYSIS_TARGET,
            uri = unit.uri(),
            checks = self.registry.len(),
            "analysing unit"
        );

        let mut walk = Walk {
            entries: self.registry.entries(),
            max_depth: self.max_depth,
            report: AnalysisReport::empty(unit.uri()),
        };
        walk.visit(unit.root(), &mut Vec::new());
        let report = walk.report;

        debug!(
            target: ANALYSIS_TARGET,
            uri = unit.uri(),
            issues = report.issues.len(),
            failures = report.failures.len(),
            nodes = report.nodes_visited,
            truncated = report.truncated,
            "unit analysed"
        );
        report
    }

    /// Analyses each unit independently, returning reports in input order.
    #[must_use]
    pub fn analyze_all<'a>(
        &self,
        units: impl IntoIterator<Item = &'a SourceUnit>,
    ) -> Vec<AnalysisReport> {
        let reports: Vec<_> = units.into_iter().map(|unit| self.analyze(unit)).collect();
        info!(
            target: ANALYSIS_TARGET,
            units = reports.len(),
            issues = reports.iter().map(|report| report.issues.len()).sum::<usize>(),
            "analysis complete"
        );
        reports
    }
}

struct Walk<'r> {
    entries: &'r [RegisteredCheck],
    max_depth: usize,
    report: AnalysisReport,
}

impl Walk<'_> {
    fn visit<'t>(&mut self, node: &'t Node, ancestors: &mut Vec<&'t Node>) {
        if ancestors.len() > self.max_depth {
            if !self.report.truncated {
                warn!(
                    target: ANALYSIS_TARGET,
                    uri = %self.report.uri,
                    line = node.line(),
                    max_depth = self.max_depth,
                    "depth bound reached, skipping subtree"
                );
            }
            self.report.truncated = true;
            return;
        }

        self.report.nodes_visited += 1;
        self.run_checks(&Visit::new(node, ancestors.as_slice()));

        ancestors.push(node);
        for child in node.children() {
            self.visit(child, ancestors);
        }
        ancestors.pop();
    }

    fn run_checks(&mut self, visit: &Visit<'_, '_>) {
        for entry in self.entries {
            let mut reporter = Reporter::new(&entry.key, &mut self.report.issues);
            if let Err(error) = entry.check.enter_node(visit, &mut reporter) {
                warn!(
                    target: ANALYSIS_TARGET,
                    uri = %self.report.uri,
                    rule = %entry.key,
                    line = visit.node().line(),
                    %error,
                    "check failed"
                );
                self.report.failures.push(CheckFailure {
                    rule: entry.key.clone(),
                    line: visit.node().line(),
                    error,
                });
            }
        }
    }
}
