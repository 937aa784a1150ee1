//! The closed set of grammar constructs a syntax tree node can represent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Grammar rule variant of a syntax tree node.
///
/// Every structural node in an analysed tree carries exactly one kind. The
/// set is closed: raw parse trees naming any other rule are rejected when
/// they are converted into [`Node`](crate::Node) values, so code matching on
/// a kind can rely on exhaustiveness.
///
/// The textual form is the kebab-case rule name used by the parser.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use xqlint_tree::NodeKind;
///
/// assert_eq!(NodeKind::ForBinding.rule_name(), "for-binding");
/// assert_eq!(NodeKind::from_str("var-decl"), Ok(NodeKind::VarDecl));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
    /// A whole compilation unit.
    Module,
    /// `xquery version "3.0";`
    VersionDecl,
    /// A main module: prolog followed by a query body.
    MainModule,
    /// A library module: module declaration followed by a prolog.
    LibraryModule,
    /// `module namespace p = "...";`
    ModuleDecl,
    /// The declaration section of a module.
    Prolog,
    /// `declare namespace p = "...";`
    NamespaceDecl,
    /// `import module namespace p = "..." at "...";`
    ModuleImport,
    /// `declare variable $name as T := expr;`
    VarDecl,
    /// `declare function p:name($a as T) as T { ... };`
    FunctionDecl,
    /// A possibly prefixed name.
    EqName,
    /// The parenthesised parameter list of a function.
    ParamList,
    /// One function parameter.
    Param,
    /// `as SequenceType`
    TypeDeclaration,
    /// An item type plus optional occurrence indicator.
    SequenceType,
    /// `element()`, `xs:string`, `item()` and friends.
    ItemType,
    /// `?`, `*` or `+`.
    OccurrenceIndicator,
    /// The enclosed body of a function.
    FunctionBody,
    /// A comma-separated expression sequence.
    Expr,
    /// A FLWOR expression.
    FlworExpr,
    /// `for $a in ..., $b in ...`
    ForClause,
    /// A single `$a at $i as T in expr` binding of a for clause.
    ForBinding,
    /// `at $i`
    PositionalVar,
    /// `let $a := ..., $b := ...`
    LetClause,
    /// A single `$a as T := expr` binding of a let clause.
    LetBinding,
    /// `where expr`
    WhereClause,
    /// `order by ...`
    OrderByClause,
    /// One ordering key of an order-by clause.
    OrderSpec,
    /// `return expr`
    ReturnClause,
    /// `typeswitch (expr) case ... default ...`
    TypeswitchExpr,
    /// `case $v as T return expr`
    CaseClause,
    /// `default return expr`
    DefaultClause,
    /// `if (...) then ... else ...`
    IfExpr,
    /// `a or b`
    OrExpr,
    /// `a and b`
    AndExpr,
    /// A general, value or node comparison.
    ComparisonExpr,
    /// Additive or multiplicative arithmetic.
    ArithmeticExpr,
    /// A relative or absolute path.
    PathExpr,
    /// One step of a path.
    StepExpr,
    /// `[expr]`
    Predicate,
    /// `p:name(args)`
    FunctionCall,
    /// The parenthesised arguments of a call.
    ArgumentList,
    /// `function($a as T) as T { ... }`
    InlineFunctionExpr,
    /// `$name`
    VarRef,
    /// The name part of a variable reference or binding.
    VarName,
    /// A direct or computed element constructor.
    ElementConstructor,
    /// A string or numeric literal.
    Literal,
    /// `(expr)`
    ParenthesizedExpr,
    /// `.`
    ContextItemExpr,
}

impl NodeKind {
    /// Returns the grammar rule name of this kind.
    #[must_use]
    pub fn rule_name(self) -> &'static str {
        self.into()
    }

    /// Returns every kind in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        Self::VARIANTS
    }

    /// Returns whether nodes of this kind may carry a declared type
    /// annotation.
    #[must_use]
    pub const fn carries_type_annotation(self) -> bool {
        self.annotation_kind().is_some()
    }

    /// Returns the kind of the direct child holding the declared type of a
    /// node of this kind, if the construct allows one.
    #[must_use]
    pub(crate) const fn annotation_kind(self) -> Option<Self> {
        match self {
            Self::ForBinding | Self::LetBinding | Self::VarDecl | Self::Param | Self::FunctionDecl => {
                Some(Self::TypeDeclaration)
            }
            Self::CaseClause => Some(Self::SequenceType),
            _ => None,
        }
    }
}
