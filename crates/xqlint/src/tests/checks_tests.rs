//! Tests for the built-in strong typing checks.

use rstest::rstest;
use xqlint_tree::fixtures;

use crate::checks::{
    StrongTypingInFlwor, StrongTypingInFunctionDeclaration, StrongTypingInModuleVariable,
};
use crate::{
    AnalysisConfig, AnalysisReport, Analyzer, Check, CheckError, CheckRegistry, Node, NodeKind,
    Priority, SourceUnit,
};

fn run(check: impl Check + 'static, root: Node) -> AnalysisReport {
    let registry = CheckRegistry::new().with_check("xquery", check);
    Analyzer::new(registry, &AnalysisConfig::default()).analyze(&SourceUnit::new("test.xq", root))
}

fn lines(report: &AnalysisReport) -> Vec<u32> {
    report.issues().iter().map(|issue| issue.line()).collect()
}

fn messages(report: &AnalysisReport) -> Vec<&str> {
    report.issues().iter().map(|issue| issue.message()).collect()
}

// ---------------------------------------------------------------------------
// FLWOR bindings
// ---------------------------------------------------------------------------

#[rstest]
#[case::both_untyped(None, None, vec![3, 4])]
#[case::for_typed(Some("element()"), None, vec![4])]
#[case::let_typed(None, Some("xs:integer"), vec![3])]
#[case::both_typed(Some("element()"), Some("xs:integer"), vec![])]
fn flwor_reports_each_untyped_binding(
    #[case] for_type: Option<&str>,
    #[case] let_type: Option<&str>,
    #[case] expected: Vec<u32>,
) {
    let report = run(StrongTypingInFlwor, fixtures::flwor(2, for_type, let_type));
    assert_eq!(lines(&report), expected);
    assert!(report.failures().is_empty());
}

#[test]
fn flwor_messages_name_the_variable() {
    let report = run(StrongTypingInFlwor, fixtures::flwor(2, None, None));
    assert_eq!(
        messages(&report),
        [
            "Declare a type for the for binding $item.",
            "Declare a type for the let binding $count.",
        ]
    );
}

#[test]
fn flwor_ignores_other_declarations() {
    let root = fixtures::main_module(
        vec![
            fixtures::var_decl(1, "limit", None, "10"),
            fixtures::function_decl(2, "local:f", &[("a", None)], None),
        ],
        Node::new(NodeKind::Literal, 3).with_token("()"),
    );
    assert!(run(StrongTypingInFlwor, root).is_clean());
}

// ---------------------------------------------------------------------------
// Function declarations
// ---------------------------------------------------------------------------

#[test]
fn function_reports_return_type_before_parameters() {
    let decl = fixtures::function_decl(
        5,
        "local:scale",
        &[("factor", None), ("items", Some("element()"))],
        None,
    );

    let report = run(StrongTypingInFunctionDeclaration, decl);
    assert_eq!(
        messages(&report),
        [
            "Declare a return type for function local:scale.",
            "Declare a type for parameter $factor of function local:scale.",
        ]
    );
    assert_eq!(lines(&report), [5, 5]);
}

#[test]
fn fully_typed_function_is_clean() {
    let decl = fixtures::function_decl(1, "local:id", &[("x", Some("item()"))], Some("item()"));
    assert!(run(StrongTypingInFunctionDeclaration, decl).is_clean());
}

#[test]
fn inline_function_parameters_are_not_reported() {
    let inline = fixtures::inline_function(2, &[("x", None)]);
    let decl = Node::new(NodeKind::FunctionDecl, 1)
        .with_token("declare")
        .with_token("function")
        .with_child(Node::new(NodeKind::EqName, 1).with_token("local:make"))
        .with_child(Node::new(NodeKind::ParamList, 1).with_token("(").with_token(")"))
        .with_child(fixtures::type_declaration(1, "function(*)"))
        .with_child(
            Node::new(NodeKind::FunctionBody, 1)
                .with_token("{")
                .with_child(inline)
                .with_token("}"),
        )
        .with_token(";");

    assert!(run(StrongTypingInFunctionDeclaration, decl).is_clean());
}

#[test]
fn parameter_outside_a_function_fails_the_check() {
    let report = run(
        StrongTypingInFunctionDeclaration,
        fixtures::param(1, "orphan", None),
    );

    assert!(report.issues().is_empty());
    let [failure] = report.failures() else {
        panic!("expected one failure, got {:?}", report.failures());
    };
    assert!(matches!(
        failure.error(),
        CheckError::MalformedNode { kind: "param", line: 1, .. }
    ));
}

// ---------------------------------------------------------------------------
// Module variables
// ---------------------------------------------------------------------------

#[rstest]
#[case::untyped(None, 1)]
#[case::typed(Some("xs:integer"), 0)]
fn module_variable_requires_a_type(#[case] item_type: Option<&str>, #[case] expected: usize) {
    let decl = fixtures::var_decl(1, "limit", item_type, "10");
    assert_eq!(run(StrongTypingInModuleVariable, decl).issues().len(), expected);
}

#[test]
fn module_variable_message_names_the_variable() {
    let report = run(
        StrongTypingInModuleVariable,
        fixtures::var_decl(7, "stats:limit", None, "10"),
    );
    assert_eq!(messages(&report), ["Declare a type for module variable $stats:limit."]);
    assert_eq!(lines(&report), [7]);
}

#[test]
fn nameless_variable_is_still_reported() {
    let decl = Node::new(NodeKind::VarDecl, 2)
        .with_token("declare")
        .with_token("variable");

    let report = run(StrongTypingInModuleVariable, decl);
    assert!(report.failures().is_empty());
    assert_eq!(lines(&report), [2]);
    assert_eq!(messages(&report), ["Declare a type for the module variable."]);
}

#[test]
fn for_binding_without_own_name_is_still_reported() {
    // The only variable name lies inside the bound expression.
    let binding = Node::new(NodeKind::ForBinding, 3)
        .with_token("$x")
        .with_token("in")
        .with_child(fixtures::var_ref(3, "items"));
    let root = Node::new(NodeKind::Module, 1).with_child(
        Node::new(NodeKind::FlworExpr, 2)
            .with_child(Node::new(NodeKind::ForClause, 3).with_token("for").with_child(binding))
            .with_child(
                Node::new(NodeKind::LetClause, 4)
                    .with_token("let")
                    .with_child(fixtures::let_binding(4, "n", Some("xs:integer"), "1")),
            ),
    );

    let report = Analyzer::builtin(&AnalysisConfig::default())
        .analyze(&SourceUnit::new("nameless.xq", root));
    assert!(report.failures().is_empty());
    assert_eq!(lines(&report), [3]);
    assert_eq!(messages(&report), ["Declare a type for the for binding."]);
}

#[test]
fn nameless_function_and_parameter_are_still_reported() {
    let decl = Node::new(NodeKind::FunctionDecl, 6)
        .with_token("declare")
        .with_token("function")
        .with_child(
            Node::new(NodeKind::ParamList, 6)
                .with_token("(")
                .with_child(Node::new(NodeKind::Param, 6).with_token("$"))
                .with_token(")"),
        );

    let report = run(StrongTypingInFunctionDeclaration, decl);
    assert!(report.failures().is_empty());
    assert_eq!(
        messages(&report),
        [
            "Declare a return type for the function.",
            "Declare a type for a parameter of the function.",
        ]
    );
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

#[rstest]
#[case(StrongTypingInFlwor.definition(), "StrongTypingInFLWOR")]
#[case(
    StrongTypingInFunctionDeclaration.definition(),
    "StrongTypingInFunctionDeclaration"
)]
#[case(StrongTypingInModuleVariable.definition(), "StrongTypingInModuleVariable")]
fn builtin_definitions_are_minor(
    #[case] definition: crate::RuleDefinition,
    #[case] rule: &str,
) {
    assert_eq!(definition.rule, rule);
    assert_eq!(definition.priority, Priority::Minor);
    assert!(definition.description.starts_with("Declare types for"));
}
