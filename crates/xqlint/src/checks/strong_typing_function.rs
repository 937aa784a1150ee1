use xqlint_tree::{Node, NodeKind};

use crate::check::{Check, Visit};
use crate::error::CheckError;
use crate::issue::Reporter;
use crate::rule::{Priority, RuleDefinition};

/// Reports declared functions whose parameters or return value carry no
/// type.
///
/// Parameters of inline function expressions are not reported: the nearest
/// enclosing function construct decides whether a parameter belongs to a
/// declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongTypingInFunctionDeclaration;

impl StrongTypingInFunctionDeclaration {
    /// Rule name within the `xquery` repository.
    pub const RULE: &'static str = "StrongTypingInFunctionDeclaration";

    fn check_param(
        visit: &Visit<'_, '_>,
        reporter: &mut Reporter<'_>,
    ) -> Result<(), CheckError> {
        let param = visit.node();
        if param.type_annotation().is_some() {
            return Ok(());
        }
        let Some(owner) =
            visit.nearest_ancestor(&[NodeKind::FunctionDecl, NodeKind::InlineFunctionExpr])
        else {
            return Err(CheckError::malformed_node(
                param.name(),
                param.line(),
                "parameter outside any function",
            ));
        };
        if owner.kind() != NodeKind::FunctionDecl {
            return Ok(());
        }

        let name = param.child(NodeKind::EqName).map_or_else(
            || "a parameter".to_owned(),
            |name| format!("parameter ${}", name.text()),
        );
        reporter.add_issue(
            param.line(),
            format!("Declare a type for {name} of {}.", function_label(owner)),
        );
        Ok(())
    }

    fn check_return_type(decl: &Node, reporter: &mut Reporter<'_>) -> Result<(), CheckError> {
        if decl.type_annotation().is_some() {
            return Ok(());
        }
        reporter.add_issue(
            decl.line(),
            format!("Declare a return type for {}.", function_label(decl)),
        );
        Ok(())
    }
}

/// Names a declared function for messages; nameless declarations read as
/// "the function".
fn function_label(decl: &Node) -> String {
    decl.child(NodeKind::EqName).map_or_else(
        || "the function".to_owned(),
        |name| format!("function {}", name.text()),
    )
}

impl Check for StrongTypingInFunctionDeclaration {
    fn definition(&self) -> RuleDefinition {
        RuleDefinition {
            rule: Self::RULE,
            name: "Use Strong Typing in Function Declarations",
            description: concat!(
                "Declare types for function parameters and return types to increase ",
                "readability and catch potential bugs. Also try to scope the types as ",
                "narrowly as possible (i.e. use 'element()' instead of 'item()' when the ",
                "return value is an element) and include quantifiers on each type.",
            ),
            priority: Priority::Minor,
        }
    }

    fn enter_node(
        &self,
        visit: &Visit<'_, '_>,
        reporter: &mut Reporter<'_>,
    ) -> Result<(), CheckError> {
        match visit.node().kind() {
            NodeKind::Param => Self::check_param(visit, reporter),
            NodeKind::FunctionDecl => Self::check_return_type(visit.node(), reporter),
            _ => Ok(()),
        }
    }
}
