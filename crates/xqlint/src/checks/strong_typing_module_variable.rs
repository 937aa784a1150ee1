use xqlint_tree::NodeKind;

use crate::check::{Check, Visit};
use crate::error::CheckError;
use crate::issue::Reporter;
use crate::rule::{Priority, RuleDefinition};

/// Reports prolog variable declarations that declare no type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongTypingInModuleVariable;

impl StrongTypingInModuleVariable {
    /// Rule name within the `xquery` repository.
    pub const RULE: &'static str = "StrongTypingInModuleVariable";
}

impl Check for StrongTypingInModuleVariable {
    fn definition(&self) -> RuleDefinition {
        RuleDefinition {
            rule: Self::RULE,
            name: "Use Strong Typing when Declaring Module Variables",
            description: concat!(
                "Declare types for declared variables to increase readability and catch ",
                "potential bugs. Also try to scope the types as narrowly as possible ",
                "(i.e. use 'element()' instead of 'item()' when the value is an element) ",
                "and include quantifiers on each type.",
            ),
            priority: Priority::Minor,
        }
    }

    fn enter_node(
        &self,
        visit: &Visit<'_, '_>,
        reporter: &mut Reporter<'_>,
    ) -> Result<(), CheckError> {
        let decl = visit.node();
        if decl.kind() != NodeKind::VarDecl || decl.type_annotation().is_some() {
            return Ok(());
        }

        let message = decl.child(NodeKind::VarName).map_or_else(
            || "Declare a type for the module variable.".to_owned(),
            |variable| format!("Declare a type for module variable ${}.", variable.text()),
        );
        reporter.add_issue(decl.line(), message);
        Ok(())
    }
}
