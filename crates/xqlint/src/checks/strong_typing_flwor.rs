use xqlint_tree::NodeKind;

use crate::check::{Check, Visit};
use crate::error::CheckError;
use crate::issue::Reporter;
use crate::rule::{Priority, RuleDefinition};

/// Reports `for` and `let` bindings that declare no type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongTypingInFlwor;

impl StrongTypingInFlwor {
    /// Rule name within the `xquery` repository.
    pub const RULE: &'static str = "StrongTypingInFLWOR";
}

impl Check for StrongTypingInFlwor {
    fn definition(&self) -> RuleDefinition {
        RuleDefinition {
            rule: Self::RULE,
            name: "Use Strong Typing FLWOR Expressions",
            description: concat!(
                "Declare types for FLWOR 'let' and 'for' clauses to increase readability ",
                "and catch potential bugs. Also try to scope the types as narrowly as possible ",
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
        let node = visit.node();
        let clause = match node.kind() {
            NodeKind::ForBinding => "for",
            NodeKind::LetBinding => "let",
            _ => return Ok(()),
        };
        if node.type_annotation().is_some() {
            return Ok(());
        }

        let message = match node.child(NodeKind::VarName) {
            Some(variable) => {
                format!("Declare a type for the {clause} binding ${}.", variable.text())
            }
            None => format!("Declare a type for the {clause} binding."),
        };
        reporter.add_issue(node.line(), message);
        Ok(())
    }
}
