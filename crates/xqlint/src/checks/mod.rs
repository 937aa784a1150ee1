//! Built-in checks for the `xquery` repository.
//!
//! Every check here reports declarations that omit a type annotation. Each
//! one reads [`Node::type_annotation`](xqlint_tree::Node::type_annotation)
//! on the node it is interested in and names the declaration in its
//! message.

mod strong_typing_flwor;
mod strong_typing_function;
mod strong_typing_module_variable;

pub use strong_typing_flwor::StrongTypingInFlwor;
pub use strong_typing_function::StrongTypingInFunctionDeclaration;
pub use strong_typing_module_variable::StrongTypingInModuleVariable;

