/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The closed `Expr` node type and its helpers
/// - expressions: Definitions for the individual node shapes
pub mod ast;
pub mod expressions;
