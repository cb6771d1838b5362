/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node type and its accessors
/// - operators: The binary operators a node can carry
pub mod ast;
pub mod operators;
