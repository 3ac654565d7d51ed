/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node type, its variants and the syntax graph export
/// - expressions: Binary operator kinds
/// - types: Data types and callable signatures
pub mod ast;
pub mod expressions;
pub mod types;
