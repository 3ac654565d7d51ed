//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser driving the scanner directly. Operator
//! precedence comes from a cascade of grammar levels, one per row of the
//! operator table in `lookups`:
//!
//! - Statement parsing (declarations, functions, control flow, assignment)
//! - Expression parsing (comparisons, arithmetic, casts, calls, literals)
//! - Scope handling: blocks and function bodies open scopes while they are
//!   parsed, and declarations register their names as they are built

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
