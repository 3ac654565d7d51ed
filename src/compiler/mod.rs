//! Code generation boundary.
//!
//! Lowers the type-checked tree to a stack-machine instruction stream:
//!
//! - `compiler` holds the instruction set and the generator state
//! - `stmt` lowers statements
//! - `expr` lowers expressions

pub mod compiler;
pub mod expr;
pub mod stmt;
