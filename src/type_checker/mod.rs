//! Type checking and semantic analysis module.
//!
//! Runs once over the finished tree, children before parents:
//!
//! - Resolves identifier references and calls against the scope captured
//!   when they were parsed
//! - Enforces operand, declaration, assignment and predicate types
//! - Checks call arity and argument types against the callee's signature
//! - Makes mixed Integer/Float arithmetic explicit by inserting casts, with
//!   a warning for each one

pub mod type_checker;

#[cfg(test)]
mod tests;
