//! Lexical scopes.
//!
//! Scopes are created while parsing and kept for the whole compilation so
//! that identifier nodes can refer back to the scope they were parsed in.

pub mod scope;
