//! Lexical analysis module for the front end.
//!
//! The scanner is a cursor over the source text. It produces lexemes on
//! demand for the parser instead of materialising a token stream:
//!
//! - Numbers, identifiers and string literals
//! - Fixed operator and keyword text via `accept` / `expect`
//! - Line and column tracking for diagnostics
//! - Whitespace and `//` comments, consumed as part of advancing

pub mod scanner;
pub mod tokens;
