//! Parser state and the parsing entry point.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    scanner::scanner::Scanner,
    scope::scope::ScopeStack,
    Position, MK_ERROR,
};

use super::stmt::parse_statement_list;

/// The parser: a scanner over the source and the scopes opened so far.
pub struct Parser {
    pub scanner: Scanner,
    pub scopes: ScopeStack,
}

impl Parser {
    /// Creates a parser with the global scope already open.
    pub fn new(source: &str, file: &str) -> Self {
        let mut scopes = ScopeStack::new();
        scopes.create_global_scope();

        Parser {
            scanner: Scanner::new(source, file),
            scopes,
        }
    }

    /// Returns the current position in the source file.
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// Runs `parse` inside a fresh child scope. The scope is exited whether
    /// or not `parse` succeeds.
    pub fn scoped<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.scopes.enter_scope();
        let result = parse(self);
        self.scopes.exit_scope();
        result
    }
}

/// Parses a whole program.
///
/// Returns the root statement list together with every scope created while
/// parsing; identifier nodes refer into those scopes.
pub fn parse(source: &str, file: &str) -> Result<(Node, ScopeStack), Error> {
    let mut parser = Parser::new(source, file);
    let program = parse_statement_list(&mut parser)?;

    if !parser.scanner.at_eof() {
        MK_ERROR!(
            ErrorImpl::UnexpectedToken {
                expected: String::from("end of input"),
                found: parser.scanner.describe_next(),
            },
            parser.position()
        );
    }

    Ok((program, parser.scopes))
}
