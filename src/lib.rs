#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Node,
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorTip},
    },
    parser::parser::parse,
    scope::scope::ScopeStack,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod scanner;
pub mod scope;
pub mod type_checker;

extern crate regex;

/// A location in the source: file name, 1-based line and 1-based column.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The result of a successful compilation.
///
/// `root` is the type-checked statement list with every implicit cast
/// materialised. `scopes` keeps every scope created while parsing so the
/// scope references stored in identifier nodes stay resolvable.
#[derive(Debug)]
pub struct Program {
    pub root: Node,
    pub scopes: ScopeStack,
}

/// Parses and type-checks one source buffer.
///
/// Warnings go to `sink` as they are produced; the first fatal diagnostic
/// aborts and is returned.
pub fn compile(source: &str, file: &str, sink: &mut dyn DiagnosticSink) -> Result<Program, Error> {
    let (root, scopes) = parse(source, file)?;
    let root = type_check(root, &scopes, sink)?;

    Ok(Program { root, scopes })
}

/// Returns the text of a 1-based line, without its newline.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: TypeMatchError (cannot apply `String` and `Integer` together)
        -> main.code
           |
         3 | print 1 + "a"
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
