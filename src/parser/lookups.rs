use crate::{ast::expressions::BinaryOperator, ast::ast::Node, errors::errors::Error, Position};

use super::{parser::Parser, stmt::*};

/// Binary operator levels, loosest first. Each level parses its operands
/// at the next level down; the last level parses components.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Level {
    Comparison,
    Additive,
    Multiplicative,
    Exponent,
}

impl Level {
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::Comparison => Some(Level::Additive),
            Level::Additive => Some(Level::Multiplicative),
            Level::Multiplicative => Some(Level::Exponent),
            Level::Exponent => None,
        }
    }

    /// Operators of this level. Longer symbols precede their prefixes.
    pub fn operators(&self) -> &'static [BinaryOperator] {
        match self {
            Level::Comparison => &[
                BinaryOperator::LessOrEqual,
                BinaryOperator::GreaterOrEqual,
                BinaryOperator::Equal,
                BinaryOperator::NotEqual,
                BinaryOperator::LessThan,
                BinaryOperator::GreaterThan,
            ],
            Level::Additive => &[BinaryOperator::Add, BinaryOperator::Subtract],
            Level::Multiplicative => &[BinaryOperator::Multiply, BinaryOperator::Divide],
            Level::Exponent => &[BinaryOperator::Exponent],
        }
    }
}

/// Called after the keyword is consumed, with the keyword's position.
pub type StmtHandler = fn(&mut Parser, Position) -> Result<Node, Error>;

pub const STMT_LOOKUP: [(&str, StmtHandler); 4] = [
    ("if", parse_if_stmt),
    ("while", parse_while_stmt),
    ("print", parse_print_stmt),
    ("set", parse_assignment_stmt),
];
