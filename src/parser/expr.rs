use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR, MK_NODE,
};

use super::{lookups::Level, parser::Parser, types::parse_cast_prefix};

pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_level(parser, Level::Comparison)
}

/// Parses `operand (op operand)*` for the operators of one level, folding
/// to the left.
pub fn parse_level(parser: &mut Parser, level: Level) -> Result<Node, Error> {
    let mut left = parse_operand(parser, level)?;

    loop {
        // Trivia is already skipped, so this is where the operator starts
        let position = parser.position();
        let operator = level
            .operators()
            .iter()
            .find(|operator| parser.scanner.accept(operator.symbol()))
            .copied();

        let Some(operator) = operator else {
            return Ok(left);
        };

        let right = parse_operand(parser, level)?;
        left = MK_NODE!(
            NodeKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
            position
        );
    }
}

fn parse_operand(parser: &mut Parser, level: Level) -> Result<Node, Error> {
    match level.next() {
        Some(next) => parse_level(parser, next),
        None => parse_component(parser),
    }
}

/// `castPrefix? (number | string | identCallOrRef | '(' expression ')')`
pub fn parse_component(parser: &mut Parser) -> Result<Node, Error> {
    let position = parser.position();
    let cast = parse_cast_prefix(parser)?;
    let operand = parse_primary_expr(parser)?;

    Ok(match cast {
        Some(target) => MK_NODE!(
            NodeKind::TypeCast {
                target,
                operand: Box::new(operand),
            },
            position
        ),
        None => operand,
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let position = parser.position();

    if let Some(number) = parser.scanner.number()? {
        let kind = if number.is_float {
            NodeKind::FloatLiteral(number.digits)
        } else {
            NodeKind::IntegerLiteral(number.digits)
        };
        return Ok(MK_NODE!(kind, position));
    }

    if let Some(characters) = parser.scanner.string_literal()? {
        return Ok(MK_NODE!(NodeKind::StringLiteral(characters), position));
    }

    if let Some(name) = parser.scanner.identifier() {
        return parse_identifier_expr(parser, name, position);
    }

    if parser.scanner.accept("(") {
        let expression = parse_expr(parser)?;
        parser.scanner.expect(")")?;
        return Ok(expression);
    }

    let found = match parser.scanner.peek_word() {
        Some(word) => format!("`{}`", word),
        None => parser.scanner.describe_next(),
    };
    MK_ERROR!(
        ErrorImpl::UnexpectedToken {
            expected: String::from("expression"),
            found,
        },
        position
    );
}

/// A reference to `name`, or a call if an argument list follows. Both
/// capture the scope that is current right now.
fn parse_identifier_expr(
    parser: &mut Parser,
    name: String,
    position: Position,
) -> Result<Node, Error> {
    let scope = parser.scopes.current_scope();

    if !parser.scanner.accept("(") {
        return Ok(MK_NODE!(NodeKind::Identifier { name, scope }, position));
    }

    let mut arguments = vec![];
    if !parser.scanner.accept(")") {
        arguments.push(parse_expr(parser)?);
        while parser.scanner.accept(",") {
            arguments.push(parse_expr(parser)?);
        }
        parser.scanner.expect(")")?;
    }

    Ok(MK_NODE!(
        NodeKind::FunctionCall {
            name,
            arguments,
            scope,
        },
        position
    ))
}
