use crate::{
    ast::{
        ast::{Node, NodeKind},
        types::{CallableType, DataType},
    },
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR, MK_NODE,
};

use super::{
    expr::parse_expr,
    lookups::STMT_LOOKUP,
    parser::Parser,
    types::{expect_type, parse_type},
};

/// Parses statements until `}` or the end of input.
pub fn parse_statement_list(parser: &mut Parser) -> Result<Node, Error> {
    let position = parser.position();

    let mut statements = vec![];
    while let Some(statement) = parse_stmt(parser)? {
        statements.push(statement);
    }

    Ok(MK_NODE!(NodeKind::StatementList(statements), position))
}

/// Parses one statement, or returns `None` at `}` or the end of input.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Node>, Error> {
    let position = parser.position();

    for (keyword, handler) in STMT_LOOKUP.iter() {
        if parser.scanner.accept_keyword(keyword) {
            return handler(parser, position).map(Some);
        }
    }

    if let Some(data_type) = parse_type(parser) {
        return parse_var_decl_stmt(parser, data_type, position).map(Some);
    }

    match parser.scanner.peek() {
        None | Some('}') => Ok(None),
        Some(_) => parse_expr(parser).map(Some),
    }
}

/// `'{' statementList '}'` in a new scope.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.scanner.expect("{")?;
    parser.scoped(parse_block_body)
}

/// The inside of a block, up to and including the closing `}`.
fn parse_block_body(parser: &mut Parser) -> Result<Node, Error> {
    let body = parse_statement_list(parser)?;
    parser.scanner.expect("}")?;
    Ok(body)
}

pub fn parse_if_stmt(parser: &mut Parser, position: Position) -> Result<Node, Error> {
    let predicate = parse_expr(parser)?;
    let true_branch = parse_block_stmt(parser)?;

    let false_branch = if parser.scanner.accept_keyword("else") {
        Some(Box::new(parse_block_stmt(parser)?))
    } else {
        None
    };

    Ok(MK_NODE!(
        NodeKind::If {
            predicate: Box::new(predicate),
            true_branch: Box::new(true_branch),
            false_branch,
        },
        position
    ))
}

pub fn parse_while_stmt(parser: &mut Parser, position: Position) -> Result<Node, Error> {
    let predicate = parse_expr(parser)?;
    let body = parse_block_stmt(parser)?;

    Ok(MK_NODE!(
        NodeKind::While {
            predicate: Box::new(predicate),
            body: Box::new(body),
        },
        position
    ))
}

pub fn parse_print_stmt(parser: &mut Parser, position: Position) -> Result<Node, Error> {
    let expression = parse_expr(parser)?;
    Ok(MK_NODE!(NodeKind::Print(Box::new(expression)), position))
}

/// `'set' identifier '=' expression`
pub fn parse_assignment_stmt(parser: &mut Parser, position: Position) -> Result<Node, Error> {
    let identifier_position = parser.position();
    let name = expect_identifier(parser)?;
    let identifier = MK_NODE!(
        NodeKind::Identifier {
            name,
            scope: parser.scopes.current_scope(),
        },
        identifier_position
    );

    parser.scanner.expect("=")?;
    let value = parse_expr(parser)?;

    Ok(MK_NODE!(
        NodeKind::Assignment {
            identifier: Box::new(identifier),
            value: Box::new(value),
        },
        position
    ))
}

/// `type identifier ('=' expression | '(' paramList block)?`, after the type.
pub fn parse_var_decl_stmt(
    parser: &mut Parser,
    data_type: DataType,
    position: Position,
) -> Result<Node, Error> {
    let identifier = expect_identifier(parser)?;

    if parser.scanner.accept("(") {
        return parse_fn_decl_stmt(parser, data_type, identifier, position);
    }

    let initializer = if parser.scanner.accept("=") {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    declare(parser, &identifier, data_type, &position)?;

    Ok(MK_NODE!(
        NodeKind::VariableDeclaration {
            data_type,
            identifier,
            initializer,
        },
        position
    ))
}

/// Parameters and body share one child scope. The function's own name is
/// bound in the enclosing scope only once that scope is current again.
fn parse_fn_decl_stmt(
    parser: &mut Parser,
    return_type: DataType,
    identifier: String,
    position: Position,
) -> Result<Node, Error> {
    let (parameters, body) = parser.scoped(|parser| {
        let parameters = parse_parameter_list(parser)?;
        parser.scanner.expect("{")?;
        let body = parse_block_body(parser)?;
        Ok((parameters, body))
    })?;

    let callable = CallableType {
        return_type,
        parameters,
        body: Box::new(body),
    };

    declare(parser, &identifier, DataType::Callable, &position)?;
    parser.scopes.add_callable(&identifier, callable.signature());

    Ok(MK_NODE!(
        NodeKind::FunctionDeclaration {
            identifier,
            callable,
        },
        position
    ))
}

/// `(parameter (',' parameter)*)? ')'`, after the opening parenthesis.
fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut parameters = vec![];

    let position = parser.position();
    if let Some(data_type) = parse_type(parser) {
        parameters.push(parse_parameter(parser, data_type, position)?);

        while parser.scanner.accept(",") {
            let position = parser.position();
            let data_type = expect_type(parser)?;
            parameters.push(parse_parameter(parser, data_type, position)?);
        }
    }

    parser.scanner.expect(")")?;
    Ok(parameters)
}

fn parse_parameter(
    parser: &mut Parser,
    data_type: DataType,
    position: Position,
) -> Result<Node, Error> {
    let identifier = expect_identifier(parser)?;
    declare(parser, &identifier, data_type, &position)?;

    Ok(MK_NODE!(
        NodeKind::VariableDeclaration {
            data_type,
            identifier,
            initializer: None,
        },
        position
    ))
}

fn expect_identifier(parser: &mut Parser) -> Result<String, Error> {
    if let Some(name) = parser.scanner.identifier() {
        return Ok(name);
    }

    let found = match parser.scanner.peek_word() {
        Some(word) => format!("`{}`", word),
        None => parser.scanner.describe_next(),
    };
    MK_ERROR!(ErrorImpl::ExpectedIdentifier { found }, parser.position());
}

/// Registers `identifier` in the current scope.
fn declare(
    parser: &mut Parser,
    identifier: &str,
    data_type: DataType,
    position: &Position,
) -> Result<(), Error> {
    if !parser.scopes.add_symbol(identifier, data_type) {
        MK_ERROR!(
            ErrorImpl::IdentifierAlreadyDeclared {
                identifier: identifier.to_string(),
            },
            position.clone()
        );
    }
    Ok(())
}
