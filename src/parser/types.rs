use crate::{
    ast::types::DataType,
    errors::errors::{Error, ErrorImpl},
    scanner::tokens::{TYPE_LOOKUP, TYPE_NAMES},
    MK_ERROR,
};

use super::parser::Parser;

/// Accepts a type name: `int`, `float`, `string`, `bool` or `callable`.
pub fn parse_type(parser: &mut Parser) -> Option<DataType> {
    TYPE_NAMES
        .iter()
        .find(|name| parser.scanner.accept_keyword(name))
        .and_then(|name| TYPE_LOOKUP.get(name).copied())
}

/// Like `parse_type`, but a missing type name is an error.
pub fn expect_type(parser: &mut Parser) -> Result<DataType, Error> {
    match parse_type(parser) {
        Some(data_type) => Ok(data_type),
        None => MK_ERROR!(
            ErrorImpl::ExpectedType {
                found: parser.scanner.describe_next(),
            },
            parser.position()
        ),
    }
}

/// Parses an optional `<type>` cast prefix.
pub fn parse_cast_prefix(parser: &mut Parser) -> Result<Option<DataType>, Error> {
    if !parser.scanner.accept("<") {
        return Ok(None);
    }

    let target = expect_type(parser)?;
    parser.scanner.expect(">")?;

    Ok(Some(target))
}
