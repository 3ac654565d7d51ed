use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} @ {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::IdentifierAlreadyDeclared { .. } => "IdentifierAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::CallableNotVisible { .. } => "CallableNotVisible",
            ErrorImpl::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::EqualityTypeMismatch { .. } => "EqualityTypeMismatch",
            ErrorImpl::DeclarationTypeMismatch { .. } => "DeclarationTypeMismatch",
            ErrorImpl::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorImpl::PredicateNotBoolean { .. } => "PredicateNotBoolean",
            ErrorImpl::InvalidCast { .. } => "InvalidCast",
            ErrorImpl::NotImplementedError { .. } => "NotImplementedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, got {}",
                expected, found
            )),
            ErrorImpl::UnterminatedString => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point must be followed by digits",
                token
            )),
            ErrorImpl::ExpectedType { found } => ErrorTip::Suggestion(format!(
                "Expected one of `int`, `float`, `string`, `bool`, `callable`, got {}",
                found
            )),
            ErrorImpl::ExpectedIdentifier { found } => {
                ErrorTip::Suggestion(format!("Expected identifier, got {}", found))
            }
            ErrorImpl::IdentifierAlreadyDeclared { identifier } => ErrorTip::Suggestion(format!(
                "`{}` already exists in this scope",
                identifier
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` used before defined", variable))
            }
            ErrorImpl::NotCallable { identifier } => {
                ErrorTip::Suggestion(format!("`{}` is not callable", identifier))
            }
            ErrorImpl::CallableNotVisible { identifier } => ErrorTip::Suggestion(format!(
                "`{}` is callable but no signature for it is visible here",
                identifier
            )),
            ErrorImpl::ArgumentCountMismatch { expected, received } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::ArgumentTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::TypeMatchError { left, right } => ErrorTip::Suggestion(format!(
                "Cannot apply `{}` and `{}` together",
                left, right
            )),
            ErrorImpl::EqualityTypeMismatch { left, right } => ErrorTip::Suggestion(format!(
                "Cannot compare `{}` with `{}`",
                left, right
            )),
            ErrorImpl::DeclarationTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Declared as `{}`, but initialised with `{}`",
                    expected, received
                ))
            }
            ErrorImpl::AssignmentTypeMismatch { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::PredicateNotBoolean { received } => ErrorTip::Suggestion(format!(
                "Predicate must evaluate to `Boolean`, received `{}`",
                received
            )),
            ErrorImpl::InvalidCast { target } => ErrorTip::Suggestion(format!(
                "Unable to cast from `String` to `{}`",
                target
            )),
            ErrorImpl::NotImplementedError { construct } => ErrorTip::Suggestion(format!(
                "Lowering `{}` is not supported by the instruction set yet",
                construct
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("end of input scanning string")]
    UnterminatedString,
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("expected type, got {found}")]
    ExpectedType { found: String },
    #[error("expected identifier, got {found}")]
    ExpectedIdentifier { found: String },
    #[error("identifier {identifier:?} already exists in this scope")]
    IdentifierAlreadyDeclared { identifier: String },
    #[error("variable {variable:?} used before defined")]
    VariableNotDeclared { variable: String },
    #[error("{identifier:?} is not callable")]
    NotCallable { identifier: String },
    #[error("no callable signature for {identifier:?} in this scope")]
    CallableNotVisible { identifier: String },
    #[error("parameter count mismatch: expected {expected}, received {received}")]
    ArgumentCountMismatch { expected: usize, received: usize },
    #[error("parameter type mismatch: expected {expected}, received {received}")]
    ArgumentTypeMatchError { expected: String, received: String },
    #[error("type mismatch - {left}->{right}")]
    TypeMatchError { left: String, right: String },
    #[error("type mismatch - cannot compare {left} with {right}")]
    EqualityTypeMismatch { left: String, right: String },
    #[error("type mismatch - rvalue not equal to lvalue: expected {expected}, received {received}")]
    DeclarationTypeMismatch { expected: String, received: String },
    #[error("assignment type mismatch: expected {expected}, received {received}")]
    AssignmentTypeMismatch { expected: String, received: String },
    #[error("type mismatch - predicate must evaluate to boolean, received {received}")]
    PredicateNotBoolean { received: String },
    #[error("unable to cast from String to {target}")]
    InvalidCast { target: String },
    #[error("not implemented: {construct}")]
    NotImplementedError { construct: String },
}
