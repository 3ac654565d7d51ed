//! Type system definitions for the AST.
//!
//! The language has a closed set of data types. Functions carry a
//! `CallableType` in their declaration node; the scope that declares them
//! keeps a frozen `Signature` which call sites are checked against.

use std::fmt::Display;

use super::ast::{Node, NodeKind};

/// The closed set of data types.
///
/// `None` marks "not yet computed / not applicable" and is never the type
/// of a legal expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Void,
    String,
    Integer,
    Float,
    Boolean,
    Callable,
    Indexable,
    None,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A function as declared: return type, parameter declarations and body.
///
/// Parameters are `VariableDeclaration` nodes without initialisers.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableType {
    pub return_type: DataType,
    pub parameters: Vec<Node>,
    pub body: Box<Node>,
}

impl CallableType {
    /// Freezes the parameter names and types.
    pub fn signature(&self) -> Signature {
        Signature {
            return_type: self.return_type,
            parameters: self
                .parameters
                .iter()
                .filter_map(|parameter| match &parameter.kind {
                    NodeKind::VariableDeclaration {
                        data_type,
                        identifier,
                        ..
                    } => Some((identifier.clone(), *data_type)),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// The part of a callable that call sites are checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub return_type: DataType,
    pub parameters: Vec<(String, DataType)>,
}
