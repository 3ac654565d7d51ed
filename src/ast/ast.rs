use std::fmt::Display;

use crate::{scope::scope::ScopeId, Position};

use super::{
    expressions::BinaryOperator,
    types::{CallableType, DataType},
};

/// A node of the syntax tree: what it is, and where it came from.
///
/// Children are exclusively owned. The only non-owning relation is the
/// `ScopeId` carried by identifier references and calls, which points at
/// the scope that was current when the identifier was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // Literals keep their source text.
    IntegerLiteral(String),
    FloatLiteral(String),
    StringLiteral(String),

    Identifier {
        name: String,
        scope: ScopeId,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Node>,
        scope: ScopeId,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Written as `<type> operand`, or inserted by the type checker.
    TypeCast {
        target: DataType,
        operand: Box<Node>,
    },

    /// A sequence of statements; also the root of a program.
    StatementList(Vec<Node>),
    If {
        predicate: Box<Node>,
        true_branch: Box<Node>,
        false_branch: Option<Box<Node>>,
    },
    While {
        predicate: Box<Node>,
        body: Box<Node>,
    },
    Print(Box<Node>),
    VariableDeclaration {
        data_type: DataType,
        identifier: String,
        initializer: Option<Box<Node>>,
    },
    FunctionDeclaration {
        identifier: String,
        callable: CallableType,
    },
    Assignment {
        identifier: Box<Node>,
        value: Box<Node>,
    },
}

impl NodeKind {
    /// The name used for this kind in the syntax graph and in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::IntegerLiteral(_) => "IntegerLiteral",
            NodeKind::FloatLiteral(_) => "FloatLiteral",
            NodeKind::StringLiteral(_) => "StringLiteral",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::FunctionCall { .. } => "FunctionCall",
            NodeKind::Binary { .. } => "Binary",
            NodeKind::TypeCast { .. } => "TypeCast",
            NodeKind::StatementList(_) => "StatementList",
            NodeKind::If { .. } => "If",
            NodeKind::While { .. } => "While",
            NodeKind::Print(_) => "Print",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::FunctionDeclaration { .. } => "FunctionDeclaration",
            NodeKind::Assignment { .. } => "Assignment",
        }
    }
}

fn join(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// The syntax graph: a bracketed, prefix-notated rendering of the tree.
///
/// Every child appears exactly once, in source order.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NodeKind::IntegerLiteral(digits) => write!(f, "[IntegerLiteral {}]", digits),
            NodeKind::FloatLiteral(digits) => write!(f, "[FloatLiteral {}]", digits),
            NodeKind::StringLiteral(characters) => {
                write!(f, "[StringLiteral {:?}]", characters)
            }
            NodeKind::Identifier { name, .. } => write!(f, "[Identifier {}]", name),
            NodeKind::FunctionCall {
                name, arguments, ..
            } => write!(f, "[CALL {} [PARAMS {}]]", name, join(arguments)),
            NodeKind::Binary {
                operator,
                left,
                right,
            } => write!(f, "[{} {} {}]", operator, left, right),
            NodeKind::TypeCast { target, operand } => {
                write!(f, "[CAST({}) {}]", target, operand)
            }
            NodeKind::StatementList(statements) => {
                write!(f, "[STATEMENTS {}]", join(statements))
            }
            NodeKind::If {
                predicate,
                true_branch,
                false_branch,
            } => {
                write!(f, "[IF [CONDITION {}] [THEN {}] [ELSE ", predicate, true_branch)?;
                match false_branch {
                    Some(branch) => write!(f, "{}]]", branch),
                    None => write!(f, "NULL]]"),
                }
            }
            NodeKind::While { predicate, body } => {
                write!(f, "[WHILE [CONDITION {}] [DO {}]]", predicate, body)
            }
            NodeKind::Print(expression) => write!(f, "[PRINT {}]", expression),
            NodeKind::VariableDeclaration {
                data_type,
                identifier,
                initializer,
            } => {
                write!(f, "[VAR {} [= {} ", data_type, identifier)?;
                match initializer {
                    Some(value) => write!(f, "{}]]", value),
                    None => write!(f, "NULL]]"),
                }
            }
            NodeKind::FunctionDeclaration {
                identifier,
                callable,
            } => write!(
                f,
                "[FUNCTION {} [PARAMS {}] [EXEC {}] [RET {}]]",
                identifier,
                join(&callable.parameters),
                callable.body,
                callable.return_type
            ),
            NodeKind::Assignment { identifier, value } => {
                write!(f, "[ASSIGN [= {} {}]]", identifier, value)
            }
        }
    }
}

/// Indents a syntax graph, one bracket level per indent.
pub fn pretty_print(graph: &str) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for c in graph.chars() {
        if in_string {
            result.push(c);
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => in_string = false,
                _ => escaped = false,
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '[' => {
                if indent > 0 {
                    if result.ends_with(' ') {
                        result.pop();
                    }
                    result.push('\n');
                    result.push_str(&"  ".repeat(indent));
                }
                indent += 1;
                result.push(c);
            }
            ']' => {
                indent = indent.saturating_sub(1);
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
