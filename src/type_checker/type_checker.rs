use crate::{
    ast::{
        ast::{Node, NodeKind},
        expressions::BinaryOperator,
        types::{CallableType, DataType},
    },
    errors::{
        diagnostics::{DiagnosticSink, Warning},
        errors::{Error, ErrorImpl},
    },
    scope::scope::{ScopeId, ScopeStack},
    Position, MK_ERROR, MK_NODE,
};

pub struct TypeChecker<'a> {
    pub scopes: &'a ScopeStack,
    pub sink: &'a mut dyn DiagnosticSink,
}

impl<'a> TypeChecker<'a> {
    pub fn new(scopes: &'a ScopeStack, sink: &'a mut dyn DiagnosticSink) -> Self {
        TypeChecker { scopes, sink }
    }

    fn warn(&mut self, message: &str, position: &Position) {
        self.sink.warning(Warning::new(message, position.clone()));
    }
}

/// Checks a whole program and returns it with every implicit cast made
/// explicit.
pub fn type_check(
    root: Node,
    scopes: &ScopeStack,
    sink: &mut dyn DiagnosticSink,
) -> Result<Node, Error> {
    let mut type_checker = TypeChecker::new(scopes, sink);
    let (root, _) = type_check_node(&mut type_checker, root)?;
    Ok(root)
}

/// Checks `node` after its children and returns the (possibly rewritten)
/// node together with its type. Statements have type `None`.
pub fn type_check_node(
    type_checker: &mut TypeChecker,
    node: Node,
) -> Result<(Node, DataType), Error> {
    let Node { kind, position } = node;

    match kind {
        NodeKind::IntegerLiteral(_) => Ok((MK_NODE!(kind, position), DataType::Integer)),
        NodeKind::FloatLiteral(_) => Ok((MK_NODE!(kind, position), DataType::Float)),
        NodeKind::StringLiteral(_) => Ok((MK_NODE!(kind, position), DataType::String)),
        NodeKind::Identifier { name, scope } => {
            let Some(data_type) = type_checker.scopes.lookup_symbol(scope, &name) else {
                MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: name }, position);
            };

            Ok((
                MK_NODE!(NodeKind::Identifier { name, scope }, position),
                data_type,
            ))
        }
        NodeKind::FunctionCall {
            name,
            arguments,
            scope,
        } => type_check_call(type_checker, name, arguments, scope, position),
        NodeKind::Binary {
            operator,
            left,
            right,
        } => type_check_binary(type_checker, operator, *left, *right, position),
        NodeKind::TypeCast { target, operand } => {
            let (operand, operand_type) = type_check_node(type_checker, *operand)?;
            if operand_type == DataType::String {
                MK_ERROR!(
                    ErrorImpl::InvalidCast {
                        target: target.to_string()
                    },
                    position
                );
            }

            Ok((
                MK_NODE!(
                    NodeKind::TypeCast {
                        target,
                        operand: Box::new(operand),
                    },
                    position
                ),
                target,
            ))
        }
        NodeKind::StatementList(statements) => {
            let statements = statements
                .into_iter()
                .map(|statement| type_check_node(type_checker, statement).map(|(node, _)| node))
                .collect::<Result<Vec<Node>, Error>>()?;

            Ok((
                MK_NODE!(NodeKind::StatementList(statements), position),
                DataType::None,
            ))
        }
        NodeKind::If {
            predicate,
            true_branch,
            false_branch,
        } => {
            let predicate = type_check_predicate(type_checker, *predicate)?;
            let (true_branch, _) = type_check_node(type_checker, *true_branch)?;
            let false_branch = match false_branch {
                Some(branch) => Some(Box::new(type_check_node(type_checker, *branch)?.0)),
                None => None,
            };

            Ok((
                MK_NODE!(
                    NodeKind::If {
                        predicate: Box::new(predicate),
                        true_branch: Box::new(true_branch),
                        false_branch,
                    },
                    position
                ),
                DataType::None,
            ))
        }
        NodeKind::While { predicate, body } => {
            let predicate = type_check_predicate(type_checker, *predicate)?;
            let (body, _) = type_check_node(type_checker, *body)?;

            Ok((
                MK_NODE!(
                    NodeKind::While {
                        predicate: Box::new(predicate),
                        body: Box::new(body),
                    },
                    position
                ),
                DataType::None,
            ))
        }
        NodeKind::Print(expression) => {
            let (expression, _) = type_check_node(type_checker, *expression)?;
            Ok((
                MK_NODE!(NodeKind::Print(Box::new(expression)), position),
                DataType::None,
            ))
        }
        NodeKind::VariableDeclaration {
            data_type,
            identifier,
            initializer,
        } => {
            let initializer = match initializer {
                Some(initializer) => {
                    let (initializer, initializer_type) =
                        type_check_node(type_checker, *initializer)?;
                    if initializer_type != data_type {
                        MK_ERROR!(
                            ErrorImpl::DeclarationTypeMismatch {
                                expected: data_type.to_string(),
                                received: initializer_type.to_string(),
                            },
                            position
                        );
                    }
                    Some(Box::new(initializer))
                }
                None => None,
            };

            Ok((
                MK_NODE!(
                    NodeKind::VariableDeclaration {
                        data_type,
                        identifier,
                        initializer,
                    },
                    position
                ),
                DataType::None,
            ))
        }
        NodeKind::FunctionDeclaration {
            identifier,
            callable,
        } => {
            let CallableType {
                return_type,
                parameters,
                body,
            } = callable;

            let parameters = parameters
                .into_iter()
                .map(|parameter| type_check_node(type_checker, parameter).map(|(node, _)| node))
                .collect::<Result<Vec<Node>, Error>>()?;
            let (body, _) = type_check_node(type_checker, *body)?;

            Ok((
                MK_NODE!(
                    NodeKind::FunctionDeclaration {
                        identifier,
                        callable: CallableType {
                            return_type,
                            parameters,
                            body: Box::new(body),
                        },
                    },
                    position
                ),
                DataType::Callable,
            ))
        }
        NodeKind::Assignment { identifier, value } => {
            let (identifier, expected) = type_check_node(type_checker, *identifier)?;
            let (value, received) = type_check_node(type_checker, *value)?;

            if received != expected {
                MK_ERROR!(
                    ErrorImpl::AssignmentTypeMismatch {
                        expected: expected.to_string(),
                        received: received.to_string(),
                    },
                    position
                );
            }

            Ok((
                MK_NODE!(
                    NodeKind::Assignment {
                        identifier: Box::new(identifier),
                        value: Box::new(value),
                    },
                    position
                ),
                DataType::None,
            ))
        }
    }
}

fn type_check_predicate(type_checker: &mut TypeChecker, predicate: Node) -> Result<Node, Error> {
    let position = predicate.position.clone();
    let (predicate, predicate_type) = type_check_node(type_checker, predicate)?;

    if predicate_type != DataType::Boolean {
        MK_ERROR!(
            ErrorImpl::PredicateNotBoolean {
                received: predicate_type.to_string()
            },
            position
        );
    }

    Ok(predicate)
}

fn type_check_call(
    type_checker: &mut TypeChecker,
    name: String,
    arguments: Vec<Node>,
    scope: ScopeId,
    position: Position,
) -> Result<(Node, DataType), Error> {
    match type_checker.scopes.lookup_symbol(scope, &name) {
        None => MK_ERROR!(ErrorImpl::VariableNotDeclared { variable: name }, position),
        Some(DataType::Callable) => {}
        Some(_) => MK_ERROR!(ErrorImpl::NotCallable { identifier: name }, position),
    }

    let Some(signature) = type_checker.scopes.lookup_callable(scope, &name) else {
        MK_ERROR!(ErrorImpl::CallableNotVisible { identifier: name }, position);
    };

    if arguments.len() != signature.parameters.len() {
        MK_ERROR!(
            ErrorImpl::ArgumentCountMismatch {
                expected: signature.parameters.len(),
                received: arguments.len(),
            },
            position
        );
    }

    let mut checked = Vec::with_capacity(arguments.len());
    for (argument, (_, expected)) in arguments.into_iter().zip(signature.parameters.iter()) {
        let argument_position = argument.position.clone();
        let (argument, received) = type_check_node(type_checker, argument)?;

        if received != *expected {
            MK_ERROR!(
                ErrorImpl::ArgumentTypeMatchError {
                    expected: expected.to_string(),
                    received: received.to_string(),
                },
                argument_position
            );
        }
        checked.push(argument);
    }

    Ok((
        MK_NODE!(
            NodeKind::FunctionCall {
                name,
                arguments: checked,
                scope,
            },
            position
        ),
        signature.return_type,
    ))
}

fn type_check_binary(
    type_checker: &mut TypeChecker,
    operator: BinaryOperator,
    left: Node,
    right: Node,
    position: Position,
) -> Result<(Node, DataType), Error> {
    let (left, left_type) = type_check_node(type_checker, left)?;
    let (right, right_type) = type_check_node(type_checker, right)?;

    let (left, right, data_type) = if operator.is_equality() {
        let data_type = equality_type(left_type, right_type, &position)?;
        (left, right, data_type)
    } else {
        let (left, right, data_type) =
            widen_operands(type_checker, left, left_type, right, right_type, &position)?;
        if operator.is_ordering() {
            (left, right, DataType::Boolean)
        } else {
            (left, right, data_type)
        }
    };

    Ok((
        MK_NODE!(
            NodeKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
            position
        ),
        data_type,
    ))
}

/// `==` and `!=` take the type of their operands rather than Boolean.
fn equality_type(left: DataType, right: DataType, position: &Position) -> Result<DataType, Error> {
    if left == DataType::String && right == DataType::String {
        Ok(DataType::String)
    } else if left == DataType::Float || right == DataType::Float {
        Ok(DataType::Float)
    } else if left == DataType::Integer && right == DataType::Integer {
        Ok(DataType::Integer)
    } else {
        MK_ERROR!(
            ErrorImpl::EqualityTypeMismatch {
                left: left.to_string(),
                right: right.to_string(),
            },
            position.clone()
        );
    }
}

/// Rejects String operands and wraps an Integer operand mixed with a Float
/// one in a cast to Float.
fn widen_operands(
    type_checker: &mut TypeChecker,
    left: Node,
    left_type: DataType,
    right: Node,
    right_type: DataType,
    position: &Position,
) -> Result<(Node, Node, DataType), Error> {
    if left_type == DataType::String || right_type == DataType::String {
        MK_ERROR!(
            ErrorImpl::TypeMatchError {
                left: left_type.to_string(),
                right: right_type.to_string(),
            },
            position.clone()
        );
    }

    match (left_type, right_type) {
        (DataType::Integer, DataType::Float) => {
            type_checker.warn("Implicit Integer->Float cast", position);
            Ok((cast_to_float(left), right, DataType::Float))
        }
        (DataType::Float, DataType::Integer) => {
            type_checker.warn("Implicit Integer->Float cast", position);
            Ok((left, cast_to_float(right), DataType::Float))
        }
        (DataType::Float, _) | (_, DataType::Float) => Ok((left, right, DataType::Float)),
        _ => Ok((left, right, DataType::Integer)),
    }
}

fn cast_to_float(operand: Node) -> Node {
    let position = operand.position.clone();
    MK_NODE!(
        NodeKind::TypeCast {
            target: DataType::Float,
            operand: Box::new(operand),
        },
        position
    )
}
