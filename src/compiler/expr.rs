use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::compiler::{CodeGen, Immediate, Opcode};

/// Emits code that leaves the value of `expression` on top of the stack.
pub fn gen_expression(codegen: &mut CodeGen, expression: &Node) -> Result<(), Error> {
    let opcode = match &expression.kind {
        NodeKind::IntegerLiteral(digits) => Opcode::Push(Immediate::Integer(digits.clone())),
        NodeKind::FloatLiteral(digits) => Opcode::Push(Immediate::Float(digits.clone())),
        NodeKind::StringLiteral(characters) => {
            Opcode::Push(Immediate::String(characters.clone()))
        }
        NodeKind::Identifier { name, .. } => Opcode::Load(name.clone()),
        other => MK_ERROR!(
            ErrorImpl::NotImplementedError {
                construct: other.name().to_string()
            },
            expression.position.clone()
        ),
    };

    codegen.emit(opcode, &expression.position);
    Ok(())
}

/// Whether `node` produces a value when evaluated.
pub fn is_expression(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::IntegerLiteral(_)
            | NodeKind::FloatLiteral(_)
            | NodeKind::StringLiteral(_)
            | NodeKind::Identifier { .. }
            | NodeKind::FunctionCall { .. }
            | NodeKind::Binary { .. }
            | NodeKind::TypeCast { .. }
    )
}
