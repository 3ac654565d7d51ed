use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::{
    compiler::{CodeGen, Opcode},
    expr::{gen_expression, is_expression},
};

pub fn gen_statement(codegen: &mut CodeGen, statement: &Node) -> Result<(), Error> {
    match &statement.kind {
        NodeKind::StatementList(statements) => {
            for statement in statements {
                gen_statement(codegen, statement)?;
            }
        }
        NodeKind::VariableDeclaration {
            identifier,
            initializer,
            ..
        } => {
            // A bare declaration only reserves the name
            if let Some(value) = initializer {
                gen_expression(codegen, value)?;
                codegen.emit(Opcode::Store(identifier.clone()), &statement.position);
            }
        }
        NodeKind::Assignment { identifier, value } => {
            let NodeKind::Identifier { name, .. } = &identifier.kind else {
                MK_ERROR!(
                    ErrorImpl::NotImplementedError {
                        construct: identifier.kind.name().to_string()
                    },
                    identifier.position.clone()
                );
            };

            gen_expression(codegen, value)?;
            codegen.emit(Opcode::Store(name.clone()), &statement.position);
        }
        _ if is_expression(statement) => {
            gen_expression(codegen, statement)?;
            codegen.emit(Opcode::Pop, &statement.position);
        }
        other => MK_ERROR!(
            ErrorImpl::NotImplementedError {
                construct: other.name().to_string()
            },
            statement.position.clone()
        ),
    }

    Ok(())
}
