//! Main code generation module.
//!
//! This module contains the instruction set handed to a back end and the
//! `CodeGen` state that collects instructions while the checked tree is
//! walked.

use std::fmt::Display;

use crate::{ast::ast::Node, errors::errors::Error, Position};

use super::stmt::gen_statement;

/// A literal operand carried by `Push`, kept as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Immediate {
    Integer(String),
    Float(String),
    String(String),
}

impl Display for Immediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Immediate::Integer(digits) | Immediate::Float(digits) => write!(f, "{}", digits),
            Immediate::String(characters) => write!(f, "{:?}", characters),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Opcode {
    Push(Immediate),
    Pop,
    /// Loads the named variable onto the stack.
    Load(String),
    /// Pops the top of the stack into the named variable.
    Store(String),
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opcode::Push(immediate) => write!(f, "push {}", immediate),
            Opcode::Pop => write!(f, "pop"),
            Opcode::Load(name) => write!(f, "load {}", name),
            Opcode::Store(name) => write!(f, "store {}", name),
        }
    }
}

/// One emitted instruction and the source position it was lowered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub position: Position,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<16} ; {}", self.opcode.to_string(), self.position)
    }
}

/// Code generator state.
///
/// Holds the instruction stream built so far and the counter used to hand
/// out label names.
#[derive(Debug, Default)]
pub struct CodeGen {
    pub instructions: Vec<Instruction>,
    label_count: usize,
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen::default()
    }

    pub fn emit(&mut self, opcode: Opcode, position: &Position) {
        self.instructions.push(Instruction {
            opcode,
            position: position.clone(),
        });
    }

    /// Allocates a label name that has not been handed out before.
    pub fn next_label(&mut self) -> String {
        let label = format!("L{}", self.label_count);
        self.label_count += 1;
        label
    }
}

/// Lowers a type-checked program to a flat instruction stream.
///
/// The tree is expected to be free of type errors; constructs the
/// instruction set cannot express yet fail with `NotImplementedError`.
pub fn generate(root: &Node) -> Result<Vec<Instruction>, Error> {
    let mut codegen = CodeGen::new();
    gen_statement(&mut codegen, root)?;
    Ok(codegen.instructions)
}
