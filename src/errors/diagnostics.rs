use std::fmt::Display;

use crate::Position;

/// A non-fatal notice, produced alongside an automatic rewrite of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub position: Position,
}

impl Warning {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Warning {
            message: message.into(),
            position,
        }
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WARNING - {} @ {}", self.message, self.position)
    }
}

/// Receives warnings as they are produced. Must return normally.
pub trait DiagnosticSink {
    fn warning(&mut self, warning: Warning);
}

/// Prints every warning to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warning(&mut self, warning: Warning) {
        println!("{}", warning);
    }
}

impl DiagnosticSink for Vec<Warning> {
    fn warning(&mut self, warning: Warning) {
        self.push(warning);
    }
}
