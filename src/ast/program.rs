//! Top-level program structure for the plot language AST.

use super::Stmt;

/// The root of a parsed program: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The statements, evaluated front to back.
    pub statements: Vec<Stmt>,
}
