//! Unit tests for parsing.
//!
//! Tests are organized by parser concern:
//! - [`stmt`]: Statement parsing
//! - [`expr`]: Expression parsing, precedence, associativity
//! - [`scoping`]: Loop-variable visibility and the symbol table window
//! - [`errors`]: Error detection and classification

use super::*;
use crate::ast::{Expression, Stmt};

mod expr;
mod stmt;

/// Helper function to parse input and return the Program.
pub(super) fn parse(input: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

/// Helper function to parse input, panicking on error.
pub(super) fn parse_ok(input: &str) -> Program {
    parse(input).unwrap_or_else(|e| panic!("Failed to parse input {:?}: {}", input, e))
}

/// Helper function to parse a single expression by wrapping it in a
/// `ROT IS …;` statement.
pub(super) fn parse_expr(expr_code: &str) -> Expression {
    let input = format!("ROT IS {};", expr_code);
    let program = parse_ok(&input);
    match program.statements.into_iter().next() {
        Some(Stmt::Rot(expr)) => expr,
        other => panic!("Expected a single ROT statement, got {:?}", other),
    }
}

/// Helper function to parse input and return the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Ok(program) => panic!(
            "Expected parsing to fail for input {:?}, but it succeeded with {} statements",
            input,
            program.statements.len()
        ),
        Err(e) => e,
    }
}
