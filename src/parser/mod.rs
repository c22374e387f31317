//! Parser for the plot language.
//!
//! This module provides the [`Parser`] struct which transforms the lexer's
//! token stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser implements recursive descent, one routine per grammar
//! nonterminal, pulling tokens from the [`crate::lexer`] on demand. Each
//! routine starts with its FIRST-set probe — a `match` on the current token
//! that selects the production or fails with a
//! [`ProbeFailure`](error::ParseErrorKind::ProbeFailure) — and consumes
//! terminals through a single `expect` helper, so error reporting stays
//! uniform across nonterminals.
//!
//! The parser also owns a compile-time symbol table seeded with the
//! built-ins. Identifiers are resolved while the tree is built: an unknown
//! name is rejected immediately, and a name bound to a function selects the
//! call production. The `FOR` loop identifier is inserted just for the
//! `DRAW (x, y)` expression pair and removed afterwards, which scopes the
//! loop variable exactly to those two subtrees.
//!
//! # Grammar
//!
//! ```text
//! Program     := (Statement ';')*
//! Statement   := OriginStmt | ScaleStmt | RotStmt | ForStmt | SizeStmt | ColorStmt
//! OriginStmt  := 'ORIGIN' 'IS' '(' Expression ',' Expression ')'
//! ScaleStmt   := 'SCALE'  'IS' '(' Expression ',' Expression ')'
//! RotStmt     := 'ROT'    'IS' Expression
//! SizeStmt    := 'SIZE'   'IS' Expression
//! ColorStmt   := 'COLOR'  'IS' '(' Expression ',' Expression ',' Expression ')'
//! ForStmt     := 'FOR' Id 'FROM' Expression 'TO' Expression 'STEP' Expression
//!                'DRAW' '(' Expression ',' Expression ')'
//! Expression  := Term   (('+'|'-') Term)*
//! Term        := Factor (('*'|'/') Factor)*
//! Factor      := ('+'|'-') Factor | Component
//! Component   := Atom ('**' Component)?
//! Atom        := Number | Id | Id '(' Expression ')' | '(' Expression ')'
//! ```
//!
//! # Examples
//!
//! ```
//! use plotlang::lexer::Lexer;
//! use plotlang::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("ORIGIN IS (100, 200);"));
//! let program = parser.parse().unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and terminal matching
//! - `stmt` - Statement parsing
//! - `expr` - Expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::eval`] - Walks the AST against a canvas

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::symbols::SymbolTable;
use crate::token::TokenKind;

/// A recursive descent parser for the plot language.
///
/// The parser drives the lexer one token at a time and keeps the
/// compile-time symbol table used to classify identifiers.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce an AST. A parser is good for one run.
pub struct Parser<'a> {
    /// The token source.
    lexer: Lexer<'a>,
    /// Compile-time symbols: the built-ins plus, transiently, the loop
    /// variable of the `FOR` statement being parsed.
    symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser {
            lexer,
            symbols: SymbolTable::with_builtins(),
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// # Returns
    ///
    /// * `Ok(Program)` - The parsed program AST
    /// * `Err(ParseError)` - On the first syntax error; nothing is recovered
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails to parse, if a statement is
    /// not terminated by `;`, or if the lexer produced an error token.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        self.reject_error_token()?;

        let mut statements = Vec::new();
        while !self.is_eof() {
            let stmt = self.parse_stmt()?;
            self.expect(&TokenKind::Semicolon)?;
            statements.push(stmt);
        }

        Ok(Program { statements })
    }
}
