//! Parse error types.
//!
//! This module defines [`ParseError`], which represents every way parsing
//! can fail, and [`ParseErrorKind`] for structural matching in tests and
//! error handling code.

use crate::token::Span;

/// The kind of parse error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer produced an error token: a character span that is not part
    /// of the language.
    BadToken,
    /// A specific terminal was required and a different token was found.
    TokenMismatch,
    /// No production of the current nonterminal starts with the token found
    /// (the FIRST-set probe failed).
    ProbeFailure,
    /// A name was introduced that already exists in the symbol table.
    DuplicateSymbol,
    /// An identifier does not name any visible symbol.
    UnknownSymbol,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message, a structural
/// [`ParseErrorKind`], and the source location of the offending token.
/// Parsing aborts on the first error; there is no recovery.
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The location of the offending token.
    span: Span,
    /// The kind of error, for structured handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates an error for a lexer error token.
    pub fn bad_token(character: char, span: Span) -> Self {
        ParseError {
            message: format!("character '{character}' cannot be identified as a token"),
            span,
            kind: ParseErrorKind::BadToken,
        }
    }

    /// Creates an error for a terminal mismatch.
    pub fn token_mismatch(expected: &str, found: &str, span: Span) -> Self {
        ParseError {
            message: format!("expected {expected}, found {found}"),
            span,
            kind: ParseErrorKind::TokenMismatch,
        }
    }

    /// Creates an error for a failed FIRST-set probe.
    ///
    /// `expected` names the nonterminal that could not start, e.g.
    /// "a statement" or "an expression".
    pub fn probe_failure(expected: &str, found: &str, span: Span) -> Self {
        ParseError {
            message: format!("expected {expected}, found {found}"),
            span,
            kind: ParseErrorKind::ProbeFailure,
        }
    }

    /// Creates an error for redefining an existing symbol.
    pub fn duplicate_symbol(name: &str, span: Span) -> Self {
        ParseError {
            message: format!("redefined symbol '{name}'"),
            span,
            kind: ParseErrorKind::DuplicateSymbol,
        }
    }

    /// Creates an error for a reference to an unknown symbol.
    pub fn unknown_symbol(name: &str, span: Span) -> Self {
        ParseError {
            message: format!("unknown reference to symbol '{name}'"),
            span,
            kind: ParseErrorKind::UnknownSymbol,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location of the offending token.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns a short headline for the error, suitable for report titles.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::BadToken => "Unrecognized token",
            ParseErrorKind::TokenMismatch => "Unexpected token",
            ParseErrorKind::ProbeFailure => "Unexpected token",
            ParseErrorKind::DuplicateSymbol => "Duplicate symbol",
            ParseErrorKind::UnknownSymbol => "Unknown symbol",
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{}: error: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
