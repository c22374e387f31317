//! Lexical analyzer for the plot language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s on demand.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes numeric literals, identifiers, keywords, operators, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and line comments (`--` and `//`)
//!
//! Unlike a batch tokenizer, the lexer produces one token at a time:
//! [`current`](Lexer::current) returns the last produced token and
//! [`advance`](Lexer::advance) replaces it with the next one. End of input
//! surfaces as [`TokenKind::Eof`]; a character that cannot start any token
//! surfaces as [`TokenKind::Error`]. The lexer itself never fails — the
//! parser decides what to do with error tokens.
//!
//! # Supported Tokens
//!
//! - **Keywords** (case-insensitive): `ORIGIN`, `SCALE`, `ROT`, `IS`, `FOR`,
//!   `FROM`, `TO`, `STEP`, `DRAW`, `SIZE`, `COLOR`
//! - **Identifiers**: ASCII letter or underscore, then ASCII alphanumerics
//!   and underscores; original case preserved
//! - **Numeric literals**: `[1-9][0-9]*|0` with an optional `.` and optional
//!   fractional digits. Signs are never part of a literal; `-1` is a minus
//!   token followed by a literal and binds through the unary-sign rule.
//! - **Operators**: `+`, `-`, `*`, `/`, and `**` (probed before `*`)
//! - **Punctuation**: `;`, `,`, `(`, `)`
//! - **Comments**: from `--` or `//` to end of line
//!
//! # Examples
//!
//! ```
//! use plotlang::lexer::Lexer;
//! use plotlang::token::TokenKind;
//!
//! let mut lexer = Lexer::new("ROT IS 0;");
//! assert!(matches!(lexer.current().kind, TokenKind::Rot));
//! lexer.advance();
//! assert!(matches!(lexer.current().kind, TokenKind::Is));
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)

mod cursor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes plot language source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used once
/// per source file, driven by the parser one token at a time.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
    /// The most recently produced token.
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input and scans the first token.
    ///
    /// After construction [`current`](Self::current) is immediately valid:
    /// it holds the first token of the input, or [`TokenKind::Eof`] for an
    /// empty (or all-whitespace) input.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            current: Token::new(TokenKind::Eof, crate::token::Span::new(0, 0, 1, 1)),
        };
        lexer.current = lexer.scan_token();
        lexer
    }

    /// Returns the most recently produced token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Replaces the current token with the next one from the input.
    ///
    /// Advancing past the end of input keeps producing [`TokenKind::Eof`]
    /// tokens; it is safe to call unconditionally.
    pub fn advance(&mut self) {
        self.current = self.scan_token();
    }

    /// Consumes the lexer and collects every remaining token, ending with
    /// the [`TokenKind::Eof`] token.
    ///
    /// Convenience for tests and diagnostics; the parser drives the lexer
    /// through [`current`](Self::current)/[`advance`](Self::advance) instead.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = vec![self.current.clone()];
        while !matches!(self.current.kind, TokenKind::Eof) {
            self.advance();
            tokens.push(self.current.clone());
        }
        tokens
    }
}
