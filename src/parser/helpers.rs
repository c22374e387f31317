//! Parser helper methods for token navigation and terminal matching.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Parser<'a> {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Literal(value) => format!("number '{}'", value),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Origin => "keyword 'ORIGIN'".to_string(),
            TokenKind::Scale => "keyword 'SCALE'".to_string(),
            TokenKind::Rot => "keyword 'ROT'".to_string(),
            TokenKind::Is => "keyword 'IS'".to_string(),
            TokenKind::For => "keyword 'FOR'".to_string(),
            TokenKind::From => "keyword 'FROM'".to_string(),
            TokenKind::To => "keyword 'TO'".to_string(),
            TokenKind::Step => "keyword 'STEP'".to_string(),
            TokenKind::Draw => "keyword 'DRAW'".to_string(),
            TokenKind::Size => "keyword 'SIZE'".to_string(),
            TokenKind::Color => "keyword 'COLOR'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Multiply => "'*'".to_string(),
            TokenKind::Divide => "'/'".to_string(),
            TokenKind::Power => "'**'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::LeftBracket => "'('".to_string(),
            TokenKind::RightBracket => "')'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Error(c) => format!("unrecognized character '{}'", c),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    pub(super) fn current(&self) -> &Token {
        self.lexer.current()
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Fails with [`ParseErrorKind::BadToken`](super::ParseErrorKind::BadToken)
    /// if the current token is a lexer error token.
    ///
    /// The lexer never fails on its own; this is where an uninterpretable
    /// character span turns into a syntax error.
    pub(super) fn reject_error_token(&self) -> Result<(), ParseError> {
        if let TokenKind::Error(c) = self.current_kind() {
            Err(ParseError::bad_token(*c, self.current_span()))
        } else {
            Ok(())
        }
    }

    /// Advances to the next token, rejecting lexer error tokens on sight.
    pub(super) fn bump(&mut self) -> Result<(), ParseError> {
        self.lexer.advance();
        self.reject_error_token()
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the current token matches and was consumed
    /// * `Err(ParseError)` - A `TokenMismatch` otherwise
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.bump()
        } else {
            Err(ParseError::token_mismatch(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name and span.
    pub(super) fn expect_identifier(&mut self) -> Result<(String, Span), ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            let span = self.current_span();
            self.bump()?;
            Ok((name, span))
        } else {
            Err(ParseError::token_mismatch(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }
}
