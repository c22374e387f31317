//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the individual token classes:
//! punctuation, operators, numeric literals, and identifiers/keywords.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the cursor.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance_char();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Scans and returns the next token from the input.
    ///
    /// Whitespace and comments before the token are skipped here, so the
    /// returned span always starts at the token's first character. At end of
    /// input this returns an [`TokenKind::Eof`] token; a character that fits
    /// no token class is consumed and returned as [`TokenKind::Error`].
    pub(super) fn scan_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, span);
        };

        match c {
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            '(' => {
                self.single_char_token(TokenKind::LeftBracket, start_pos, start_line, start_column)
            }
            ')' => {
                self.single_char_token(TokenKind::RightBracket, start_pos, start_line, start_column)
            }
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            // `--` comments were already skipped above, so a minus here is
            // always the operator.
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Divide, start_pos, start_line, start_column),
            '*' => {
                self.advance_char();
                if self.current_char() == Some('*') {
                    self.advance_char();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Token::new(TokenKind::Power, span)
                } else {
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Token::new(TokenKind::Multiply, span)
                }
            }
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => {
                self.advance_char();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Token::new(TokenKind::Error(c), span)
            }
        }
    }

    /// Reads a numeric literal from the input.
    ///
    /// The integer part is either a single `0` or a nonzero digit followed
    /// by any digits (`[1-9][0-9]*|0`), optionally followed by `.` and any
    /// fractional digits. `1.` is a valid literal; `0123` lexes as the two
    /// literals `0` and `123`, which the parser then rejects as two
    /// consecutive atoms.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        if self.current_char() == Some('0') {
            self.advance_char();
        } else {
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance_char();
            }
        }

        if self.current_char() == Some('.') {
            self.advance_char();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance_char();
            }
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        // Every shape scanned above ("0", "123", "0.5", "1.") is a valid f64.
        let value: f64 = text.parse().unwrap_or_default();
        Token::new(TokenKind::Literal(value), span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII letter or underscore followed by any
    /// number of ASCII alphanumerics or underscores. The lower-cased text is
    /// checked against the keyword set; anything else becomes an
    /// [`TokenKind::Identifier`] carrying the original-case text.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance_char();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match text.to_ascii_lowercase().as_str() {
            "origin" => TokenKind::Origin,
            "scale" => TokenKind::Scale,
            "rot" => TokenKind::Rot,
            "is" => TokenKind::Is,
            "for" => TokenKind::For,
            "from" => TokenKind::From,
            "to" => TokenKind::To,
            "step" => TokenKind::Step,
            "draw" => TokenKind::Draw,
            "size" => TokenKind::Size,
            "color" => TokenKind::Color,
            _ => TokenKind::Identifier(text.to_string()),
        };

        Token::new(kind, span)
    }
}
