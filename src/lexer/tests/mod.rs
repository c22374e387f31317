//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Helper function to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Helper function to tokenize input and return full tokens.
pub(super) fn tokenize(input: &str) -> Vec<crate::token::Token> {
    Lexer::new(input).tokenize()
}

mod punctuation;
