//! Tests for punctuation recognition and the end-of-input token.

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("   \t\r\n  ");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_semicolon() {
    let kinds = tokenize_kinds(";");
    assert_eq!(kinds, vec![TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn test_brackets_and_comma() {
    let kinds = tokenize_kinds("(,)");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::Comma,
            TokenKind::RightBracket,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_punctuation_with_spaces() {
    let kinds = tokenize_kinds("( , ) ;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::Comma,
            TokenKind::RightBracket,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_advancing_past_eof_stays_eof() {
    let mut lexer = Lexer::new(";");
    assert!(matches!(lexer.current().kind, TokenKind::Semicolon));
    lexer.advance();
    assert!(matches!(lexer.current().kind, TokenKind::Eof));
    lexer.advance();
    assert!(matches!(lexer.current().kind, TokenKind::Eof));
}

#[test]
fn test_unrecognized_character() {
    let kinds = tokenize_kinds("@");
    assert_eq!(kinds, vec![TokenKind::Error('@'), TokenKind::Eof]);
}

#[test]
fn test_unrecognized_character_is_consumed() {
    // The lexer must make progress past a bad character.
    let kinds = tokenize_kinds("@;");
    assert_eq!(
        kinds,
        vec![TokenKind::Error('@'), TokenKind::Semicolon, TokenKind::Eof]
    );
}

#[test]
fn test_lone_dot_is_an_error() {
    let kinds = tokenize_kinds(".5");
    assert_eq!(
        kinds,
        vec![TokenKind::Error('.'), TokenKind::Literal(5.0), TokenKind::Eof]
    );
}
