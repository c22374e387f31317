//! Token kinds for the plotlang lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the plot language.

/// The kind of token recognized by the lexer.
///
/// Each variant may carry associated data (the numeric value for literals,
/// the original-case text for identifiers, the offending character for
/// error tokens).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal (e.g. `42`, `0.5`, `1.`).
    ///
    /// Literals are unsigned at the lexical level; a leading `+` or `-`
    /// is always a separate operator token handled by the unary-sign
    /// grammar rule.
    Literal(f64),

    /// An identifier that is not a keyword (e.g. `T`, `PI`, `sin`).
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// any number of ASCII alphanumerics or underscores. The original
    /// lettercase is preserved; comparisons elsewhere are case-insensitive.
    Identifier(String),

    /// The `ORIGIN` keyword.
    Origin,

    /// The `SCALE` keyword.
    Scale,

    /// The `ROT` keyword.
    Rot,

    /// The `IS` keyword.
    Is,

    /// The `FOR` keyword.
    For,

    /// The `FROM` keyword.
    From,

    /// The `TO` keyword.
    To,

    /// The `STEP` keyword.
    Step,

    /// The `DRAW` keyword.
    Draw,

    /// The `SIZE` keyword.
    Size,

    /// The `COLOR` keyword.
    Color,

    /// A plus sign `+`.
    Plus,

    /// A minus sign `-`.
    Minus,

    /// An asterisk `*` for multiplication.
    Multiply,

    /// A forward slash `/` for division.
    Divide,

    /// A double asterisk `**` for exponentiation.
    Power,

    /// A semicolon `;` terminating a statement.
    Semicolon,

    /// A left parenthesis `(`.
    LeftBracket,

    /// A right parenthesis `)`.
    RightBracket,

    /// A comma `,`.
    Comma,

    /// A character the lexer could not classify.
    ///
    /// The lexer never fails; it consumes the offending character and
    /// emits this token. The parser rejects it on first sight.
    Error(char),

    /// End of input marker.
    Eof,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_literal() {
        let kind = TokenKind::Literal(42.0);
        assert!(matches!(kind, TokenKind::Literal(v) if v == 42.0));
    }

    #[test]
    fn test_token_kind_identifier() {
        let kind = TokenKind::Identifier("T".to_string());
        assert!(matches!(kind, TokenKind::Identifier(ref s) if s == "T"));
    }

    #[test]
    fn test_token_kind_partial_eq() {
        assert_eq!(TokenKind::Power, TokenKind::Power);
        assert_ne!(TokenKind::Multiply, TokenKind::Power);
        assert_eq!(
            TokenKind::Identifier("x".to_string()),
            TokenKind::Identifier("x".to_string())
        );
        assert_ne!(
            TokenKind::Identifier("x".to_string()),
            TokenKind::Identifier("X".to_string())
        );
    }

    #[test]
    fn test_token_kind_error_carries_character() {
        assert!(matches!(TokenKind::Error('@'), TokenKind::Error('@')));
    }
}
