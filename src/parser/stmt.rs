//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::Stmt;
use crate::symbols::Symbol;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement.
    ///
    /// The probe: a statement starts with one of the six statement keywords;
    /// anything else fails.
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Origin => self.parse_origin_stmt(),
            TokenKind::Scale => self.parse_scale_stmt(),
            TokenKind::Rot => self.parse_rot_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Size => self.parse_size_stmt(),
            TokenKind::Color => self.parse_color_stmt(),
            other => Err(ParseError::probe_failure(
                "a statement",
                &Self::token_kind_display(other),
                self.current_span(),
            )),
        }
    }

    /// Parses `ORIGIN IS ( Expression , Expression )`.
    fn parse_origin_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Origin)?;
        self.expect(&TokenKind::Is)?;
        self.expect(&TokenKind::LeftBracket)?;
        let x = self.parse_expression()?;
        self.expect(&TokenKind::Comma)?;
        let y = self.parse_expression()?;
        self.expect(&TokenKind::RightBracket)?;
        Ok(Stmt::Origin { x, y })
    }

    /// Parses `SCALE IS ( Expression , Expression )`.
    fn parse_scale_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Scale)?;
        self.expect(&TokenKind::Is)?;
        self.expect(&TokenKind::LeftBracket)?;
        let x = self.parse_expression()?;
        self.expect(&TokenKind::Comma)?;
        let y = self.parse_expression()?;
        self.expect(&TokenKind::RightBracket)?;
        Ok(Stmt::Scale { x, y })
    }

    /// Parses `ROT IS Expression`.
    fn parse_rot_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Rot)?;
        self.expect(&TokenKind::Is)?;
        let expr = self.parse_expression()?;
        Ok(Stmt::Rot(expr))
    }

    /// Parses `SIZE IS Expression`.
    fn parse_size_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Size)?;
        self.expect(&TokenKind::Is)?;
        let expr = self.parse_expression()?;
        Ok(Stmt::Size(expr))
    }

    /// Parses `COLOR IS ( Expression , Expression , Expression )`.
    fn parse_color_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Color)?;
        self.expect(&TokenKind::Is)?;
        self.expect(&TokenKind::LeftBracket)?;
        let r = self.parse_expression()?;
        self.expect(&TokenKind::Comma)?;
        let g = self.parse_expression()?;
        self.expect(&TokenKind::Comma)?;
        let b = self.parse_expression()?;
        self.expect(&TokenKind::RightBracket)?;
        Ok(Stmt::Color { r, g, b })
    }

    /// Parses a `FOR` statement.
    ///
    /// The loop identifier becomes a visible symbol only between `DRAW (`
    /// and the end of the `y` expression, so `from`/`to`/`step` cannot
    /// reference it while `x` and `y` can. The insert/remove pair around
    /// the draw clause is strictly LIFO, which restores the table after
    /// every statement and lets successive loops reuse the same name.
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::For)?;
        let (var, var_span) = self.expect_identifier()?;
        self.expect(&TokenKind::From)?;
        let from = self.parse_expression()?;
        self.expect(&TokenKind::To)?;
        let to = self.parse_expression()?;
        self.expect(&TokenKind::Step)?;
        let step = self.parse_expression()?;
        self.expect(&TokenKind::Draw)?;
        self.expect(&TokenKind::LeftBracket)?;

        if self.symbols.contains(&var) {
            return Err(ParseError::duplicate_symbol(&var, var_span));
        }
        self.symbols.insert(Symbol::variable(var.clone(), 0.0));

        let x = self.parse_expression()?;
        self.expect(&TokenKind::Comma)?;
        let y = self.parse_expression()?;

        self.symbols.remove(&var);

        self.expect(&TokenKind::RightBracket)?;

        Ok(Stmt::For {
            var,
            from,
            to,
            step,
            x,
            y,
        })
    }
}
