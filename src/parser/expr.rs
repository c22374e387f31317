//! Expression parsing.
//!
//! One routine per nonterminal of the expression grammar. The iterated
//! tails of `Expression` and `Term` give `+`/`-` and `*`/`/` left
//! associativity; the recursion in `Component` gives `**` right
//! associativity; `Factor` puts unary sign between the two, so
//! `-2 ** 2` is `-(2 ** 2)`.

use super::Parser;
use super::error::ParseError;
use crate::ast::{AddOp, Atom, Component, Expression, Factor, MulOp, Term};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses `Expression := Term (('+'|'-') Term)*`.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let term = self.parse_term()?;
        let mut tail = Vec::new();
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => AddOp::Add,
                TokenKind::Minus => AddOp::Sub,
                _ => break,
            };
            self.bump()?;
            tail.push((op, self.parse_term()?));
        }
        Ok(Expression { term, tail })
    }

    /// Parses `Term := Factor (('*'|'/') Factor)*`.
    fn parse_term(&mut self) -> Result<Term, ParseError> {
        let factor = self.parse_factor()?;
        let mut tail = Vec::new();
        loop {
            let op = match self.current_kind() {
                TokenKind::Multiply => MulOp::Mul,
                TokenKind::Divide => MulOp::Div,
                _ => break,
            };
            self.bump()?;
            tail.push((op, self.parse_factor()?));
        }
        Ok(Term { factor, tail })
    }

    /// Parses `Factor := ('+'|'-') Factor | Component`.
    fn parse_factor(&mut self) -> Result<Factor, ParseError> {
        match self.current_kind() {
            TokenKind::Plus => {
                self.bump()?;
                Ok(Factor::Plus(Box::new(self.parse_factor()?)))
            }
            TokenKind::Minus => {
                self.bump()?;
                Ok(Factor::Minus(Box::new(self.parse_factor()?)))
            }
            TokenKind::Literal(_) | TokenKind::Identifier(_) | TokenKind::LeftBracket => {
                Ok(Factor::Component(self.parse_component()?))
            }
            other => Err(ParseError::probe_failure(
                "an expression",
                &Self::token_kind_display(other),
                self.current_span(),
            )),
        }
    }

    /// Parses `Component := Atom ('**' Component)?`.
    fn parse_component(&mut self) -> Result<Component, ParseError> {
        let atom = self.parse_atom()?;
        let exponent = if matches!(self.current_kind(), TokenKind::Power) {
            self.bump()?;
            Some(Box::new(self.parse_component()?))
        } else {
            None
        };
        Ok(Component { atom, exponent })
    }

    /// Parses `Atom := Number | Id | Id '(' Expression ')' | '(' Expression ')'`.
    ///
    /// Identifiers are classified against the symbol table here: an unknown
    /// name is rejected immediately, and a name bound to a function selects
    /// the call production — so `SIN + 1` fails on the missing `(` rather
    /// than evaluating a function as a value.
    fn parse_atom(&mut self) -> Result<Atom, ParseError> {
        match self.current_kind() {
            TokenKind::Literal(value) => {
                let value = *value;
                self.bump()?;
                Ok(Atom::Literal(value))
            }
            TokenKind::LeftBracket => {
                self.bump()?;
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RightBracket)?;
                Ok(Atom::Paren(Box::new(inner)))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                let span = self.current_span();
                let Some(symbol) = self.symbols.lookup(&name) else {
                    return Err(ParseError::unknown_symbol(&name, span));
                };

                if symbol.is_function() {
                    self.bump()?;
                    self.expect(&TokenKind::LeftBracket)?;
                    let arg = self.parse_expression()?;
                    self.expect(&TokenKind::RightBracket)?;
                    Ok(Atom::Call {
                        name,
                        arg: Box::new(arg),
                    })
                } else {
                    self.bump()?;
                    Ok(Atom::Ident(name))
                }
            }
            other => Err(ParseError::probe_failure(
                "an expression",
                &Self::token_kind_display(other),
                self.current_span(),
            )),
        }
    }
}
