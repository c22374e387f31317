//! `evaluate` implementations for the expression nodes.
//!
//! Every node leaves exactly one more value on the operand stack than it
//! found. The tails fold left to right by popping the right operand and
//! updating the new top in place.

use super::{EvalError, Evaluator};
use crate::ast::{AddOp, Atom, Component, Expression, Factor, MulOp, Term};

impl Expression {
    pub(super) fn evaluate(&self, ctx: &mut Evaluator<'_>) -> Result<(), EvalError> {
        self.term.evaluate(ctx)?;
        for (op, term) in &self.tail {
            term.evaluate(ctx)?;
            let rhs = ctx.pop()?;
            ctx.replace_top(|lhs| match op {
                AddOp::Add => lhs + rhs,
                AddOp::Sub => lhs - rhs,
            })?;
        }
        Ok(())
    }
}

impl Term {
    pub(super) fn evaluate(&self, ctx: &mut Evaluator<'_>) -> Result<(), EvalError> {
        self.factor.evaluate(ctx)?;
        for (op, factor) in &self.tail {
            factor.evaluate(ctx)?;
            let rhs = ctx.pop()?;
            ctx.replace_top(|lhs| match op {
                MulOp::Mul => lhs * rhs,
                // IEEE-754: division by zero yields an infinity here.
                MulOp::Div => lhs / rhs,
            })?;
        }
        Ok(())
    }
}

impl Factor {
    pub(super) fn evaluate(&self, ctx: &mut Evaluator<'_>) -> Result<(), EvalError> {
        match self {
            Factor::Plus(inner) => inner.evaluate(ctx),
            Factor::Minus(inner) => {
                inner.evaluate(ctx)?;
                ctx.replace_top(|value| -value)
            }
            Factor::Component(component) => component.evaluate(ctx),
        }
    }
}

impl Component {
    pub(super) fn evaluate(&self, ctx: &mut Evaluator<'_>) -> Result<(), EvalError> {
        self.atom.evaluate(ctx)?;
        if let Some(exponent) = &self.exponent {
            exponent.evaluate(ctx)?;
            let rhs = ctx.pop()?;
            ctx.replace_top(|base| base.powf(rhs))?;
        }
        Ok(())
    }
}

impl Atom {
    pub(super) fn evaluate(&self, ctx: &mut Evaluator<'_>) -> Result<(), EvalError> {
        match self {
            Atom::Literal(value) => {
                ctx.push(*value);
                Ok(())
            }
            Atom::Ident(name) => {
                let value = ctx.lookup_value(name)?;
                ctx.push(value);
                Ok(())
            }
            Atom::Call { name, arg } => {
                let function = ctx.lookup_function(name)?;
                arg.evaluate(ctx)?;
                let argument = ctx.pop()?;
                ctx.push(function(argument));
                Ok(())
            }
            Atom::Paren(inner) => inner.evaluate(ctx),
        }
    }
}
