//! Tree-walking evaluator for the plot language.
//!
//! This module provides the [`Evaluator`] struct which walks a parsed
//! [`Program`] and drives a [`Canvas`] sink.
//!
//! # Overview
//!
//! The evaluator keeps three pieces of state:
//!
//! - an **operand stack** of reals — expression nodes push and pop their
//!   intermediate results here;
//! - a **static symbol table** — the same built-ins the parser used, now
//!   supplying values and function pointers;
//! - a **dynamic overlay** — a second table holding the current `FOR` loop
//!   variable, cleared at every expression frame boundary and consulted
//!   before the statics (overlay names shadow static ones).
//!
//! Every statement evaluates each of its expression children in an isolated
//! frame ([`Evaluator::new_expression`]) and then performs one canvas call
//! with the results. Inside a `FOR` loop the `x` and `y` coordinates each
//! get their own frame with the loop variable freshly bound, so the two
//! subtrees cannot observe each other.
//!
//! Arithmetic follows IEEE-754 throughout — division by zero propagates an
//! infinity rather than failing — and only the statement sinks validate
//! their inputs (a non-finite point size is an error, color channels clamp).
//!
//! # Module Structure
//!
//! - [`error`] - Evaluation error types
//! - `expr` - `evaluate` implementations for the expression nodes
//! - `stmt` - Statement execution and the `FOR` sweep
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree being walked
//! * [`crate::canvas`] - The sink receiving draw calls

mod expr;
mod stmt;

mod error;


pub use error::{EvalError, EvalErrorKind};

use crate::ast::Program;
use crate::canvas::Canvas;
use crate::symbols::{Symbol, SymbolKind, SymbolTable};

/// A tree-walking evaluator bound to a canvas sink.
///
/// The evaluator owns its operand stack and symbol tables for the duration
/// of a run; the canvas is borrowed mutably, so one evaluator runs at a
/// time per canvas.
pub struct Evaluator<'a> {
    /// Working stack of intermediate expression results.
    operands: Vec<f64>,
    /// The built-in constants and functions.
    statics: SymbolTable,
    /// The loop-variable overlay; consulted before `statics`.
    dynamics: SymbolTable,
    /// The drawing sink.
    canvas: &'a mut dyn Canvas,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that draws into `canvas`.
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Evaluator {
            operands: Vec::new(),
            statics: SymbolTable::with_builtins(),
            dynamics: SymbolTable::new(),
            canvas,
        }
    }

    /// Evaluates every statement of `program` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first [`EvalError`]. Canvas calls made before the error
    /// are not rolled back.
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for stmt in &program.statements {
            self.eval_stmt(stmt)?;
        }
        Ok(())
    }

    /// Opens a fresh expression frame: clears the operand stack and the
    /// dynamic overlay.
    fn new_expression(&mut self) {
        self.operands.clear();
        self.dynamics.clear();
    }

    /// Binds `name` to `value` in the dynamic overlay.
    fn bind(&mut self, name: &str, value: f64) {
        self.dynamics.insert(Symbol::variable(name, value));
    }

    /// Pushes a value onto the operand stack.
    fn push(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Pops the top of the operand stack.
    fn pop(&mut self) -> Result<f64, EvalError> {
        self.operands.pop().ok_or_else(EvalError::stack_underflow)
    }

    /// Replaces the top of the operand stack with `f(top)`.
    fn replace_top(&mut self, f: impl FnOnce(f64) -> f64) -> Result<(), EvalError> {
        let top = self
            .operands
            .last_mut()
            .ok_or_else(EvalError::stack_underflow)?;
        *top = f(*top);
        Ok(())
    }

    /// Reads the top of the operand stack without popping it.
    fn last_result(&self) -> Result<f64, EvalError> {
        self.operands
            .last()
            .copied()
            .ok_or_else(EvalError::stack_underflow)
    }

    /// Resolves `name` to a value: dynamic overlay first, then statics.
    fn lookup_value(&self, name: &str) -> Result<f64, EvalError> {
        let symbol = self
            .dynamics
            .lookup(name)
            .or_else(|| self.statics.lookup(name));
        match symbol.map(|s| s.kind) {
            Some(SymbolKind::Constant(value)) | Some(SymbolKind::Variable(value)) => Ok(value),
            _ => Err(EvalError::unknown_value_reference(name)),
        }
    }

    /// Resolves `name` to a built-in function.
    ///
    /// Function lookup is separate from value lookup; a constant or
    /// variable name is not callable.
    fn lookup_function(&self, name: &str) -> Result<crate::symbols::BuiltinFn, EvalError> {
        let symbol = self
            .dynamics
            .lookup(name)
            .or_else(|| self.statics.lookup(name));
        match symbol.map(|s| s.kind) {
            Some(SymbolKind::Function(function)) => Ok(function),
            _ => Err(EvalError::unknown_function_reference(name)),
        }
    }
}
