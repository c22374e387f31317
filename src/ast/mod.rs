//! Abstract Syntax Tree definitions for the plot language.
//!
//! This module defines the data structures that represent parsed programs.
//! The AST is produced by the [`crate::parser`] and consumed read-only by
//! the [`crate::eval`] tree walker.
//!
//! # Structure
//!
//! - [`Program`] - The root node: a sequence of statements
//! - [`Stmt`] - One statement (`ORIGIN`, `SCALE`, `ROT`, `SIZE`, `COLOR`, `FOR`)
//! - [`Expression`] / [`Term`] / [`Factor`] / [`Component`] / [`Atom`] -
//!   the expression grammar, one type per nonterminal
//!
//! The operator tails (`(('+'|'-') Term)*` and `(('*'|'/') Factor)*`) are
//! stored as vectors, encoding left associativity; the optional `**`
//! exponent on [`Component`] is right-recursive, encoding right
//! associativity. Ownership is strictly tree-shaped: every node exclusively
//! owns its children, and dropping the [`Program`] releases the whole tree.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes
//! - [`stmt`] - Statement nodes
//! - [`program`] - Top-level program structure
//! - [`display`] - Indented tree rendering for the `ast` subcommand

mod display;
mod expr;
mod program;
mod stmt;


pub use expr::{AddOp, Atom, Component, Expression, Factor, MulOp, Term};
pub use program::Program;
pub use stmt::Stmt;
