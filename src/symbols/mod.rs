//! Symbol table for the plot language.
//!
//! This module provides [`Symbol`], [`SymbolKind`], and [`SymbolTable`].
//! The same table type serves two roles: at parse time it classifies
//! identifiers (so the parser can pick the function-call production for
//! `SIN(x)` and reject unknown names early), and at evaluation time it
//! supplies values. Names compare case-insensitively throughout; tables key
//! on the ASCII-lowercased name while entries keep the original spelling.
//!
//! # See Also
//!
//! * [`crate::parser`] - Consults a seeded table while building the AST
//! * [`crate::eval`] - Uses a static table plus a dynamic overlay for the
//!   loop variable

use std::collections::HashMap;
use std::f64::consts;

/// A unary real function usable as a built-in (e.g. `f64::sin`).
pub type BuiltinFn = fn(f64) -> f64;

/// The role and payload of a named entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolKind {
    /// A named constant such as `PI`.
    Constant(f64),
    /// A unary built-in function such as `SIN`.
    Function(BuiltinFn),
    /// A loop-bound variable holding the current iteration value.
    Variable(f64),
}

/// A named entry in a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The name as originally spelled.
    pub name: String,
    /// The role and payload of this entry.
    pub kind: SymbolKind,
}

impl Symbol {
    /// Creates a constant entry.
    pub fn constant(name: impl Into<String>, value: f64) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Constant(value),
        }
    }

    /// Creates a built-in function entry.
    pub fn function(name: impl Into<String>, function: BuiltinFn) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Function(function),
        }
    }

    /// Creates a variable entry.
    pub fn variable(name: impl Into<String>, value: f64) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Variable(value),
        }
    }

    /// Returns `true` if this entry names a built-in function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function(_))
    }
}

/// A flat, case-insensitive table of named entries.
///
/// Within one table every visible name is unique; a name never holds both a
/// value role and a function role at the same time. Insertion replaces any
/// same-named entry, so callers that must reject duplicates (the parser)
/// check [`contains`](Self::contains) first.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        SymbolTable {
            entries: HashMap::new(),
        }
    }

    /// Creates a table seeded with the built-in constants and functions:
    /// `PI`, `E`, `SIN`, `COS`, `TAN`, `SQRT`, `EXP`, `LN`.
    pub fn with_builtins() -> Self {
        let mut table = SymbolTable::new();
        table.insert(Symbol::constant("PI", consts::PI));
        table.insert(Symbol::constant("E", consts::E));
        table.insert(Symbol::function("SIN", f64::sin));
        table.insert(Symbol::function("COS", f64::cos));
        table.insert(Symbol::function("TAN", f64::tan));
        table.insert(Symbol::function("SQRT", f64::sqrt));
        table.insert(Symbol::function("EXP", f64::exp));
        table.insert(Symbol::function("LN", f64::ln));
        table
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }

    /// Returns `true` if the table holds an entry for `name`
    /// (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    /// Inserts an entry, replacing any existing entry with the same
    /// (case-insensitive) name.
    pub fn insert(&mut self, symbol: Symbol) {
        self.entries.insert(Self::key(&symbol.name), symbol);
    }

    /// Removes and returns the entry for `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<Symbol> {
        self.entries.remove(&Self::key(name))
    }

    /// Looks up the entry for `name` (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(&Self::key(name))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
