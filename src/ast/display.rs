//! Indented tree rendering for the AST.
//!
//! Backs the `ast` CLI subcommand: one node per line, two-space indents,
//! operator chains shown as nested binary nodes so precedence and
//! associativity are visible.

use std::fmt;

use super::{AddOp, Atom, Component, Expression, Factor, MulOp, Program, Stmt, Term};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.statements {
            write_stmt(f, stmt, 2)?;
        }
        Ok(())
    }
}

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}", "")
}

fn write_labeled(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    expr: &Expression,
    indent: usize,
) -> fmt::Result {
    pad(f, indent)?;
    writeln!(f, "{label}:")?;
    write_expression(f, expr, indent + 2)
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, indent: usize) -> fmt::Result {
    match stmt {
        Stmt::Origin { x, y } => {
            pad(f, indent)?;
            writeln!(f, "Origin")?;
            write_labeled(f, "x", x, indent + 2)?;
            write_labeled(f, "y", y, indent + 2)
        }
        Stmt::Scale { x, y } => {
            pad(f, indent)?;
            writeln!(f, "Scale")?;
            write_labeled(f, "x", x, indent + 2)?;
            write_labeled(f, "y", y, indent + 2)
        }
        Stmt::Rot(expr) => {
            pad(f, indent)?;
            writeln!(f, "Rot")?;
            write_expression(f, expr, indent + 2)
        }
        Stmt::Size(expr) => {
            pad(f, indent)?;
            writeln!(f, "Size")?;
            write_expression(f, expr, indent + 2)
        }
        Stmt::Color { r, g, b } => {
            pad(f, indent)?;
            writeln!(f, "Color")?;
            write_labeled(f, "r", r, indent + 2)?;
            write_labeled(f, "g", g, indent + 2)?;
            write_labeled(f, "b", b, indent + 2)
        }
        Stmt::For {
            var,
            from,
            to,
            step,
            x,
            y,
        } => {
            pad(f, indent)?;
            writeln!(f, "For {var}")?;
            write_labeled(f, "from", from, indent + 2)?;
            write_labeled(f, "to", to, indent + 2)?;
            write_labeled(f, "step", step, indent + 2)?;
            write_labeled(f, "x", x, indent + 2)?;
            write_labeled(f, "y", y, indent + 2)
        }
    }
}

fn write_expression(f: &mut fmt::Formatter<'_>, expr: &Expression, indent: usize) -> fmt::Result {
    write_additive(f, expr, expr.tail.len(), indent)
}

/// Writes the leading term plus the first `ops` tail entries as a
/// left-leaning binary tree.
fn write_additive(
    f: &mut fmt::Formatter<'_>,
    expr: &Expression,
    ops: usize,
    indent: usize,
) -> fmt::Result {
    if ops == 0 {
        return write_term(f, &expr.term, indent);
    }
    let (op, right) = &expr.tail[ops - 1];
    pad(f, indent)?;
    writeln!(
        f,
        "{}",
        match op {
            AddOp::Add => "Add",
            AddOp::Sub => "Sub",
        }
    )?;
    write_additive(f, expr, ops - 1, indent + 2)?;
    write_term(f, right, indent + 2)
}

fn write_term(f: &mut fmt::Formatter<'_>, term: &Term, indent: usize) -> fmt::Result {
    write_multiplicative(f, term, term.tail.len(), indent)
}

fn write_multiplicative(
    f: &mut fmt::Formatter<'_>,
    term: &Term,
    ops: usize,
    indent: usize,
) -> fmt::Result {
    if ops == 0 {
        return write_factor(f, &term.factor, indent);
    }
    let (op, right) = &term.tail[ops - 1];
    pad(f, indent)?;
    writeln!(
        f,
        "{}",
        match op {
            MulOp::Mul => "Mul",
            MulOp::Div => "Div",
        }
    )?;
    write_multiplicative(f, term, ops - 1, indent + 2)?;
    write_factor(f, right, indent + 2)
}

fn write_factor(f: &mut fmt::Formatter<'_>, factor: &Factor, indent: usize) -> fmt::Result {
    match factor {
        Factor::Plus(inner) => {
            pad(f, indent)?;
            writeln!(f, "Plus")?;
            write_factor(f, inner, indent + 2)
        }
        Factor::Minus(inner) => {
            pad(f, indent)?;
            writeln!(f, "Minus")?;
            write_factor(f, inner, indent + 2)
        }
        Factor::Component(component) => write_component(f, component, indent),
    }
}

fn write_component(
    f: &mut fmt::Formatter<'_>,
    component: &Component,
    indent: usize,
) -> fmt::Result {
    match &component.exponent {
        None => write_atom(f, &component.atom, indent),
        Some(exponent) => {
            pad(f, indent)?;
            writeln!(f, "Pow")?;
            write_atom(f, &component.atom, indent + 2)?;
            write_component(f, exponent, indent + 2)
        }
    }
}

fn write_atom(f: &mut fmt::Formatter<'_>, atom: &Atom, indent: usize) -> fmt::Result {
    match atom {
        Atom::Literal(value) => {
            pad(f, indent)?;
            writeln!(f, "Literal {value}")
        }
        Atom::Ident(name) => {
            pad(f, indent)?;
            writeln!(f, "Ident {name}")
        }
        Atom::Call { name, arg } => {
            pad(f, indent)?;
            writeln!(f, "Call {name}")?;
            write_expression(f, arg, indent + 2)
        }
        // Grouping is structural; the nesting already shows it.
        Atom::Paren(inner) => write_expression(f, inner, indent),
    }
}
