//! Expression parsing tests: structure, precedence, associativity.

use super::*;
use crate::ast::{AddOp, Atom, Component, Factor, MulOp, Term};

fn atom_of_factor(factor: &Factor) -> &Atom {
    match factor {
        Factor::Component(component) => &component.atom,
        other => panic!("Expected a plain component, got {:?}", other),
    }
}

fn atom_of_term(term: &Term) -> &Atom {
    assert!(term.tail.is_empty(), "expected a single-factor term");
    atom_of_factor(&term.factor)
}

#[test]
fn test_literal_atom() {
    let expr = parse_expr("42");
    assert!(expr.tail.is_empty());
    assert_eq!(atom_of_term(&expr.term), &Atom::Literal(42.0));
}

#[test]
fn test_constant_reference() {
    let expr = parse_expr("PI");
    assert_eq!(atom_of_term(&expr.term), &Atom::Ident("PI".to_string()));
}

#[test]
fn test_identifier_preserves_case_in_ast() {
    let expr = parse_expr("pi");
    assert_eq!(atom_of_term(&expr.term), &Atom::Ident("pi".to_string()));
}

#[test]
fn test_function_call() {
    let expr = parse_expr("SIN(0)");
    let Atom::Call { name, arg } = atom_of_term(&expr.term) else {
        panic!("Expected a call atom");
    };
    assert_eq!(name, "SIN");
    assert_eq!(atom_of_term(&arg.term), &Atom::Literal(0.0));
}

#[test]
fn test_function_call_is_case_insensitive() {
    let expr = parse_expr("sin(0)");
    assert!(matches!(atom_of_term(&expr.term), Atom::Call { .. }));
}

#[test]
fn test_nested_function_call() {
    let expr = parse_expr("SQRT(EXP(1))");
    let Atom::Call { name, arg } = atom_of_term(&expr.term) else {
        panic!("Expected a call atom");
    };
    assert_eq!(name, "SQRT");
    assert!(matches!(atom_of_term(&arg.term), Atom::Call { .. }));
}

#[test]
fn test_additive_tail_is_flat_and_ordered() {
    let expr = parse_expr("1 - 2 + 3");
    assert_eq!(expr.tail.len(), 2);
    assert_eq!(expr.tail[0].0, AddOp::Sub);
    assert_eq!(expr.tail[1].0, AddOp::Add);
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    // 1 + 2 * 3 must keep `2 * 3` inside one term.
    let expr = parse_expr("1 + 2 * 3");
    assert_eq!(expr.tail.len(), 1);
    let (op, term) = &expr.tail[0];
    assert_eq!(*op, AddOp::Add);
    assert_eq!(term.tail.len(), 1);
    assert_eq!(term.tail[0].0, MulOp::Mul);
}

#[test]
fn test_unary_minus_wraps_factor() {
    let expr = parse_expr("-1");
    let Factor::Minus(inner) = &expr.term.factor else {
        panic!("Expected unary minus");
    };
    assert_eq!(atom_of_factor(inner), &Atom::Literal(1.0));
}

#[test]
fn test_stacked_unary_signs() {
    let expr = parse_expr("- +1");
    let Factor::Minus(inner) = &expr.term.factor else {
        panic!("Expected unary minus");
    };
    assert!(matches!(**inner, Factor::Plus(_)));
}

#[test]
fn test_unary_minus_applies_to_whole_power() {
    // -2 ** 2 parses as -(2 ** 2), not (-2) ** 2.
    let expr = parse_expr("-2 ** 2");
    let Factor::Minus(inner) = &expr.term.factor else {
        panic!("Expected unary minus");
    };
    let Factor::Component(component) = &**inner else {
        panic!("Expected component under the sign");
    };
    assert!(component.exponent.is_some());
}

#[test]
fn test_power_is_right_associative() {
    // 2 ** 3 ** 2 parses as 2 ** (3 ** 2).
    let expr = parse_expr("2 ** 3 ** 2");
    let Factor::Component(Component {
        atom,
        exponent: Some(exponent),
    }) = &expr.term.factor
    else {
        panic!("Expected a power component");
    };
    assert_eq!(atom, &Atom::Literal(2.0));
    assert_eq!(exponent.atom, Atom::Literal(3.0));
    assert!(exponent.exponent.is_some());
}

#[test]
fn test_parenthesized_expression() {
    let expr = parse_expr("(1 + 2) * 3");
    assert_eq!(expr.term.tail.len(), 1);
    let Atom::Paren(inner) = atom_of_factor(&expr.term.factor) else {
        panic!("Expected parenthesized atom");
    };
    assert_eq!(inner.tail.len(), 1);
}

#[test]
fn test_subtraction_of_literal_is_binary() {
    // With sign-free literal lexing, `A-1`-style sources stay binary.
    let expr = parse_expr("PI-1");
    assert_eq!(expr.tail.len(), 1);
    assert_eq!(expr.tail[0].0, AddOp::Sub);
}
